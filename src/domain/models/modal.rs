use serde::{Deserialize, Serialize};

/// Auth page loaded inside the host modal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthPage {
    Login,
    Signup,
}

impl AuthPage {
    pub fn path(&self) -> &'static str {
        match self {
            AuthPage::Login => "/login",
            AuthPage::Signup => "/signup",
        }
    }
}

/// Login/signup overlay on the host page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModalState {
    page: Option<AuthPage>,
}

impl ModalState {
    pub fn open(&mut self, page: AuthPage) {
        self.page = Some(page);
    }

    /// Closing also unloads the iframe so its scripts stop
    pub fn close(&mut self) {
        self.page = None;
    }

    pub fn is_open(&self) -> bool {
        self.page.is_some()
    }

    pub fn page(&self) -> Option<AuthPage> {
        self.page
    }

    pub fn iframe_src(&self) -> &'static str {
        self.page.map(|page| page.path()).unwrap_or("")
    }
}
