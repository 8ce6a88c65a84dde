use std::rc::Rc;

use dioxus::prelude::*;

use crate::domain::models::{AuthPage, ModalState};
use crate::shared::logging;
use crate::shared::services::{BrowserNavigator, Navigator};
use crate::shared::utils::dom;

/// Host-page modal holding the login/signup iframe
#[derive(Clone, Copy, PartialEq)]
pub struct ModalHandle {
    pub state: Signal<ModalState>,
}

impl ModalHandle {
    pub fn open(&self, page: AuthPage) {
        let mut state = self.state;
        state.write().open(page);
        dom::set_scroll_locked(true);
    }

    pub fn close(&self) {
        let mut state = self.state;
        state.write().close();
        dom::set_scroll_locked(false);
    }
}

/// Leave the host page for the URL the iframe asked for, without keeping
/// the host page in history
pub fn follow_iframe_redirect<N: Navigator>(navigator: &N, url: &str) {
    logging::log_redirect(url, true);
    navigator.replace_location(url);
}

/// Modal state plus the window listener that turns a redirect request from
/// the iframe into a top-level navigation. The listener is removed when
/// the page unmounts.
pub fn use_modal() -> ModalHandle {
    let handle = ModalHandle {
        state: use_signal(ModalState::default),
    };

    use_hook(move || {
        Rc::new(dom::listen_for_redirects(move |url| {
            handle.close();
            follow_iframe_redirect(&BrowserNavigator, &url);
        }))
    });

    handle
}
