use std::rc::Rc;

use dioxus::prelude::*;

use crate::config::ClientConfig;
use crate::domain::models::{Field, FormKind, FormState};
use crate::shared::logging;
use crate::shared::services::{ApiService, AuthController, BrowserNavigator, PlatformTimer};

pub type WebAuthController = AuthController<ApiService, BrowserNavigator, PlatformTimer>;

/// A login or signup form bound to the backend
#[derive(Clone)]
pub struct AuthFormState {
    pub form: Signal<FormState>,
    controller: WebAuthController,
}

impl AuthFormState {
    pub fn edit(&self, field: Field, value: String) {
        let mut form = self.form;
        form.write().edit(field, value);
    }

    /// Validate locally and, when that passes, post in the background.
    /// The form signal is never held across the request.
    pub fn submit(&self) {
        let mut form = self.form;
        let prepared = form.write().prepare_submission();
        let request = match prepared {
            Ok(request) => request,
            Err(errors) => {
                logging::log_validation_failed(form.peek().kind(), errors.len());
                return;
            }
        };

        let controller = self.controller.clone();
        spawn(async move {
            let outcome = controller.send(&request).await;
            if let Some(status) = outcome.status() {
                form.write().set_status(status);
            }
            controller.finish(&outcome).await;
        });
    }
}

pub fn use_auth_form(kind: FormKind) -> AuthFormState {
    let config = use_context::<ClientConfig>();
    let form = use_signal(|| FormState::new(kind));

    let controller = use_hook(move || {
        let backend = Rc::new(ApiService::new(&config));
        AuthController::new(backend, BrowserNavigator, PlatformTimer, &config)
    });

    AuthFormState { form, controller }
}
