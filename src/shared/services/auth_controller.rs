//! Login/signup submission.
//!
//! Validation happens on the [`FormState`] itself; this controller sends a
//! validated request, turns the answer into an [`AuthOutcome`] and performs
//! the post-success redirect.

use std::rc::Rc;
use std::time::Duration;

use crate::config::ClientConfig;
use crate::domain::models::{AuthRequest, FormState, FormStatus, RedirectSignal};
use crate::shared::constants::AUTH_NETWORK_ERROR;
use crate::shared::logging;
use crate::shared::services::api_service::ChatBackend;
use crate::shared::services::timer::Timer;
use crate::shared::utils::dom;

/// Page navigation used after a successful login or signup
pub trait Navigator {
    /// Running inside the host page's modal iframe
    fn is_embedded(&self) -> bool;

    fn post_to_parent(&self, signal: &RedirectSignal);

    /// Navigate without leaving a history entry
    fn replace_location(&self, url: &str);

    /// Navigate like following a link
    fn assign_location(&self, url: &str);
}

/// Real browser navigation
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn is_embedded(&self) -> bool {
        dom::is_embedded()
    }

    fn post_to_parent(&self, signal: &RedirectSignal) {
        if !dom::post_to_parent(signal) {
            tracing::warn!("Could not reach parent window, redirecting in place");
            dom::replace_location(&signal.url);
        }
    }

    fn replace_location(&self, url: &str) {
        dom::replace_location(url);
    }

    fn assign_location(&self, url: &str) {
        dom::assign_location(url);
    }
}

/// How a credential submission ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    /// Local validation failed, nothing was sent
    Invalid,
    /// Backend answered with `message`
    Accepted(String),
    /// Backend answered with `error`
    Rejected(String),
    /// Backend answered with neither field
    Unanswered,
    /// Transport or decode failure
    Failed,
}

impl AuthOutcome {
    /// Status line for this outcome; `None` leaves the current one
    pub fn status(&self) -> Option<FormStatus> {
        match self {
            AuthOutcome::Accepted(message) => Some(FormStatus::Success(message.clone())),
            AuthOutcome::Rejected(error) => Some(FormStatus::Error(error.clone())),
            AuthOutcome::Failed => Some(FormStatus::Error(AUTH_NETWORK_ERROR.to_string())),
            AuthOutcome::Invalid | AuthOutcome::Unanswered => None,
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, AuthOutcome::Accepted(_))
    }
}

pub struct AuthController<B, N, T> {
    backend: Rc<B>,
    navigator: N,
    timer: T,
    redirect_delay: Duration,
    dashboard_url: String,
}

impl<B, N: Clone, T: Clone> Clone for AuthController<B, N, T> {
    fn clone(&self) -> Self {
        Self {
            backend: Rc::clone(&self.backend),
            navigator: self.navigator.clone(),
            timer: self.timer.clone(),
            redirect_delay: self.redirect_delay,
            dashboard_url: self.dashboard_url.clone(),
        }
    }
}

impl<B: ChatBackend, N: Navigator, T: Timer> AuthController<B, N, T> {
    pub fn new(backend: Rc<B>, navigator: N, timer: T, config: &ClientConfig) -> Self {
        Self {
            backend,
            navigator,
            timer,
            redirect_delay: config.delays.redirect(),
            dashboard_url: config.dashboard_url.clone(),
        }
    }

    /// Post validated credentials. `message` wins over `error` when a
    /// response carries both.
    pub async fn send(&self, request: &AuthRequest) -> AuthOutcome {
        let endpoint = request.endpoint();
        logging::log_auth_submit(endpoint);

        match self.backend.authenticate(request).await {
            Ok(response) => match (response.message, response.error) {
                (Some(message), _) => AuthOutcome::Accepted(message),
                (None, Some(error)) => AuthOutcome::Rejected(error),
                (None, None) => AuthOutcome::Unanswered,
            },
            Err(e) => {
                logging::log_auth_error(endpoint, &e);
                AuthOutcome::Failed
            }
        }
    }

    /// After a success, wait for the message to be read, then go to the
    /// dashboard: through the host window when embedded, directly otherwise.
    pub async fn finish(&self, outcome: &AuthOutcome) {
        if !outcome.is_accepted() {
            return;
        }

        self.timer.sleep(self.redirect_delay).await;

        let embedded = self.navigator.is_embedded();
        logging::log_redirect(&self.dashboard_url, embedded);
        if embedded {
            self.navigator
                .post_to_parent(&RedirectSignal::to(&self.dashboard_url));
        } else {
            self.navigator.replace_location(&self.dashboard_url);
        }
    }

    /// Whole submission on a form owned by the caller: validate, send,
    /// update the status line, redirect on success.
    pub async fn submit(&self, form: &mut FormState) -> AuthOutcome {
        let request = match form.prepare_submission() {
            Ok(request) => request,
            Err(errors) => {
                logging::log_validation_failed(form.kind(), errors.len());
                return AuthOutcome::Invalid;
            }
        };

        let outcome = self.send(&request).await;
        if let Some(status) = outcome.status() {
            form.set_status(status);
        }
        self.finish(&outcome).await;
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{AuthResponse, Field, FormKind};
    use crate::shared::errors::ClientError;
    use crate::shared::services::testing::{
        BackendCall, FakeBackend, Navigation, RecordingNavigator, RecordingTimer,
    };
    use serde_json::json;

    type TestController = AuthController<FakeBackend, RecordingNavigator, RecordingTimer>;

    fn controller(navigator: RecordingNavigator) -> (TestController, Rc<FakeBackend>, RecordingTimer) {
        let backend = Rc::new(FakeBackend::default());
        let timer = RecordingTimer::default();
        let controller = AuthController::new(
            Rc::clone(&backend),
            navigator,
            timer.clone(),
            &ClientConfig::default(),
        );
        (controller, backend, timer)
    }

    fn filled_signup(password: &str, repeat: &str) -> FormState {
        let mut form = FormState::new(FormKind::Signup);
        form.edit(Field::FirstName, "Ada");
        form.edit(Field::Email, "ada@example.com");
        form.edit(Field::Password, password);
        form.edit(Field::RepeatPassword, repeat);
        form
    }

    fn filled_login() -> FormState {
        let mut form = FormState::new(FormKind::Login);
        form.edit(Field::Email, "ada@example.com");
        form.edit(Field::Password, "secret");
        form
    }

    #[tokio::test]
    async fn test_invalid_form_sends_nothing() {
        let navigator = RecordingNavigator::default();
        let (controller, backend, _timer) = controller(navigator.clone());
        let mut form = FormState::new(FormKind::Signup);

        let outcome = controller.submit(&mut form).await;

        assert_eq!(outcome, AuthOutcome::Invalid);
        assert!(backend.calls().is_empty());
        assert!(navigator.navigations().is_empty());
        assert!(form.is_invalid(Field::FirstName));
        assert!(form.is_invalid(Field::Email));
        assert!(form.is_invalid(Field::Password));
        assert_eq!(
            form.status().text(),
            "Firstname is required. Email is required. Password is required"
        );
    }

    #[tokio::test]
    async fn test_signup_posts_first_name() {
        let (controller, backend, _timer) = controller(RecordingNavigator::default());
        backend.queue_auth(Ok(AuthResponse {
            message: Some("Account created successfully".into()),
            error: None,
        }));
        let mut form = filled_signup("correcthorse", "correcthorse");

        controller.submit(&mut form).await;

        assert_eq!(
            backend.calls(),
            vec![BackendCall::Authenticate {
                endpoint: "/auth/signup",
                body: json!({
                    "first_name": "Ada",
                    "email": "ada@example.com",
                    "password": "correcthorse"
                }),
            }]
        );
    }

    #[tokio::test]
    async fn test_login_targets_login_endpoint() {
        let (controller, backend, _timer) = controller(RecordingNavigator::default());
        backend.queue_auth(Ok(AuthResponse {
            message: None,
            error: Some("Invalid email or password".into()),
        }));
        let mut form = filled_login();

        let outcome = controller.submit(&mut form).await;

        assert_eq!(outcome, AuthOutcome::Rejected("Invalid email or password".into()));
        assert_eq!(
            backend.calls(),
            vec![BackendCall::Authenticate {
                endpoint: "/auth/login",
                body: json!({"email": "ada@example.com", "password": "secret"}),
            }]
        );
        assert_eq!(
            form.status(),
            &FormStatus::Error("Invalid email or password".into())
        );
    }

    #[tokio::test]
    async fn test_success_redirects_directly_when_top_level() {
        let navigator = RecordingNavigator::default();
        let (controller, backend, timer) = controller(navigator.clone());
        backend.queue_auth(Ok(AuthResponse {
            message: Some("Login successful".into()),
            error: None,
        }));
        let mut form = filled_login();

        let outcome = controller.submit(&mut form).await;

        assert!(outcome.is_accepted());
        assert_eq!(form.status(), &FormStatus::Success("Login successful".into()));
        assert_eq!(timer.slept(), vec![Duration::from_millis(1500)]);
        assert_eq!(
            navigator.navigations(),
            vec![Navigation::Replace("/dashboard".into())]
        );
    }

    #[tokio::test]
    async fn test_success_signals_parent_when_embedded() {
        let navigator = RecordingNavigator::embedded();
        let (controller, backend, _timer) = controller(navigator.clone());
        backend.queue_auth(Ok(AuthResponse {
            message: Some("Login successful".into()),
            error: None,
        }));

        controller.submit(&mut filled_login()).await;

        assert_eq!(
            navigator.navigations(),
            vec![Navigation::Parent(RedirectSignal::to("/dashboard"))]
        );
    }

    #[tokio::test]
    async fn test_network_failure_shows_generic_error() {
        let navigator = RecordingNavigator::default();
        let (controller, backend, _timer) = controller(navigator.clone());
        backend.queue_auth(Err(ClientError::Network("connection reset".into())));
        let mut form = filled_login();

        let outcome = controller.submit(&mut form).await;

        assert_eq!(outcome, AuthOutcome::Failed);
        assert_eq!(form.status(), &FormStatus::Error(AUTH_NETWORK_ERROR.into()));
        assert!(navigator.navigations().is_empty());
    }

    #[tokio::test]
    async fn test_empty_response_keeps_status() {
        let (controller, backend, _timer) = controller(RecordingNavigator::default());
        backend.queue_auth(Ok(AuthResponse::default()));
        let mut form = filled_login();

        let outcome = controller.submit(&mut form).await;

        assert_eq!(outcome, AuthOutcome::Unanswered);
        assert_eq!(form.status(), &FormStatus::Idle);
    }

    #[tokio::test]
    async fn test_message_wins_over_error() {
        let (controller, backend, _timer) = controller(RecordingNavigator::default());
        backend.queue_auth(Ok(AuthResponse {
            message: Some("ok".into()),
            error: Some("ignored".into()),
        }));

        let outcome = controller.send(&filled_login().validate().unwrap()).await;
        assert_eq!(outcome, AuthOutcome::Accepted("ok".into()));
    }

    #[tokio::test]
    async fn test_fix_and_resubmit() {
        let (controller, backend, _timer) = controller(RecordingNavigator::default());
        let mut form = filled_signup("short", "short");

        assert_eq!(controller.submit(&mut form).await, AuthOutcome::Invalid);
        assert!(form.is_invalid(Field::Password));

        form.edit(Field::Password, "longer-password");
        assert!(!form.is_invalid(Field::Password));
        form.edit(Field::RepeatPassword, "longer-password");

        backend.queue_auth(Ok(AuthResponse {
            message: Some("Account created successfully".into()),
            error: None,
        }));
        assert!(controller.submit(&mut form).await.is_accepted());
    }
}
