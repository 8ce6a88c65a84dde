//! In-memory fakes for controller tests

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

use async_trait::async_trait;
use futures::channel::oneshot;

use crate::domain::models::{
    AuthRequest, AuthResponse, ChatMessage, ChatMode, GuestStatus, RedirectSignal, Sender,
};
use crate::shared::errors::{ClientError, Result};
use crate::shared::services::api_service::ChatBackend;
use crate::shared::services::auth_controller::Navigator;
use crate::shared::services::chat_controller::ChatView;
use crate::shared::services::timer::Timer;

#[derive(Debug, Clone, PartialEq)]
pub enum BackendCall {
    GuestStatus,
    SetMode(ChatMode),
    SendMessage(String),
    Authenticate {
        endpoint: &'static str,
        body: serde_json::Value,
    },
}

/// Backend answering from queued replies. Chat replies go through oneshot
/// channels so a test can hold one back and release it later.
#[derive(Default)]
pub struct FakeBackend {
    status: RefCell<Option<Result<GuestStatus>>>,
    mode_replies: RefCell<VecDeque<Result<String>>>,
    message_replies: RefCell<VecDeque<oneshot::Receiver<Result<String>>>>,
    auth_replies: RefCell<VecDeque<Result<AuthResponse>>>,
    calls: RefCell<Vec<BackendCall>>,
}

impl FakeBackend {
    /// Unauthenticated visitor with time left
    pub fn guest() -> Self {
        let backend = Self::default();
        backend.set_status(Ok(GuestStatus::default()));
        backend
    }

    pub fn set_status(&self, status: Result<GuestStatus>) {
        *self.status.borrow_mut() = Some(status);
    }

    pub fn queue_mode(&self, reply: Result<String>) {
        self.mode_replies.borrow_mut().push_back(reply);
    }

    pub fn queue_message(&self, reply: Result<String>) {
        let (tx, rx) = oneshot::channel();
        let _ = tx.send(reply);
        self.message_replies.borrow_mut().push_back(rx);
    }

    /// Queue a reply that arrives only when the returned sender fires
    pub fn queue_pending_message(&self) -> oneshot::Sender<Result<String>> {
        let (tx, rx) = oneshot::channel();
        self.message_replies.borrow_mut().push_back(rx);
        tx
    }

    pub fn queue_auth(&self, reply: Result<AuthResponse>) {
        self.auth_replies.borrow_mut().push_back(reply);
    }

    pub fn calls(&self) -> Vec<BackendCall> {
        self.calls.borrow().clone()
    }

    pub fn modes_sent(&self) -> Vec<ChatMode> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                BackendCall::SetMode(mode) => Some(*mode),
                _ => None,
            })
            .collect()
    }

    pub fn messages_sent(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                BackendCall::SendMessage(text) => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    fn missing(what: &str) -> ClientError {
        ClientError::Network(format!("no {what} reply queued"))
    }
}

#[async_trait(?Send)]
impl ChatBackend for FakeBackend {
    async fn guest_status(&self) -> Result<GuestStatus> {
        self.calls.borrow_mut().push(BackendCall::GuestStatus);
        self.status
            .borrow_mut()
            .take()
            .unwrap_or_else(|| Err(Self::missing("status")))
    }

    async fn set_mode(&self, mode: ChatMode) -> Result<String> {
        self.calls.borrow_mut().push(BackendCall::SetMode(mode));
        let reply = self.mode_replies.borrow_mut().pop_front();
        reply.unwrap_or_else(|| Err(Self::missing("mode")))
    }

    async fn send_message(&self, message: &str) -> Result<String> {
        self.calls
            .borrow_mut()
            .push(BackendCall::SendMessage(message.to_string()));
        let receiver = self.message_replies.borrow_mut().pop_front();
        match receiver {
            Some(rx) => rx
                .await
                .unwrap_or_else(|_| Err(ClientError::Network("reply dropped".into()))),
            None => Err(Self::missing("message")),
        }
    }

    async fn authenticate(&self, request: &AuthRequest) -> Result<AuthResponse> {
        self.calls.borrow_mut().push(BackendCall::Authenticate {
            endpoint: request.endpoint(),
            body: serde_json::to_value(request)?,
        });
        let reply = self.auth_replies.borrow_mut().pop_front();
        reply.unwrap_or_else(|| Err(Self::missing("auth")))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    Message(Sender, String),
    Typing(bool),
    InputEnabled(bool),
    Placeholder(String),
    Focus,
    GuestExpired,
    Redirect(String),
}

/// Chat view that records every call in order
#[derive(Clone, Default)]
pub struct RecordingView {
    events: Rc<RefCell<Vec<ViewEvent>>>,
}

impl RecordingView {
    pub fn events(&self) -> Vec<ViewEvent> {
        self.events.borrow().clone()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }

    pub fn contains(&self, event: &ViewEvent) -> bool {
        self.events.borrow().contains(event)
    }

    pub fn messages(&self) -> Vec<(Sender, String)> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                ViewEvent::Message(sender, text) => Some((*sender, text.clone())),
                _ => None,
            })
            .collect()
    }

    pub fn ai_messages(&self) -> Vec<String> {
        self.messages_from(Sender::Ai)
    }

    pub fn user_messages(&self) -> Vec<String> {
        self.messages_from(Sender::User)
    }

    /// Last typing-indicator state, hidden if never touched
    pub fn typing_visible(&self) -> bool {
        self.events
            .borrow()
            .iter()
            .rev()
            .find_map(|event| match event {
                ViewEvent::Typing(visible) => Some(*visible),
                _ => None,
            })
            .unwrap_or(false)
    }

    fn messages_from(&self, sender: Sender) -> Vec<String> {
        self.messages()
            .into_iter()
            .filter(|(s, _)| *s == sender)
            .map(|(_, text)| text)
            .collect()
    }

    fn push(&self, event: ViewEvent) {
        self.events.borrow_mut().push(event);
    }
}

impl ChatView for RecordingView {
    fn render_message(&self, message: ChatMessage) {
        self.push(ViewEvent::Message(message.sender, message.text));
    }

    fn set_typing(&self, visible: bool) {
        self.push(ViewEvent::Typing(visible));
    }

    fn set_input_enabled(&self, enabled: bool) {
        self.push(ViewEvent::InputEnabled(enabled));
    }

    fn set_placeholder(&self, text: &str) {
        self.push(ViewEvent::Placeholder(text.to_string()));
    }

    fn focus_input(&self) {
        self.push(ViewEvent::Focus);
    }

    fn show_guest_expired(&self) {
        self.push(ViewEvent::GuestExpired);
    }

    fn redirect(&self, url: &str) {
        self.push(ViewEvent::Redirect(url.to_string()));
    }
}

/// Timer that returns at once and remembers what it was asked
#[derive(Clone, Default)]
pub struct RecordingTimer {
    slept: Rc<RefCell<Vec<Duration>>>,
}

impl RecordingTimer {
    pub fn slept(&self) -> Vec<Duration> {
        self.slept.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Timer for RecordingTimer {
    async fn sleep(&self, duration: Duration) {
        self.slept.borrow_mut().push(duration);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Navigation {
    Parent(RedirectSignal),
    Replace(String),
    Assign(String),
}

#[derive(Clone, Default)]
pub struct RecordingNavigator {
    pub embedded: bool,
    navigations: Rc<RefCell<Vec<Navigation>>>,
}

impl RecordingNavigator {
    pub fn embedded() -> Self {
        Self {
            embedded: true,
            ..Default::default()
        }
    }

    pub fn navigations(&self) -> Vec<Navigation> {
        self.navigations.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn is_embedded(&self) -> bool {
        self.embedded
    }

    fn post_to_parent(&self, signal: &RedirectSignal) {
        self.navigations
            .borrow_mut()
            .push(Navigation::Parent(signal.clone()));
    }

    fn replace_location(&self, url: &str) {
        self.navigations
            .borrow_mut()
            .push(Navigation::Replace(url.to_string()));
    }

    fn assign_location(&self, url: &str) {
        self.navigations
            .borrow_mut()
            .push(Navigation::Assign(url.to_string()));
    }
}
