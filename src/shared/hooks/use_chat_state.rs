use std::rc::Rc;

use dioxus::prelude::*;

use crate::config::ClientConfig;
use crate::domain::models::ChatMessage;
use crate::shared::constants::{MESSAGE_INPUT_ID, WAITING_PLACEHOLDER};
use crate::shared::services::{
    ApiService, BrowserNavigator, ChatController, ChatView, Navigator, PlatformTimer,
};
use crate::shared::utils::dom;

/// Chat page state the controller renders into
#[derive(Clone, Copy, PartialEq)]
pub struct ChatState {
    pub messages: Signal<Vec<ChatMessage>>,
    pub typing: Signal<bool>,
    pub input_enabled: Signal<bool>,
    pub placeholder: Signal<String>,
    pub guest_expired: Signal<bool>,
}

impl ChatView for ChatState {
    fn render_message(&self, message: ChatMessage) {
        let mut messages = self.messages;
        messages.write().push(message);
    }

    fn set_typing(&self, visible: bool) {
        let mut typing = self.typing;
        typing.set(visible);
    }

    fn set_input_enabled(&self, enabled: bool) {
        let mut input_enabled = self.input_enabled;
        input_enabled.set(enabled);
    }

    fn set_placeholder(&self, text: &str) {
        let mut placeholder = self.placeholder;
        placeholder.set(text.to_string());
    }

    fn focus_input(&self) {
        dom::focus_element(MESSAGE_INPUT_ID);
    }

    fn show_guest_expired(&self) {
        let mut guest_expired = self.guest_expired;
        guest_expired.set(true);
        let mut input_enabled = self.input_enabled;
        input_enabled.set(false);
    }

    fn redirect(&self, url: &str) {
        open_dashboard(&BrowserNavigator, url);
    }
}

/// Authenticated visitors follow a normal link to the dashboard
pub fn open_dashboard<N: Navigator>(navigator: &N, url: &str) {
    navigator.assign_location(url);
}

/// Hook to manage chat state
pub fn use_chat_state() -> ChatState {
    ChatState {
        messages: use_signal(Vec::<ChatMessage>::new),
        typing: use_signal(|| false),
        input_enabled: use_signal(|| false),
        placeholder: use_signal(|| WAITING_PLACEHOLDER.to_string()),
        guest_expired: use_signal(|| false),
    }
}

pub type WebChatController = ChatController<ApiService, ChatState, PlatformTimer>;

/// Chat state plus a controller bound to it. The page-load sequence is
/// spawned once, on first render.
pub fn use_chat_controller() -> (ChatState, WebChatController) {
    let config = use_context::<ClientConfig>();
    let state = use_chat_state();

    let controller = use_hook(move || {
        let backend = Rc::new(ApiService::new(&config));
        ChatController::new(backend, state, PlatformTimer, &config)
    });

    use_hook({
        let controller = controller.clone();
        move || {
            spawn(async move {
                controller.start().await;
            });
        }
    });

    (state, controller)
}
