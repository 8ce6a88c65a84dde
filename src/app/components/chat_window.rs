use dioxus::prelude::*;

use crate::app::components::{MessageItem, TypingIndicator};
use crate::shared::constants::CHAT_WINDOW_ID;
use crate::shared::hooks::ChatState;
use crate::shared::utils::dom;

#[component]
pub fn ChatWindow(state: ChatState) -> Element {
    let messages = state.messages;
    let typing = state.typing;

    // Keep the newest message in view
    use_effect(move || {
        let _ = messages.read().len();
        let _ = typing();
        dom::scroll_to_bottom(CHAT_WINDOW_ID);
    });

    rsx! {
        div { id: CHAT_WINDOW_ID, class: "chat-window",
            for message in messages.read().iter() {
                MessageItem { key: "{message.id}", message: message.clone() }
            }
            if typing() {
                TypingIndicator {}
            }
        }
    }
}
