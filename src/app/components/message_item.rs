//! Message rendering component

use dioxus::prelude::*;

use crate::domain::models::ChatMessage;

/// A single chat bubble. Text is shown as plain text, never as HTML.
#[component]
pub fn MessageItem(message: ChatMessage) -> Element {
    let class = format!("{} message-animated", message.css_class());

    rsx! {
        div { class: "{class}",
            div { class: "chat",
                {message.text.clone()}
            }
        }
    }
}

/// Three bouncing dots while Neurochat is "typing"
#[component]
pub fn TypingIndicator() -> Element {
    rsx! {
        div { class: "message ai typing-indicator",
            span {}
            span {}
            span {}
        }
    }
}
