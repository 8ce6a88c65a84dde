//! Chat input: Enter sends, Shift+Enter inserts a newline

use dioxus::prelude::*;
use keyboard_types::Modifiers;

use crate::shared::constants::MESSAGE_INPUT_ID;

#[component]
pub fn ChatInput(
    input: Signal<String>,
    enabled: bool,
    placeholder: String,
    on_submit: EventHandler<()>,
) -> Element {
    let mut is_composing = use_signal(|| false);

    let handle_keypress = move |evt: Event<KeyboardData>| {
        if evt.key() == Key::Enter
            && !evt.modifiers().contains(Modifiers::SHIFT)
            && !*is_composing.read()
        {
            evt.prevent_default();
            if enabled {
                on_submit.call(());
            }
        }
    };

    let has_content = !input().trim().is_empty();

    rsx! {
        div { class: "chat-input",
            textarea {
                id: MESSAGE_INPUT_ID,
                class: "chat-input__textarea",
                value: "{input}",
                placeholder: "{placeholder}",
                disabled: !enabled,
                rows: "1",
                oninput: move |evt| {
                    input.set(evt.value());
                },
                onkeypress: handle_keypress,
                oncompositionstart: move |_| is_composing.set(true),
                oncompositionend: move |_| is_composing.set(false),
            }

            button {
                id: "sendBtn",
                class: "btn btn--send btn--icon-only",
                disabled: !enabled || !has_content,
                onclick: move |_| on_submit.call(()),
                span { class: "btn__icon", "➤" }
            }
        }
    }
}
