use dioxus::prelude::*;

use crate::shared::hooks::ModalHandle;

/// Overlay hosting the login or signup page in an iframe. Clicking the
/// backdrop or the close button dismisses it.
#[component]
pub fn LoginModal(modal: ModalHandle) -> Element {
    let (overlay_class, src) = {
        let state = modal.state.read();
        let class = if state.is_open() {
            "modal-overlay show"
        } else {
            "modal-overlay"
        };
        (class, state.iframe_src())
    };

    rsx! {
        div {
            id: "loginModal",
            class: "{overlay_class}",
            onclick: move |_| modal.close(),

            div {
                class: "modal-content",
                onclick: move |evt| evt.stop_propagation(),

                button {
                    class: "modal-close",
                    aria_label: "Close",
                    onclick: move |_| modal.close(),
                    "×"
                }
                if !src.is_empty() {
                    iframe { id: "loginFrame", src: "{src}" }
                }
            }
        }
    }
}
