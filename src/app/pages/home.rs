//! Guest chat page
//!
//! Hosts the chat controller and the login/signup modal. Input is handed to
//! the controller synchronously so the echo, mode classification and ticket
//! happen in submission order; the backend round trip runs in a spawned task.

use dioxus::prelude::*;

use crate::app::components::{ChatInput, ChatWindow, GuestExpired, LoginModal};
use crate::app::layouts::Navbar;
use crate::domain::models::AuthPage;
use crate::shared::hooks::{use_chat_controller, use_modal};

#[component]
pub fn HomePage() -> Element {
    let modal = use_modal();
    let (state, controller) = use_chat_controller();
    let mut input = use_signal(String::new);

    let handle_submit = move |_| {
        let text = input();
        if let Some(turn) = controller.accept_input(&text) {
            input.set(String::new());
            let controller = controller.clone();
            spawn(async move {
                controller.run_turn(turn).await;
            });
        }
    };

    rsx! {
        div { class: "chat-page",
            Navbar { on_open: move |page: AuthPage| modal.open(page) }

            main { class: "chat-page__main",
                ChatWindow { state }
                ChatInput {
                    input,
                    enabled: *state.input_enabled.read(),
                    placeholder: state.placeholder.read().clone(),
                    on_submit: handle_submit,
                }
            }

            if *state.guest_expired.read() {
                GuestExpired { on_signup: move |_| modal.open(AuthPage::Signup) }
            }

            LoginModal { modal }
        }
    }
}
