use dioxus::prelude::*;

use crate::app::components::ThemeToggle;
use crate::domain::models::AuthPage;

/// Host-page header: brand, theme switch and the auth buttons
#[component]
pub fn Navbar(on_open: EventHandler<AuthPage>) -> Element {
    rsx! {
        nav { class: "c-navbar",
            div { class: "c-navbar__logo", "Neurochat" }

            div { class: "c-navbar__actions",
                ThemeToggle {}
                button {
                    id: "loginBtn",
                    class: "btn btn--ghost",
                    onclick: move |_| on_open.call(AuthPage::Login),
                    "Log in"
                }
                button {
                    id: "signupBtn",
                    class: "btn btn--primary",
                    onclick: move |_| on_open.call(AuthPage::Signup),
                    "Sign up"
                }
            }
        }
    }
}
