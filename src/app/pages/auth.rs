use dioxus::prelude::*;

use crate::app::components::AuthForm;
use crate::domain::models::FormKind;

#[component]
pub fn LoginPage() -> Element {
    rsx! {
        div { class: "auth-page",
            AuthForm { kind: FormKind::Login }
        }
    }
}

#[component]
pub fn SignupPage() -> Element {
    rsx! {
        div { class: "auth-page",
            AuthForm { kind: FormKind::Signup }
        }
    }
}
