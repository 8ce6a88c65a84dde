use dioxus::prelude::*;

use crate::shared::constants::{GUEST_EXPIRED_BODY, GUEST_EXPIRED_TITLE};

/// Overlay shown once the guest session has run out
#[component]
pub fn GuestExpired(on_signup: EventHandler<()>) -> Element {
    rsx! {
        div { class: "guest-expired",
            div { class: "guest-expired__card",
                h2 { {GUEST_EXPIRED_TITLE} }
                p { {GUEST_EXPIRED_BODY} }
                button {
                    class: "btn btn--primary",
                    onclick: move |_| on_signup.call(()),
                    "Sign up"
                }
            }
        }
    }
}
