use dioxus::prelude::*;

use crate::app::pages::{HomePage, LoginPage, SignupPage};
use crate::config::ClientConfig;
use crate::shared::hooks::{apply_theme, stored_theme};

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    // Guest chat and the host for the auth modal
    #[route("/")]
    Home {},

    // Standalone auth pages, also loaded inside the modal iframe
    #[route("/login")]
    Login {},
    #[route("/signup")]
    Signup {},
}

#[component]
pub fn App() -> Element {
    use_context_provider(ClientConfig::default);

    use_effect(|| {
        tracing::info!("Neurochat app initialized");
    });

    rsx! {
        Router::<Route> {}
    }
}

#[component]
fn Layout() -> Element {
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

    // Auth pages inside the iframe have no toggle of their own
    use_hook(|| apply_theme(stored_theme()));

    rsx! {
        document::Link {
            rel: "stylesheet",
            href: BUNDLE_CSS
        },
        Outlet::<Route> {}
    }
}

#[component]
fn Home() -> Element {
    rsx! { HomePage {} }
}

#[component]
fn Login() -> Element {
    rsx! { LoginPage {} }
}

#[component]
fn Signup() -> Element {
    rsx! { SignupPage {} }
}
