//! Neurochat web client - main entry point

use neurochat_web::app::App;

// Browser: dioxus::launch installs its own console logger
#[cfg(target_arch = "wasm32")]
fn main() {
    tracing::info!("Starting Neurochat web client");
    dioxus::launch(App);
}

// Native (desktop)
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    // Another subscriber may already be installed by the launcher
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .try_init();

    tracing::info!("Starting Neurochat...");
    dioxus::launch(App);
}
