//! Terminal guest chat against a running Neurochat backend.
//!
//! Run with: cargo run --features cli --bin neurochat-cli -- --base-url http://localhost:5000

use std::rc::Rc;

use anyhow::Context;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};

use neurochat_web::cli::{Cli, TerminalView};
use neurochat_web::shared::services::{ApiService, ChatController, PlatformTimer};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they never interleave with the conversation
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let config = cli.config();
    tracing::info!("Connecting to {}", config.base_url);

    let backend = Rc::new(ApiService::new(&config));
    let view = TerminalView::stdout(&config.base_url);
    let controller = ChatController::new(backend, view, PlatformTimer, &config);

    controller.start().await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while !controller.phase().is_terminal() {
        let Some(line) = lines.next_line().await.context("reading stdin")? else {
            break;
        };
        if let Some(turn) = controller.accept_input(&line) {
            controller.run_turn(turn).await;
        }
    }

    Ok(())
}
