//! Terminal client for the guest chat
//!
//! Runs the same [`ChatController`](crate::shared::services::ChatController)
//! as the browser, rendering to stdout and reading lines from stdin.

pub mod terminal;

use clap::Parser;

use crate::config::{ClientConfig, TypingDelays};

pub use terminal::TerminalView;

#[derive(Debug, Parser)]
#[command(name = "neurochat-cli")]
#[command(about = "Chat with Neurochat as a guest from the terminal")]
pub struct Cli {
    /// Backend origin
    #[arg(long, env = "NEUROCHAT_BASE_URL", default_value = "http://localhost:5000")]
    pub base_url: String,

    /// Anti-forgery token sent as X-CSRFToken
    #[arg(long, env = "NEUROCHAT_CSRF_TOKEN")]
    pub csrf_token: Option<String>,

    /// Skip the artificial typing pauses
    #[arg(long)]
    pub no_delays: bool,
}

impl Cli {
    pub fn config(&self) -> ClientConfig {
        let delays = if self.no_delays {
            TypingDelays::none()
        } else {
            TypingDelays::default()
        };

        ClientConfig::default()
            .with_base_url(self.base_url.as_str())
            .with_csrf_token(self.csrf_token.clone())
            .with_delays(delays)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_build_config() {
        let cli = Cli::try_parse_from([
            "neurochat-cli",
            "--base-url",
            "http://chat.local/",
            "--csrf-token",
            "abc",
            "--no-delays",
        ])
        .unwrap();

        let config = cli.config();
        assert_eq!(config.base_url, "http://chat.local");
        assert_eq!(config.csrf_token.as_deref(), Some("abc"));
        assert_eq!(config.delays, TypingDelays::none());
    }

    #[test]
    fn test_empty_token_is_dropped() {
        let cli = Cli::try_parse_from(["neurochat-cli", "--csrf-token", ""]).unwrap();
        assert_eq!(cli.config().csrf_token, None);
    }
}
