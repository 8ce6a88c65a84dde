//! Client configuration
//!
//! The browser build runs with the defaults (same-origin backend, CSRF token
//! from the page). The terminal client fills the fields from CLI flags.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Artificial pauses that make the assistant feel like it is typing.
/// All values are milliseconds; zero skips the pause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypingDelays {
    /// Before the welcome prompt starts
    pub welcome_ms: u64,
    /// Typing indicator before the welcome prompt
    pub typing_ms: u64,
    /// Typing indicator before the "didn't understand" prompt
    pub clarify_ms: u64,
    /// Between a confirmed mode and its confirmation text
    pub confirm_ms: u64,
    /// Between a chat reply arriving and being shown
    pub reply_ms: u64,
    /// Between auth success and the redirect
    pub redirect_ms: u64,
}

impl Default for TypingDelays {
    fn default() -> Self {
        Self {
            welcome_ms: 1000,
            typing_ms: 2000,
            clarify_ms: 1000,
            confirm_ms: 1500,
            reply_ms: 500,
            redirect_ms: 1500,
        }
    }
}

impl TypingDelays {
    /// No pauses at all
    pub fn none() -> Self {
        Self {
            welcome_ms: 0,
            typing_ms: 0,
            clarify_ms: 0,
            confirm_ms: 0,
            reply_ms: 0,
            redirect_ms: 0,
        }
    }

    pub fn welcome(&self) -> Duration {
        Duration::from_millis(self.welcome_ms)
    }

    pub fn typing(&self) -> Duration {
        Duration::from_millis(self.typing_ms)
    }

    pub fn clarify(&self) -> Duration {
        Duration::from_millis(self.clarify_ms)
    }

    pub fn confirm(&self) -> Duration {
        Duration::from_millis(self.confirm_ms)
    }

    pub fn reply(&self) -> Duration {
        Duration::from_millis(self.reply_ms)
    }

    pub fn redirect(&self) -> Duration {
        Duration::from_millis(self.redirect_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Backend origin; empty means same origin as the page
    pub base_url: String,
    /// Where authenticated users land
    pub dashboard_url: String,
    /// Explicit CSRF token. In the browser the page meta tag wins.
    pub csrf_token: Option<String>,
    pub delays: TypingDelays,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            dashboard_url: "/dashboard".to_string(),
            csrf_token: None,
            delays: TypingDelays::default(),
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_csrf_token(mut self, token: Option<String>) -> Self {
        self.csrf_token = token.filter(|t| !t.is_empty());
        self
    }

    pub fn with_delays(mut self, delays: TypingDelays) -> Self {
        self.delays = delays;
        self
    }

    /// Absolute URL for a backend route
    pub fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_delays() {
        let delays = TypingDelays::default();
        assert_eq!(delays.welcome(), Duration::from_millis(1000));
        assert_eq!(delays.typing(), Duration::from_millis(2000));
        assert_eq!(delays.confirm(), Duration::from_millis(1500));
        assert_eq!(delays.reply(), Duration::from_millis(500));
        assert!(TypingDelays::none().redirect().is_zero());
    }

    #[test]
    fn test_url_joining() {
        let same_origin = ClientConfig::default();
        assert_eq!(same_origin.url("/guest/status"), "/guest/status");

        let remote = ClientConfig::default().with_base_url("http://localhost:5000/");
        assert_eq!(remote.url("/auth/login"), "http://localhost:5000/auth/login");
    }

    #[test]
    fn test_empty_csrf_token_is_dropped() {
        let config = ClientConfig::default().with_csrf_token(Some(String::new()));
        assert_eq!(config.csrf_token, None);
    }

    #[test]
    fn test_partial_config_deserializes() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"delays": {"reply_ms": 0}}"#).unwrap();
        assert_eq!(config.dashboard_url, "/dashboard");
        assert_eq!(config.delays.reply_ms, 0);
        assert_eq!(config.delays.typing_ms, 2000);
    }
}
