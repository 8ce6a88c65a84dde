//! Request and response bodies exchanged with the Neurochat backend

use serde::{Deserialize, Serialize};

use super::form::FormKind;
use super::session::ChatMode;
use crate::shared::errors::{ClientError, Result};

/// Backend routes consumed by the client
pub mod endpoints {
    pub const GUEST_STATUS: &str = "/guest/status";
    pub const CHAT_MODE: &str = "/auth/chat/mode";
    pub const CHAT_MESSAGE: &str = "/auth/chat/message";
    pub const LOGIN: &str = "/auth/login";
    pub const SIGNUP: &str = "/auth/signup";
}

/// Header carrying the anti-forgery token
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// Answer of `GET /guest/status`.
///
/// The backend answers 400 `{error}` when no guest session exists yet, so
/// a missing `authenticated` means guest. Other fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GuestStatus {
    #[serde(default)]
    pub authenticated: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModeRequest {
    pub mode: ChatMode,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageRequest {
    pub message: String,
}

/// Body of both chat endpoints, success or failure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub expired: bool,
}

impl ChatReply {
    /// Interpret a chat reply given its HTTP status.
    ///
    /// 2xx with a `message` is success. 403 flagged `expired` is a guest
    /// expiry. Everything else is a rejection carrying the backend `error`
    /// or `fallback`.
    pub fn into_result(self, status: u16, fallback: &str) -> Result<String> {
        if (200..300).contains(&status) {
            if let Some(message) = self.message {
                return Ok(message);
            }
            return Err(ClientError::Decode(format!(
                "HTTP {status} reply without a message"
            )));
        }

        if status == 403 && self.expired {
            return Err(ClientError::GuestExpired {
                message: self.message,
            });
        }

        Err(ClientError::Rejected {
            status,
            message: self.error.unwrap_or_else(|| fallback.to_string()),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignupRequest {
    pub first_name: String,
    pub email: String,
    pub password: String,
}

/// Credentials ready to post, serialized as the bare inner object
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AuthRequest {
    Login(LoginRequest),
    Signup(SignupRequest),
}

impl AuthRequest {
    pub fn kind(&self) -> FormKind {
        match self {
            AuthRequest::Login(_) => FormKind::Login,
            AuthRequest::Signup(_) => FormKind::Signup,
        }
    }

    pub fn endpoint(&self) -> &'static str {
        self.kind().endpoint()
    }
}

/// Answer of the login and signup endpoints, whatever the status code
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Message an embedded auth form posts to its host window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedirectSignal {
    pub action: String,
    pub url: String,
}

impl RedirectSignal {
    pub const ACTION: &'static str = "redirect";

    pub fn to(url: impl Into<String>) -> Self {
        Self {
            action: Self::ACTION.to_string(),
            url: url.into(),
        }
    }

    /// Destination if this is a redirect request, `None` for anything else
    pub fn target(&self) -> Option<&str> {
        (self.action == Self::ACTION).then_some(self.url.as_str())
    }

    /// Parse an arbitrary cross-window payload
    pub fn from_value(value: serde_json::Value) -> Option<Self> {
        serde_json::from_value::<Self>(value)
            .ok()
            .filter(|signal| signal.target().is_some())
    }
}
