// User-facing copy and DOM ids shared by the web app and the terminal client

pub const WELCOME_MESSAGE: &str = "Hi, I'm Neurochat — your friendly AI companion here to listen or talk whenever you need. Would you prefer me to mainly listen and provide gentle support, or would you like me to actively respond and engage in conversation with you?\n\nSimply type 'listen' or 'talk' to get started.";

pub const CLARIFY_MODE_MESSAGE: &str = "I didn't quite understand that. Please type 'listen' if you'd like me to mainly listen and provide gentle support, or 'talk' if you'd like me to actively engage in conversation with you.";

pub const MODE_RETRY_MESSAGE: &str =
    "I'm having trouble setting up our conversation. Please try typing 'listen' or 'talk' again.";

pub const CHAT_APOLOGY_MESSAGE: &str =
    "I apologize, but I'm having trouble responding right now. Please try again.";

pub const AUTH_NETWORK_ERROR: &str = "Server or network error.";

pub const GUEST_EXPIRED_TITLE: &str = "Your guest session has ended";

pub const GUEST_EXPIRED_BODY: &str =
    "Create a free account to keep chatting with Neurochat.";

pub const MODE_PLACEHOLDER: &str = "Type 'listen' or 'talk' to continue...";

pub const CHAT_PLACEHOLDER: &str = "Share what's on your mind...";

pub const WAITING_PLACEHOLDER: &str = "Neurochat is getting ready...";

// Fallback error texts when the backend omits `error`
pub const MODE_FAILED_FALLBACK: &str = "Failed to set mode";
pub const MESSAGE_FAILED_FALLBACK: &str = "Failed to send message";

pub const MESSAGE_INPUT_ID: &str = "messageInput";
pub const CHAT_WINDOW_ID: &str = "chatWindow";

pub const CSRF_META_SELECTOR: &str = "meta[name=\"csrf-token\"]";
pub const THEME_STORAGE_KEY: &str = "theme";
