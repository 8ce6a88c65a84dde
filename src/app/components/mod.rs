pub mod auth_form;
pub mod chat_input;
pub mod chat_window;
pub mod guest_expired;
pub mod login_modal;
pub mod message_item;
pub mod theme_toggle;

pub use auth_form::AuthForm;
pub use chat_input::ChatInput;
pub use chat_window::ChatWindow;
pub use guest_expired::GuestExpired;
pub use login_modal::LoginModal;
pub use message_item::{MessageItem, TypingIndicator};
pub use theme_toggle::ThemeToggle;
