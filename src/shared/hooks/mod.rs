// Custom Dioxus hooks
pub mod use_auth_form;
pub mod use_chat_state;
pub mod use_modal;
pub mod use_theme;

pub use use_auth_form::{use_auth_form, AuthFormState, WebAuthController};
pub use use_chat_state::{use_chat_controller, use_chat_state, ChatState, WebChatController};
pub use use_modal::{use_modal, ModalHandle};
pub use use_theme::{apply_theme, save_theme, stored_theme, use_theme, Theme};
