// Backend access and the controllers that drive the pages
pub mod api_service;
pub mod auth_controller;
pub mod chat_controller;
pub mod timer;

#[cfg(test)]
pub mod testing;

pub use api_service::{ApiService, ChatBackend};
pub use auth_controller::{AuthController, AuthOutcome, BrowserNavigator, Navigator};
pub use chat_controller::{ChatController, ChatView, Turn};
pub use timer::{PlatformTimer, Timer};
