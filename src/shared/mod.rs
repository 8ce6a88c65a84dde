pub mod constants;
pub mod errors;
pub mod logging;
pub mod services;
pub mod utils;

// Dioxus hooks binding the controllers to signals
pub mod hooks;
