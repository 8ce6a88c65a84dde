// Business logic services
// Framework-agnostic, 100% testable

pub mod mode_selection;
pub mod validation;

pub use mode_selection::classify_mode;
pub use validation::{login_errors, signup_errors, ValidationError, ValidationErrors};
