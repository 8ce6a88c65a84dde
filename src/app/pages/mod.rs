pub mod auth;
pub mod home;

pub use auth::{LoginPage, SignupPage};
pub use home::HomePage;
