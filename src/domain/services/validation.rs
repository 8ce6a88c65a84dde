//! Local validation of the login and signup forms.
//!
//! Every applicable rule is reported, not just the first one, and the
//! messages are joined with `". "` for display. Values are checked as typed:
//! whitespace counts as content.

use std::fmt;

use thiserror::Error;

use crate::domain::models::form::Field;

/// Minimum password length, counted in characters
pub const MIN_PASSWORD_LEN: usize = 8;

/// Separator between reported messages
pub const ERROR_SEPARATOR: &str = ". ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Firstname is required")]
    FirstNameRequired,

    #[error("Email is required")]
    EmailRequired,

    #[error("Password is required")]
    PasswordRequired,

    #[error("Password must have at least 8 characters")]
    PasswordTooShort,

    #[error("Passwords do not match")]
    PasswordMismatch,
}

impl ValidationError {
    /// Inputs highlighted for this error
    pub fn fields(&self) -> &'static [Field] {
        match self {
            ValidationError::FirstNameRequired => &[Field::FirstName],
            ValidationError::EmailRequired => &[Field::Email],
            ValidationError::PasswordRequired | ValidationError::PasswordTooShort => {
                &[Field::Password]
            }
            ValidationError::PasswordMismatch => &[Field::Password, Field::RepeatPassword],
        }
    }
}

/// Every rule a form submission broke, in check order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, error: ValidationError) -> bool {
        self.0.contains(&error)
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.iter().flat_map(|error| error.fields().iter().copied())
    }

    /// `Ok(value)` when nothing was reported
    pub fn into_result<T>(self, value: T) -> Result<T, ValidationErrors> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }

    fn push_if(&mut self, failed: bool, error: ValidationError) {
        if failed {
            self.0.push(error);
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, error) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(ERROR_SEPARATOR)?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

pub fn signup_errors(
    first_name: &str,
    email: &str,
    password: &str,
    repeat_password: &str,
) -> ValidationErrors {
    let mut errors = ValidationErrors::default();
    // UTF-16 units, the way browsers measure input length
    let password_len = password.encode_utf16().count();

    errors.push_if(first_name.is_empty(), ValidationError::FirstNameRequired);
    errors.push_if(email.is_empty(), ValidationError::EmailRequired);
    errors.push_if(password.is_empty(), ValidationError::PasswordRequired);
    // Length is only judged once something was typed
    errors.push_if(
        password_len > 0 && password_len < MIN_PASSWORD_LEN,
        ValidationError::PasswordTooShort,
    );
    errors.push_if(password != repeat_password, ValidationError::PasswordMismatch);

    errors
}

pub fn login_errors(email: &str, password: &str) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    errors.push_if(email.is_empty(), ValidationError::EmailRequired);
    errors.push_if(password.is_empty(), ValidationError::PasswordRequired);

    errors
}
