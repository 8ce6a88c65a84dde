use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::api::{endpoints, AuthRequest, LoginRequest, SignupRequest};
use crate::domain::services::validation::{login_errors, signup_errors, ValidationErrors};

/// Which auth form is on the page. A form with a first-name field is a signup form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormKind {
    Login,
    Signup,
}

impl FormKind {
    pub fn endpoint(&self) -> &'static str {
        match self {
            FormKind::Login => endpoints::LOGIN,
            FormKind::Signup => endpoints::SIGNUP,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            FormKind::Login => "Log in",
            FormKind::Signup => "Sign up",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    FirstName,
    Email,
    Password,
    RepeatPassword,
}

impl Field {
    /// DOM id of the input
    pub fn input_id(&self) -> &'static str {
        match self {
            Field::FirstName => "firstname-input",
            Field::Email => "email-input",
            Field::Password => "password-input",
            Field::RepeatPassword => "repeat-password-input",
        }
    }
}

/// Status line under the form
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FormStatus {
    #[default]
    Idle,
    Error(String),
    Success(String),
}

impl FormStatus {
    pub fn text(&self) -> &str {
        match self {
            FormStatus::Idle => "",
            FormStatus::Error(text) | FormStatus::Success(text) => text,
        }
    }
}

/// Values typed into a login or signup form plus their invalid markers
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    kind: FormKind,
    first_name: String,
    email: String,
    password: String,
    repeat_password: String,
    invalid: BTreeSet<Field>,
    status: FormStatus,
}

impl FormState {
    pub fn new(kind: FormKind) -> Self {
        Self {
            kind,
            first_name: String::new(),
            email: String::new(),
            password: String::new(),
            repeat_password: String::new(),
            invalid: BTreeSet::new(),
            status: FormStatus::Idle,
        }
    }

    pub fn kind(&self) -> FormKind {
        self.kind
    }

    /// Inputs rendered for this kind of form, in page order
    pub fn fields(&self) -> &'static [Field] {
        match self.kind {
            FormKind::Login => &[Field::Email, Field::Password],
            FormKind::Signup => &[
                Field::FirstName,
                Field::Email,
                Field::Password,
                Field::RepeatPassword,
            ],
        }
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::RepeatPassword => &self.repeat_password,
        }
    }

    pub fn is_invalid(&self, field: Field) -> bool {
        self.invalid.contains(&field)
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    /// Record a keystroke. Editing an invalid field clears its marker and
    /// the status line.
    pub fn edit(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::FirstName => self.first_name = value,
            Field::Email => self.email = value,
            Field::Password => self.password = value,
            Field::RepeatPassword => self.repeat_password = value,
        }
        if self.invalid.remove(&field) {
            self.status = FormStatus::Idle;
        }
    }

    /// Run local validation without touching the markers
    pub fn validate(&self) -> Result<AuthRequest, ValidationErrors> {
        match self.kind {
            FormKind::Signup => {
                let errors = signup_errors(
                    &self.first_name,
                    &self.email,
                    &self.password,
                    &self.repeat_password,
                );
                errors.into_result(AuthRequest::Signup(SignupRequest {
                    first_name: self.first_name.clone(),
                    email: self.email.clone(),
                    password: self.password.clone(),
                }))
            }
            FormKind::Login => {
                let errors = login_errors(&self.email, &self.password);
                errors.into_result(AuthRequest::Login(LoginRequest {
                    email: self.email.clone(),
                    password: self.password.clone(),
                }))
            }
        }
    }

    /// Validate for submission. On failure marks the offending fields and
    /// shows the joined error text.
    pub fn prepare_submission(&mut self) -> Result<AuthRequest, ValidationErrors> {
        let result = self.validate();
        if let Err(errors) = &result {
            self.invalid.extend(errors.fields());
            self.status = FormStatus::Error(errors.to_string());
        }
        result
    }

    pub fn set_status(&mut self, status: FormStatus) {
        self.status = status;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signup(first: &str, email: &str, password: &str, repeat: &str) -> FormState {
        let mut form = FormState::new(FormKind::Signup);
        form.edit(Field::FirstName, first);
        form.edit(Field::Email, email);
        form.edit(Field::Password, password);
        form.edit(Field::RepeatPassword, repeat);
        form
    }

    #[test]
    fn test_kind_selects_endpoint() {
        assert_eq!(FormKind::Login.endpoint(), "/auth/login");
        assert_eq!(FormKind::Signup.endpoint(), "/auth/signup");
    }

    #[test]
    fn test_invalid_submission_marks_fields() {
        let mut form = signup("", "ada@example.com", "short", "other");
        assert!(form.prepare_submission().is_err());

        assert!(form.is_invalid(Field::FirstName));
        assert!(!form.is_invalid(Field::Email));
        assert!(form.is_invalid(Field::Password));
        assert!(form.is_invalid(Field::RepeatPassword));
        assert_eq!(
            form.status().text(),
            "Firstname is required. Password must have at least 8 characters. Passwords do not match"
        );
    }

    #[test]
    fn test_edit_clears_marker_and_status() {
        let mut form = signup("", "ada@example.com", "password1", "password1");
        let _ = form.prepare_submission();
        assert!(form.is_invalid(Field::FirstName));

        form.edit(Field::FirstName, "A");
        assert!(!form.is_invalid(Field::FirstName));
        assert_eq!(form.status(), &FormStatus::Idle);
    }

    #[test]
    fn test_edit_of_valid_field_keeps_status() {
        let mut form = signup("", "ada@example.com", "password1", "password1");
        let _ = form.prepare_submission();

        form.edit(Field::Email, "ada@example.org");
        assert!(matches!(form.status(), FormStatus::Error(_)));
        assert!(form.is_invalid(Field::FirstName));
    }

    #[test]
    fn test_valid_login_produces_request() {
        let mut form = FormState::new(FormKind::Login);
        form.edit(Field::Email, "ada@example.com");
        form.edit(Field::Password, "pw");

        let request = form.prepare_submission().expect("valid login");
        assert_eq!(request.endpoint(), "/auth/login");
        assert_eq!(form.status(), &FormStatus::Idle);
    }

    #[test]
    fn test_login_form_has_no_first_name() {
        let form = FormState::new(FormKind::Login);
        assert!(!form.fields().contains(&Field::FirstName));
        assert!(FormState::new(FormKind::Signup).fields().contains(&Field::FirstName));
    }
}
