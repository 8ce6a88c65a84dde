//! Structured logging helpers for the Neurochat client
//!
//! Every event carries an `operation` field so browser console output and
//! native subscriber output can be filtered the same way.

use crate::domain::models::{ChatMode, FormKind};
use crate::shared::errors::ClientError;

/// Operation tags attached to log events
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    AuthCheck,
    ModeSelection,
    ChatExchange,
    FormValidation,
    AuthSubmit,
    Redirect,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::AuthCheck => "auth_check",
            LogOperation::ModeSelection => "mode_selection",
            LogOperation::ChatExchange => "chat_exchange",
            LogOperation::FormValidation => "form_validation",
            LogOperation::AuthSubmit => "auth_submit",
            LogOperation::Redirect => "redirect",
        }
    }
}

/// Log the outcome of the on-load status check
pub fn log_auth_check_result(authenticated: bool) {
    tracing::info!(
        operation = LogOperation::AuthCheck.as_str(),
        authenticated = authenticated,
        "Guest status checked"
    );
}

/// A failed status check falls back to guest mode
pub fn log_auth_check_error(error: &ClientError) {
    tracing::warn!(
        operation = LogOperation::AuthCheck.as_str(),
        error = %error,
        "Status check failed, continuing as guest"
    );
}

pub fn log_mode_selected(mode: ChatMode) {
    tracing::info!(
        operation = LogOperation::ModeSelection.as_str(),
        mode = mode.as_str(),
        "Mode selected"
    );
}

pub fn log_mode_unrecognized(input_len: usize) {
    tracing::debug!(
        operation = LogOperation::ModeSelection.as_str(),
        input_len = input_len,
        "Mode selection not recognized"
    );
}

pub fn log_mode_confirm_error(mode: ChatMode, error: &ClientError) {
    tracing::error!(
        operation = LogOperation::ModeSelection.as_str(),
        mode = mode.as_str(),
        error = %error,
        "Failed to set mode"
    );
}

/// Input arrived while the session could not take it
pub fn log_input_ignored(phase: &str) {
    tracing::debug!(
        operation = LogOperation::ChatExchange.as_str(),
        phase = phase,
        "Input ignored in current phase"
    );
}

pub fn log_chat_error(ticket: u64, error: &ClientError) {
    tracing::error!(
        operation = LogOperation::ChatExchange.as_str(),
        ticket = ticket,
        error = %error,
        "Error sending message"
    );
}

/// A newer message was sent before this reply came back
pub fn log_stale_reply(ticket: u64, latest: u64) {
    tracing::debug!(
        operation = LogOperation::ChatExchange.as_str(),
        ticket = ticket,
        latest_ticket = latest,
        "Discarded reply to superseded message"
    );
}

pub fn log_guest_expired() {
    tracing::info!(
        operation = LogOperation::ChatExchange.as_str(),
        "Guest session expired"
    );
}

pub fn log_validation_failed(kind: FormKind, error_count: usize) {
    tracing::debug!(
        operation = LogOperation::FormValidation.as_str(),
        form = ?kind,
        error_count = error_count,
        "Form validation failed"
    );
}

pub fn log_auth_submit(endpoint: &str) {
    tracing::info!(
        operation = LogOperation::AuthSubmit.as_str(),
        endpoint = endpoint,
        "Submitting credentials"
    );
}

pub fn log_auth_error(endpoint: &str, error: &ClientError) {
    tracing::error!(
        operation = LogOperation::AuthSubmit.as_str(),
        endpoint = endpoint,
        error = %error,
        "Credential submission failed"
    );
}

pub fn log_redirect(url: &str, via_parent: bool) {
    tracing::info!(
        operation = LogOperation::Redirect.as_str(),
        url = url,
        via_parent = via_parent,
        "Redirecting"
    );
}
