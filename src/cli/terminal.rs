use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

use crate::domain::models::{ChatMessage, Sender};
use crate::shared::constants::{GUEST_EXPIRED_BODY, GUEST_EXPIRED_TITLE};
use crate::shared::services::ChatView;

/// Chat view printing to a terminal. The user's own lines are already on
/// screen, so echoes are skipped.
pub struct TerminalView<W: Write> {
    out: Rc<RefCell<W>>,
    base_url: String,
}

impl<W: Write> Clone for TerminalView<W> {
    fn clone(&self) -> Self {
        Self {
            out: Rc::clone(&self.out),
            base_url: self.base_url.clone(),
        }
    }
}

impl TerminalView<io::Stdout> {
    pub fn stdout(base_url: &str) -> Self {
        Self::new(io::stdout(), base_url)
    }
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W, base_url: &str) -> Self {
        Self {
            out: Rc::new(RefCell::new(out)),
            base_url: base_url.to_string(),
        }
    }

    pub fn into_shared(self) -> Rc<RefCell<W>> {
        self.out
    }

    fn line(&self, text: &str) {
        let mut out = self.out.borrow_mut();
        if let Err(e) = writeln!(out, "{}", text).and_then(|_| out.flush()) {
            tracing::warn!("Terminal write failed: {}", e);
        }
    }
}

impl<W: Write> ChatView for TerminalView<W> {
    fn render_message(&self, message: ChatMessage) {
        if message.sender == Sender::Ai {
            self.line(&format!("\nNeurochat: {}\n", message.text));
        }
    }

    fn set_typing(&self, visible: bool) {
        if visible {
            self.line("Neurochat is typing...");
        }
    }

    fn set_input_enabled(&self, _enabled: bool) {}

    fn set_placeholder(&self, text: &str) {
        self.line(&format!("({})", text));
    }

    fn focus_input(&self) {
        let mut out = self.out.borrow_mut();
        let _ = write!(out, "> ").and_then(|_| out.flush());
    }

    fn show_guest_expired(&self) {
        self.line(&format!("\n{}\n{}", GUEST_EXPIRED_TITLE, GUEST_EXPIRED_BODY));
    }

    fn redirect(&self, url: &str) {
        self.line(&format!(
            "You are already signed in. Continue at {}{}",
            self.base_url, url
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(view: TerminalView<Vec<u8>>) -> String {
        let shared = view.into_shared();
        let bytes = shared.borrow().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_ai_messages_printed_user_skipped() {
        let view = TerminalView::new(Vec::new(), "http://localhost:5000");
        view.render_message(ChatMessage::user("hello"));
        view.render_message(ChatMessage::ai("Hi there"));

        let text = output(view);
        assert!(text.contains("Neurochat: Hi there"));
        assert!(!text.contains("hello"));
    }

    #[test]
    fn test_redirect_prints_absolute_url() {
        let view = TerminalView::new(Vec::new(), "http://localhost:5000");
        view.redirect("/dashboard");
        assert!(output(view).contains("http://localhost:5000/dashboard"));
    }

    #[test]
    fn test_expiry_notice() {
        let view = TerminalView::new(Vec::new(), "");
        view.show_guest_expired();
        assert!(output(view).contains(GUEST_EXPIRED_TITLE));
    }
}
