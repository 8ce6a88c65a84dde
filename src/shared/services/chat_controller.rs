//! Chat session controller
//!
//! Drives the `CheckingAuth -> AwaitingMode -> ModeConfirming -> Chatting`
//! flow. The controller owns the [`ChatSession`], talks to a
//! [`ChatBackend`], renders through a [`ChatView`] and paces the fake
//! typing with a [`Timer`], so the whole flow runs without a DOM.
//!
//! Input handling is split in two: [`ChatController::accept_input`] runs
//! synchronously (echo, classification, state transition, ticket) and
//! [`ChatController::run_turn`] does the async part. Two quick submissions
//! therefore can never both start a mode confirmation.
//!
//! Session state is never borrowed across an `.await`.

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::{ClientConfig, TypingDelays};
use crate::domain::models::{ChatMessage, ChatMode, ChatPhase, ChatSession};
use crate::domain::services::classify_mode;
use crate::shared::constants::{
    CHAT_APOLOGY_MESSAGE, CHAT_PLACEHOLDER, CLARIFY_MODE_MESSAGE, MODE_PLACEHOLDER,
    MODE_RETRY_MESSAGE, WELCOME_MESSAGE,
};
use crate::shared::errors::ClientError;
use crate::shared::logging;
use crate::shared::services::api_service::ChatBackend;
use crate::shared::services::timer::Timer;

/// What the chat page can be asked to do
pub trait ChatView {
    fn render_message(&self, message: ChatMessage);

    fn set_typing(&self, visible: bool);

    fn set_input_enabled(&self, enabled: bool);

    fn set_placeholder(&self, text: &str);

    fn focus_input(&self);

    /// Show the "guest time is up" overlay
    fn show_guest_expired(&self);

    fn redirect(&self, url: &str);
}

/// Async work left over after [`ChatController::accept_input`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Turn {
    /// Answer to the welcome prompt was not a mode
    Clarify,
    /// Send the chosen mode to the backend
    ConfirmMode(ChatMode),
    /// Send a chat message, lower-cased and tagged with its ticket
    Exchange { text: String, ticket: u64 },
}

pub struct ChatController<B, V, T> {
    session: Rc<RefCell<ChatSession>>,
    backend: Rc<B>,
    view: V,
    timer: T,
    delays: TypingDelays,
    dashboard_url: String,
}

impl<B, V: Clone, T: Clone> Clone for ChatController<B, V, T> {
    fn clone(&self) -> Self {
        Self {
            session: Rc::clone(&self.session),
            backend: Rc::clone(&self.backend),
            view: self.view.clone(),
            timer: self.timer.clone(),
            delays: self.delays.clone(),
            dashboard_url: self.dashboard_url.clone(),
        }
    }
}

impl<B: ChatBackend, V: ChatView, T: Timer> ChatController<B, V, T> {
    pub fn new(backend: Rc<B>, view: V, timer: T, config: &ClientConfig) -> Self {
        Self {
            session: Rc::new(RefCell::new(ChatSession::new())),
            backend,
            view,
            timer,
            delays: config.delays.clone(),
            dashboard_url: config.dashboard_url.clone(),
        }
    }

    /// Snapshot of the current session
    pub fn session(&self) -> ChatSession {
        self.session.borrow().clone()
    }

    pub fn phase(&self) -> ChatPhase {
        self.session.borrow().phase()
    }

    /// Page-load sequence: status check, then either leave or greet
    pub async fn start(&self) {
        let status = match self.backend.guest_status().await {
            Ok(status) => status,
            Err(e) => {
                logging::log_auth_check_error(&e);
                Default::default()
            }
        };
        logging::log_auth_check_result(status.authenticated);

        if status.authenticated {
            self.session.borrow_mut().redirect_authenticated();
            logging::log_redirect(&self.dashboard_url, false);
            self.view.redirect(&self.dashboard_url);
            return;
        }

        self.timer.sleep(self.delays.welcome()).await;
        self.view.set_typing(true);
        self.timer.sleep(self.delays.typing()).await;
        self.view.set_typing(false);
        self.view.render_message(ChatMessage::ai(WELCOME_MESSAGE));

        self.view.set_input_enabled(true);
        self.view.set_placeholder(MODE_PLACEHOLDER);
        self.view.focus_input();
        self.session.borrow_mut().open_mode_selection();
    }

    /// Take a line of user input. Returns the async work it triggers, or
    /// `None` when the input is blank or the session cannot take input now.
    pub fn accept_input(&self, raw: &str) -> Option<Turn> {
        let text = raw.trim();
        if text.is_empty() {
            return None;
        }

        let mut session = self.session.borrow_mut();
        let turn = match session.phase() {
            ChatPhase::AwaitingMode => match classify_mode(text) {
                Some(mode) => {
                    session.begin_mode_confirmation();
                    logging::log_mode_selected(mode);
                    Turn::ConfirmMode(mode)
                }
                None => {
                    logging::log_mode_unrecognized(text.len());
                    Turn::Clarify
                }
            },
            ChatPhase::Chatting => Turn::Exchange {
                text: text.to_lowercase(),
                ticket: session.issue_ticket(),
            },
            other => {
                logging::log_input_ignored(&format!("{:?}", other));
                return None;
            }
        };
        drop(session);

        self.view.render_message(ChatMessage::user(text));
        Some(turn)
    }

    pub async fn run_turn(&self, turn: Turn) {
        match turn {
            Turn::Clarify => self.clarify().await,
            Turn::ConfirmMode(mode) => self.confirm_mode(mode).await,
            Turn::Exchange { text, ticket } => self.exchange(&text, ticket).await,
        }
    }

    /// `accept_input` followed by `run_turn`. Returns whether the input was taken.
    pub async fn submit(&self, raw: &str) -> bool {
        match self.accept_input(raw) {
            Some(turn) => {
                self.run_turn(turn).await;
                true
            }
            None => false,
        }
    }

    async fn clarify(&self) {
        self.view.set_typing(true);
        self.timer.sleep(self.delays.clarify()).await;
        self.view.set_typing(false);
        self.view.render_message(ChatMessage::ai(CLARIFY_MODE_MESSAGE));
    }

    async fn confirm_mode(&self, mode: ChatMode) {
        self.view.set_typing(true);

        match self.backend.set_mode(mode).await {
            Ok(confirmation) => {
                self.session.borrow_mut().confirm_mode(mode);

                self.timer.sleep(self.delays.confirm()).await;
                self.view.set_typing(false);
                self.view.render_message(ChatMessage::ai(confirmation));
                self.view.set_placeholder(CHAT_PLACEHOLDER);
                self.view.focus_input();
            }
            Err(e) => {
                logging::log_mode_confirm_error(mode, &e);
                self.session.borrow_mut().reject_mode();
                self.view.set_typing(false);
                self.view.render_message(ChatMessage::ai(MODE_RETRY_MESSAGE));
            }
        }
    }

    async fn exchange(&self, text: &str, ticket: u64) {
        self.view.set_typing(true);

        let result = self.backend.send_message(text).await;

        let (current, latest, guest) = {
            let session = self.session.borrow();
            (
                session.is_latest(ticket),
                session.last_ticket(),
                !session.is_authenticated(),
            )
        };
        if !current {
            logging::log_stale_reply(ticket, latest);
            return;
        }

        match result {
            Ok(reply) => {
                self.view.set_typing(false);
                self.timer.sleep(self.delays.reply()).await;
                self.view.render_message(ChatMessage::ai(reply));
            }
            Err(ClientError::GuestExpired { message }) if guest => {
                logging::log_guest_expired();
                self.view.set_typing(false);
                if let Some(message) = message {
                    self.view.render_message(ChatMessage::ai(message));
                }
                self.view.show_guest_expired();
            }
            Err(e) => {
                logging::log_chat_error(ticket, &e);
                self.view.set_typing(false);
                self.view.render_message(ChatMessage::ai(CHAT_APOLOGY_MESSAGE));
            }
        }
    }
}
