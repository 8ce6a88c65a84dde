use serde::{Deserialize, Serialize};

/// Conversational stance chosen by the user at the start of a chat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatMode {
    Listen,
    Talk,
}

impl ChatMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatMode::Listen => "listen",
            ChatMode::Talk => "talk",
        }
    }
}

impl std::fmt::Display for ChatMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Phase of the chat state machine.
///
/// `CheckingAuth -> AwaitingMode -> ModeConfirming -> Chatting`, with
/// `Redirected` as the terminal exit from `CheckingAuth`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatPhase {
    #[default]
    CheckingAuth,
    AwaitingMode,
    ModeConfirming,
    Chatting,
    Redirected,
}

impl ChatPhase {
    /// The visitor has left the chat page
    pub fn is_terminal(&self) -> bool {
        matches!(self, ChatPhase::Redirected)
    }
}

/// Per-page-load conversation state.
///
/// Fields are private so the only way to change them is through the
/// transition methods, which keep `initialized` implying a chosen mode and
/// a finished mode selection.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatSession {
    phase: ChatPhase,
    mode: Option<ChatMode>,
    awaiting_mode_selection: bool,
    initialized: bool,
    authenticated: bool,
    last_ticket: u64,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            phase: ChatPhase::CheckingAuth,
            mode: None,
            awaiting_mode_selection: true,
            initialized: false,
            authenticated: false,
            last_ticket: 0,
        }
    }

    pub fn phase(&self) -> ChatPhase {
        self.phase
    }

    pub fn mode(&self) -> Option<ChatMode> {
        self.mode
    }

    pub fn is_awaiting_mode_selection(&self) -> bool {
        self.awaiting_mode_selection
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Authenticated visitors leave the chat page for the dashboard
    pub fn redirect_authenticated(&mut self) {
        self.authenticated = true;
        self.phase = ChatPhase::Redirected;
    }

    /// Welcome prompt shown, ready for a mode choice
    pub fn open_mode_selection(&mut self) -> bool {
        if self.phase != ChatPhase::CheckingAuth {
            return false;
        }
        self.phase = ChatPhase::AwaitingMode;
        true
    }

    /// A valid mode was typed; the choice is now in flight to the backend
    pub fn begin_mode_confirmation(&mut self) -> bool {
        if self.phase != ChatPhase::AwaitingMode {
            return false;
        }
        self.phase = ChatPhase::ModeConfirming;
        true
    }

    pub fn confirm_mode(&mut self, mode: ChatMode) {
        self.mode = Some(mode);
        self.awaiting_mode_selection = false;
        self.initialized = true;
        self.phase = ChatPhase::Chatting;
    }

    /// Backend refused the mode; go back to asking
    pub fn reject_mode(&mut self) {
        if self.phase == ChatPhase::ModeConfirming {
            self.phase = ChatPhase::AwaitingMode;
        }
    }

    /// Tag an outgoing chat message. Tickets increase monotonically.
    pub fn issue_ticket(&mut self) -> u64 {
        self.last_ticket += 1;
        self.last_ticket
    }

    /// Only the reply to the most recent chat message is rendered
    pub fn is_latest(&self, ticket: u64) -> bool {
        ticket == self.last_ticket
    }

    pub fn last_ticket(&self) -> u64 {
        self.last_ticket
    }
}
