// Domain models (chat session, messages, forms, wire types)
// Pure Rust, no framework dependencies

pub mod api;
pub mod form;
pub mod message;
pub mod modal;
pub mod session;

pub use api::{
    AuthRequest, AuthResponse, ChatReply, GuestStatus, LoginRequest, MessageRequest, ModeRequest,
    RedirectSignal, SignupRequest,
};
pub use form::{Field, FormKind, FormState, FormStatus};
pub use message::{ChatMessage, Sender};
pub use modal::{AuthPage, ModalState};
pub use session::{ChatMode, ChatPhase, ChatSession};
