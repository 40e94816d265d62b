//! audit-app - Questionnaire state and orchestration for the executive self-audit
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the
//! assessment flow: messages, the update function, deferred actions, and
//! settings loading.

pub mod actions;
pub mod answers;
pub mod config;
pub mod confirm_dialog;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod signals;
pub mod state;

// Re-export primary types
pub use answers::AnswerSheet;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppState, Focus, UiMode};
