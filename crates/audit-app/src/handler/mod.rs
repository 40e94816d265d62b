//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `flow`: Start / answer / restart transitions and their deferred follow-ups
//! - `navigation`: Focus movement between question cards and results
//! - `keys`: Key event handlers per phase and UI mode

pub(crate) mod flow;
pub(crate) mod keys;
pub(crate) mod navigation;
pub(crate) mod update;


use std::time::Duration;

use crate::message::Message;

// Re-export main entry point
pub use keys::handle_key;
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Deliver `message` back to the update loop after `after` has elapsed.
    ///
    /// Fire-and-forget: never cancelled. The receiving handler ignores the
    /// message when its generation is stale or its target is gone.
    Defer { after: Duration, message: Message },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }

    /// Shorthand for `UpdateAction::Defer`
    pub fn defer(after: Duration, message: Message) -> Self {
        Self::action(UpdateAction::Defer { after, message })
    }
}
