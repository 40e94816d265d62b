//! Main update function - handles state transitions (TEA pattern)
//!
//! Handler implementations live in:
//! - `flow`: start / answer / restart and deferred advance
//! - `navigation`: focus movement

use crate::message::Message;
use crate::state::AppState;

use super::{flow, keys::handle_key, navigation, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::RequestQuit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Quit => {
            state.force_quit();
            UpdateResult::none()
        }

        Message::ConfirmQuit => {
            state.confirm_quit();
            UpdateResult::none()
        }

        Message::CancelQuit => {
            state.cancel_quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => UpdateResult::none(),

        // ─────────────────────────────────────────────────────────
        // Flow Messages
        // ─────────────────────────────────────────────────────────
        Message::Start => flow::handle_start(state),
        Message::Answer { index, value } => flow::handle_answer(state, index, value),
        Message::Restart => flow::handle_restart(state),

        Message::AdvanceAfterAnswer { generation, index } => {
            flow::handle_advance_after_answer(state, generation, index)
        }
        Message::ScrollToResults { generation } => {
            flow::handle_scroll_to_results(state, generation)
        }

        // ─────────────────────────────────────────────────────────
        // Navigation Messages
        // ─────────────────────────────────────────────────────────
        Message::FocusNext => navigation::handle_focus_next(state),
        Message::FocusPrevious => navigation::handle_focus_previous(state),
        Message::FocusFirst => navigation::handle_focus_first(state),
        Message::FocusLast => navigation::handle_focus_last(state),
        Message::PageUp => navigation::handle_page_up(state),
        Message::PageDown => navigation::handle_page_down(state),
    }
}
