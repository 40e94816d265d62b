//! Message types for the application (TEA pattern)

use audit_core::LikertValue;

use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Request to quit (may show confirmation dialog if answers are recorded)
    RequestQuit,

    /// Force quit without confirmation (Ctrl+C, signal handler)
    Quit,

    /// Confirm quit from confirmation dialog
    ConfirmQuit,

    /// Cancel quit from confirmation dialog
    CancelQuit,

    // ─────────────────────────────────────────────────────────
    // Flow Messages
    // ─────────────────────────────────────────────────────────
    /// Leave the intro and begin answering
    Start,
    /// Record an answer for a question (0-based index)
    Answer { index: usize, value: LikertValue },
    /// Discard all answers and return to the intro
    Restart,

    // ─────────────────────────────────────────────────────────
    // Deferred Messages (scheduled by UpdateAction::Defer)
    // ─────────────────────────────────────────────────────────
    /// Fired after an answer: bring the next question into view, or reveal
    /// the results when `index` was the last question
    AdvanceAfterAnswer { generation: u64, index: usize },
    /// Bring the results view into view
    ScrollToResults { generation: u64 },

    // ─────────────────────────────────────────────────────────
    // Navigation Messages
    // ─────────────────────────────────────────────────────────
    /// Focus the next item (question or results)
    FocusNext,
    /// Focus the previous question
    FocusPrevious,
    /// Focus the first question
    FocusFirst,
    /// Focus the last question, or the results when visible
    FocusLast,
    /// Move focus back by a page of questions
    PageUp,
    /// Move focus forward by a page of questions
    PageDown,
}
