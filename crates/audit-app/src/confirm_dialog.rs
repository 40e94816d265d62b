//! Confirm dialog state.
//!
//! Data model for confirmation dialogs. The rendering widget
//! lives in audit-tui's widgets/confirm_dialog.rs.

use crate::message::Message;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmDialogState {
    pub title: String,
    pub message: String,
    pub detail: String,
    pub options: Vec<(String, Message)>,
}

impl ConfirmDialogState {
    /// Create a quit confirmation dialog state
    pub fn quit_confirmation(answered: usize, total: usize) -> Self {
        Self {
            title: "Leave the audit?".to_string(),
            message: format!("You have answered {} of {} questions.", answered, total),
            detail: "Answers are not saved.".to_string(),
            options: vec![
                ("Quit".to_string(), Message::ConfirmQuit),
                ("Cancel".to_string(), Message::CancelQuit),
            ],
        }
    }
}
