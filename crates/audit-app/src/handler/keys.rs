//! Key event handlers for the intro, the assessment, and the confirm dialog

use audit_core::{FlowPhase, LikertValue};

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, UiMode};

/// Convert key events to messages based on current UI mode and phase
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode {
        UiMode::ConfirmDialog => handle_key_confirm_dialog(key),
        UiMode::Normal => match state.phase {
            FlowPhase::Intro => handle_key_intro(key),
            FlowPhase::Assessment => handle_key_assessment(state, key),
        },
    }
}

/// Handle key events in the quit confirmation dialog
fn handle_key_confirm_dialog(key: InputKey) -> Option<Message> {
    match key {
        // 'q' allows double-tap "qq" as quick quit shortcut
        InputKey::Char('y' | 'Y' | 'q') | InputKey::Enter => Some(Message::ConfirmQuit),
        InputKey::Char('n' | 'N') | InputKey::Esc => Some(Message::CancelQuit),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

/// Handle key events on the intro screen
fn handle_key_intro(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter | InputKey::Char('s' | 'S' | ' ') => Some(Message::Start),
        InputKey::Char('q') | InputKey::Esc => Some(Message::RequestQuit),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

/// Handle key events while answering
fn handle_key_assessment(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        // Answer the focused question
        InputKey::Char(c @ '0'..='5') => {
            let index = state.focused_question()?;
            let value = LikertValue::from_digit(c)?;
            Some(Message::Answer { index, value })
        }

        // Navigation
        InputKey::Down | InputKey::Char('j') => Some(Message::FocusNext),
        InputKey::Up | InputKey::Char('k') => Some(Message::FocusPrevious),
        InputKey::Home | InputKey::Char('g') => Some(Message::FocusFirst),
        InputKey::End | InputKey::Char('G') => Some(Message::FocusLast),
        InputKey::PageUp => Some(Message::PageUp),
        InputKey::PageDown => Some(Message::PageDown),

        // "Take Again" lives in the results view
        InputKey::Char('r') if state.results_visible => Some(Message::Restart),

        InputKey::Char('q') | InputKey::Esc => Some(Message::RequestQuit),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}
