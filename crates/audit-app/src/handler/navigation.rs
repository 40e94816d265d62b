//! Focus movement handlers
//!
//! The assessment page is a column of question cards, followed by the
//! results view once it is revealed. Focus picks the item the renderer
//! centers; these handlers only move it.

use audit_core::FlowPhase;

use crate::state::{AppState, Focus};

use super::UpdateResult;

/// Questions skipped by PageUp/PageDown
pub const PAGE_SIZE: usize = 5;

/// Position of the focus in the item list (questions, then results)
fn position(state: &AppState) -> usize {
    match state.focus {
        Focus::Top => 0,
        Focus::Question(i) => i,
        Focus::Results => state.total_questions(),
    }
}

/// Focus for a position, clamped to the items currently on the page
fn focus_at(state: &AppState, position: usize) -> Focus {
    let total = state.total_questions();
    if position >= total {
        if state.results_visible {
            Focus::Results
        } else {
            Focus::Question(total.saturating_sub(1))
        }
    } else {
        Focus::Question(position)
    }
}

fn move_to(state: &mut AppState, position: usize) -> UpdateResult {
    if state.phase == FlowPhase::Assessment {
        state.focus = focus_at(state, position);
    }
    UpdateResult::none()
}

pub fn handle_focus_next(state: &mut AppState) -> UpdateResult {
    let target = match state.focus {
        Focus::Top => 0,
        _ => position(state) + 1,
    };
    move_to(state, target)
}

pub fn handle_focus_previous(state: &mut AppState) -> UpdateResult {
    let target = position(state).saturating_sub(1);
    move_to(state, target)
}

pub fn handle_focus_first(state: &mut AppState) -> UpdateResult {
    move_to(state, 0)
}

pub fn handle_focus_last(state: &mut AppState) -> UpdateResult {
    let target = state.total_questions();
    move_to(state, target)
}

pub fn handle_page_up(state: &mut AppState) -> UpdateResult {
    let target = position(state).saturating_sub(PAGE_SIZE);
    move_to(state, target)
}

pub fn handle_page_down(state: &mut AppState) -> UpdateResult {
    let target = position(state) + PAGE_SIZE;
    move_to(state, target)
}
