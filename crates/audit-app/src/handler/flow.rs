//! Questionnaire flow handlers
//!
//! Intro → Assessment → (results revealed) → Intro. Deferred follow-ups
//! carry the generation they were scheduled under so that a restart turns
//! any still-pending advance into a no-op.

use audit_core::prelude::*;
use audit_core::{FlowPhase, LikertValue};

use crate::message::Message;
use crate::state::{AppState, Focus};

use super::UpdateResult;

/// Intro → Assessment
pub fn handle_start(state: &mut AppState) -> UpdateResult {
    if state.phase != FlowPhase::Intro {
        debug!("Start ignored: assessment already running");
        return UpdateResult::none();
    }

    state.begin_assessment();
    info!(
        "Assessment started ({} questions, generation {})",
        state.total_questions(),
        state.generation
    );
    UpdateResult::none()
}

/// Record an answer and schedule the move to the next item
pub fn handle_answer(state: &mut AppState, index: usize, value: LikertValue) -> UpdateResult {
    if state.phase != FlowPhase::Assessment {
        warn!("Answer for question {} ignored outside the assessment", index);
        return UpdateResult::none();
    }
    if index >= state.answers.len() {
        warn!(
            "Answer for question {} ignored: only {} questions",
            index,
            state.answers.len()
        );
        return UpdateResult::none();
    }

    let previous = state.answers.set(index, value);
    state.focus = Focus::Question(index);
    debug!(
        "Question {} answered {} (previous {:?}); {}/{} answered, score {}",
        index + 1,
        value,
        previous.map(LikertValue::get),
        state.answered_count(),
        state.total_questions(),
        state.total_score()
    );

    UpdateResult::defer(
        state.settings.advance_delay(),
        Message::AdvanceAfterAnswer {
            generation: state.generation,
            index,
        },
    )
}

/// Deferred follow-up of an answer
///
/// Not the last question: bring the next one into view. Last question:
/// reveal the results and schedule scrolling to them.
pub fn handle_advance_after_answer(
    state: &mut AppState,
    generation: u64,
    index: usize,
) -> UpdateResult {
    if !is_current(state, generation) {
        trace!("Stale advance for question {} dropped", index);
        return UpdateResult::none();
    }

    let next = index + 1;
    if next < state.total_questions() {
        state.focus = Focus::Question(next);
        return UpdateResult::none();
    }

    if !state.results_visible {
        info!(
            "Results revealed: score {}/{} ({})",
            state.total_score(),
            state.assessment.max_score(),
            state.current_band().level
        );
    }
    state.results_visible = true;

    UpdateResult::defer(
        state.settings.results_delay(),
        Message::ScrollToResults { generation },
    )
}

/// Deferred scroll to the results view
pub fn handle_scroll_to_results(state: &mut AppState, generation: u64) -> UpdateResult {
    if is_current(state, generation) && state.results_visible {
        state.focus = Focus::Results;
    }
    UpdateResult::none()
}

/// Assessment → Intro
pub fn handle_restart(state: &mut AppState) -> UpdateResult {
    if state.phase == FlowPhase::Intro {
        return UpdateResult::none();
    }

    info!(
        "Assessment restarted after {} answers",
        state.answered_count()
    );
    state.reset_to_intro();
    UpdateResult::none()
}

/// A deferred message still targets the running assessment
fn is_current(state: &AppState, generation: u64) -> bool {
    state.phase == FlowPhase::Assessment && state.generation == generation
}
