//! Headless mode runner - drives the flow from a list of answers

use std::collections::VecDeque;
use std::io::{self, Read, Write};
use std::sync::Arc;

use audit_app::config::Settings;
use audit_app::handler::update;
use audit_app::{AppState, Message, UpdateAction};
use audit_core::prelude::*;
use audit_core::{Assessment, LikertValue};

use super::HeadlessEvent;

/// Run in headless mode - output JSON events instead of TUI
///
/// Answers come from `answers` when given, otherwise from stdin. Any error
/// is reported as an `error` event before being returned.
pub fn run_headless(
    assessment: Arc<Assessment>,
    settings: Settings,
    answers: Option<String>,
) -> Result<()> {
    info!("═══════════════════════════════════════════════════════");
    info!("Executive self-audit starting in HEADLESS mode");
    info!("═══════════════════════════════════════════════════════");

    let result = read_input(answers)
        .and_then(|input| parse_answers(&input))
        .and_then(|values| {
            let mut state = AppState::with_settings(assessment, settings.without_delays());
            run_answers(&mut state, &values, &mut io::stdout().lock())
        });

    if let Err(ref e) = result {
        error!("Headless run failed: {}", e);
        HeadlessEvent::error(e.to_string(), e.is_fatal()).emit();
    }

    info!("Headless mode exiting");
    result
}

fn read_input(answers: Option<String>) -> Result<String> {
    match answers {
        Some(list) => Ok(list),
        None => {
            debug!("Reading answers from stdin");
            let mut input = String::new();
            io::stdin().read_to_string(&mut input)?;
            Ok(input)
        }
    }
}

/// Parse answers separated by commas and/or whitespace
pub fn parse_answers(input: &str) -> Result<Vec<LikertValue>> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(i, token)| {
            token
                .parse::<u8>()
                .ok()
                .and_then(LikertValue::new)
                .ok_or_else(|| {
                    Error::invalid_answer(format!(
                        "answer {} is {:?}; expected a whole number from 0 to 5",
                        i + 1,
                        token
                    ))
                })
        })
        .collect()
}

/// Feed `answers` through the update loop, writing one event per step
///
/// Deferred follow-ups are applied immediately; the caller is expected to
/// pass settings without delays. Requires exactly one answer per question.
pub fn run_answers<W: Write>(
    state: &mut AppState,
    answers: &[LikertValue],
    out: &mut W,
) -> Result<()> {
    let total = state.total_questions();
    if answers.len() > total {
        return Err(Error::invalid_answer(format!(
            "{} answers given for {} questions",
            answers.len(),
            total
        )));
    }

    drive(state, Message::Start);
    HeadlessEvent::assessment_started(total, state.assessment.max_score()).write_to(out)?;

    for (index, &value) in answers.iter().enumerate() {
        drive(state, Message::Answer { index, value });
        HeadlessEvent::answer_recorded(
            index + 1,
            value.get(),
            state.answered_count(),
            state.total_score(),
        )
        .write_to(out)?;
    }

    if !state.results_visible {
        return Err(Error::invalid_answer(format!(
            "only {} of {} questions answered",
            state.answered_count(),
            total
        )));
    }

    let band = state.current_band();
    HeadlessEvent::results_ready(
        state.total_score(),
        state.assessment.max_score(),
        &band.level,
        &band.severity.to_string(),
        state.answered_count(),
        total,
    )
    .write_to(out)?;

    info!(
        "Headless results: {}/{} ({})",
        state.total_score(),
        state.assessment.max_score(),
        band.level
    );
    Ok(())
}

/// Process a message and everything it leads to, without waiting
///
/// Chained messages run first; deferred ones are queued behind them.
fn drive(state: &mut AppState, message: Message) {
    let mut pending = VecDeque::from([message]);
    while let Some(msg) = pending.pop_front() {
        let result = update(state, msg);
        if let Some(chained) = result.message {
            pending.push_front(chained);
        }
        if let Some(UpdateAction::Defer { message, .. }) = result.action {
            pending.push_back(message);
        }
    }
}
