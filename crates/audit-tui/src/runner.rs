//! Main TUI runner - entry point and event loop

use std::sync::Arc;

use audit_app::config::Settings;
use audit_app::message::Message;
use audit_app::process::process_message;
use audit_app::signals;
use audit_app::state::AppState;
use audit_core::prelude::*;
use audit_core::Assessment;
use tokio::sync::mpsc;

use super::{event, render, terminal};

/// Run the interactive questionnaire until the user quits
pub async fn run(assessment: Arc<Assessment>, settings: Settings) -> Result<()> {
    info!(
        "Starting TUI: {} questions, advance delay {:?}",
        assessment.total_questions(),
        settings.advance_delay()
    );

    let mut term = terminal::init()?;
    let mut state = AppState::with_settings(assessment, settings);

    // Unified message channel for deferred actions and the signal handler
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    // Sends Message::Quit on SIGINT/SIGTERM
    signals::spawn_signal_handler(msg_tx.clone());

    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx);

    terminal::restore();

    if let Err(e) = &result {
        error!("TUI loop exited with error: {}", e);
    } else {
        info!(
            "TUI exited: {}/{} answered",
            state.answered_count(),
            state.total_questions()
        );
    }
    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
) -> Result<()> {
    while !state.should_quit() {
        // Deferred messages and signals
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, &msg_tx);
        }

        terminal.draw(|frame| render::view(frame, state))?;

        if let Some(message) = event::poll()? {
            process_message(state, message, &msg_tx);
        }
    }

    Ok(())
}
