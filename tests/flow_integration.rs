//! End-to-end flow through the real message loop
//!
//! Keys go through `process_message`, deferred actions run as tokio tasks
//! on paused time, and the results are checked on the final state.

use std::time::Duration;

use audit_app::process::process_message;
use audit_app::{AppState, Focus, InputKey, Message};
use audit_core::FlowPhase;
use tokio::sync::mpsc;

/// Drain every message that has arrived so far
fn drain(state: &mut AppState, rx: &mut mpsc::Receiver<Message>, tx: &mpsc::Sender<Message>) {
    while let Ok(msg) = rx.try_recv() {
        process_message(state, msg, tx);
    }
}

async fn press(
    state: &mut AppState,
    key: InputKey,
    rx: &mut mpsc::Receiver<Message>,
    tx: &mpsc::Sender<Message>,
) {
    process_message(state, Message::Key(key), tx);
    // Let advance (800ms) and results (300ms) deliveries land
    tokio::time::sleep(Duration::from_millis(1200)).await;
    drain(state, rx, tx);
    tokio::time::sleep(Duration::from_millis(400)).await;
    drain(state, rx, tx);
}

#[tokio::test(start_paused = true)]
async fn test_full_assessment_by_keyboard() {
    let (tx, mut rx) = mpsc::channel::<Message>(64);
    let mut state = AppState::new();

    process_message(&mut state, Message::Key(InputKey::Enter), &tx);
    assert_eq!(state.phase, FlowPhase::Assessment);

    for i in 0..25 {
        assert_eq!(state.focus, Focus::Question(i), "focus before answer {}", i);
        press(&mut state, InputKey::Char('3'), &mut rx, &tx).await;
    }

    assert!(state.results_visible);
    assert_eq!(state.focus, Focus::Results);
    assert_eq!(state.total_score(), 75);
    assert_eq!(state.current_band().level, "High Impact");

    // Results are visible, so quitting does not ask for confirmation
    process_message(&mut state, Message::Key(InputKey::Char('q')), &tx);
    assert!(state.should_quit());
}

#[tokio::test(start_paused = true)]
async fn test_restart_discards_pending_advance() {
    let (tx, mut rx) = mpsc::channel::<Message>(64);
    let mut state = AppState::new();
    process_message(&mut state, Message::Start, &tx);

    state.focus = Focus::Question(24);
    process_message(&mut state, Message::Key(InputKey::Char('5')), &tx);

    // Restart before the deferred advance is delivered, then start again
    state.results_visible = true;
    process_message(&mut state, Message::Key(InputKey::Char('r')), &tx);
    assert_eq!(state.phase, FlowPhase::Intro);
    process_message(&mut state, Message::Start, &tx);

    tokio::time::sleep(Duration::from_secs(2)).await;
    drain(&mut state, &mut rx, &tx);

    assert!(!state.results_visible);
    assert_eq!(state.answered_count(), 0);
    assert_eq!(state.focus, Focus::Question(0));
}

#[tokio::test(start_paused = true)]
async fn test_quit_mid_assessment_asks_first() {
    let (tx, mut rx) = mpsc::channel::<Message>(64);
    let mut state = AppState::new();
    process_message(&mut state, Message::Start, &tx);
    press(&mut state, InputKey::Char('1'), &mut rx, &tx).await;

    process_message(&mut state, Message::Key(InputKey::Esc), &tx);
    assert!(!state.should_quit());

    process_message(&mut state, Message::Key(InputKey::Char('n')), &tx);
    assert!(!state.should_quit());
    assert_eq!(state.answered_count(), 1);

    process_message(&mut state, Message::Key(InputKey::Char('q')), &tx);
    process_message(&mut state, Message::Key(InputKey::Char('y')), &tx);
    assert!(state.should_quit());
}
