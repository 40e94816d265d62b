//! audit-tui - Terminal UI for the executive self-audit
//!
//! This crate provides the ratatui-based interface: intro screen, progress
//! gauge, scrolling question cards, results, and the quit confirmation.
//! State and transitions come from audit-app.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;
pub mod wrap;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
