//! Executive self-audit
//!
//! A terminal questionnaire: answer each statement on a 0–5 scale, then see
//! the total score and the band it falls into. The interactive UI lives in
//! `audit-tui`; this crate adds startup helpers and the headless runner.

pub mod headless;
pub mod startup;

// Re-export main entry points
pub use audit_tui::run;
pub use headless::run_headless;
