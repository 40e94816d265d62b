//! Headless mode - JSON event output instead of the TUI
//!
//! Runs the same questionnaire state machine with answers taken from the
//! command line or stdin, and prints structured events to stdout. Useful for
//! scripting and for end-to-end tests that should not parse a terminal UI.
//!
//! # Event Format
//!
//! Events are output as NDJSON (newline-delimited JSON), one event per line.
//! Each event has an "event" field indicating its type.
//!
//! # Example Output
//!
//! ```json
//! {"event":"assessment_started","total_questions":25,"max_score":125,"timestamp":1704700001000}
//! {"event":"answer_recorded","question":1,"value":3,"answered":1,"total_score":3,"timestamp":1704700001001}
//! {"event":"results_ready","score":75,"max_score":125,"level":"High Impact","severity":"high","answered":25,"total_questions":25,"timestamp":1704700001010}
//! ```

pub mod runner;

use chrono::Utc;
use serde::Serialize;
use std::io::{self, Write};

use audit_core::prelude::*;

pub use runner::{parse_answers, run_answers, run_headless};

/// Events emitted in headless mode
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// Answer slots were reset and questions are open
    AssessmentStarted {
        total_questions: usize,
        max_score: u32,
        timestamp: i64,
    },

    /// One answer was recorded
    AnswerRecorded {
        /// 1-based question number
        question: usize,
        value: u8,
        answered: usize,
        total_score: u32,
        timestamp: i64,
    },

    /// All questions answered and the score band resolved
    ResultsReady {
        score: u32,
        max_score: u32,
        level: String,
        severity: String,
        answered: usize,
        total_questions: usize,
        timestamp: i64,
    },

    /// Error occurred
    Error {
        message: String,
        fatal: bool,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Emit this event to stdout as JSON
    pub fn emit(&self) {
        let mut stdout = io::stdout().lock();
        if let Err(e) = self.write_to(&mut stdout) {
            error!("Failed to write headless event to stdout: {}", e);
        }
    }

    /// Write this event as one NDJSON line and flush
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        let json = serde_json::to_string(self)?;
        writeln!(out, "{}", json)?;
        out.flush()?;
        Ok(())
    }

    /// Get current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    // ─────────────────────────────────────────────────────────
    // Convenience constructors
    // ─────────────────────────────────────────────────────────

    pub fn assessment_started(total_questions: usize, max_score: u32) -> Self {
        Self::AssessmentStarted {
            total_questions,
            max_score,
            timestamp: Self::now(),
        }
    }

    pub fn answer_recorded(question: usize, value: u8, answered: usize, total_score: u32) -> Self {
        Self::AnswerRecorded {
            question,
            value,
            answered,
            total_score,
            timestamp: Self::now(),
        }
    }

    pub fn results_ready(
        score: u32,
        max_score: u32,
        level: &str,
        severity: &str,
        answered: usize,
        total_questions: usize,
    ) -> Self {
        Self::ResultsReady {
            score,
            max_score,
            level: level.to_string(),
            severity: severity.to_string(),
            answered,
            total_questions,
            timestamp: Self::now(),
        }
    }

    pub fn error(message: String, fatal: bool) -> Self {
        Self::Error {
            message,
            fatal,
            timestamp: Self::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assessment_started_serialization() {
        let event = HeadlessEvent::assessment_started(25, 125);
        let json = serde_json::to_string(&event).unwrap();

        assert!(json.contains(r#""event":"assessment_started""#));
        assert!(json.contains(r#""total_questions":25"#));
        assert!(json.contains(r#""max_score":125"#));
        assert!(json.contains(r#""timestamp":"#));
    }

    #[test]
    fn test_answer_recorded_serialization() {
        let event = HeadlessEvent::answer_recorded(3, 4, 3, 9);
        let json = serde_json::to_string(&event).unwrap();

        assert!(json.contains(r#""event":"answer_recorded""#));
        assert!(json.contains(r#""question":3"#));
        assert!(json.contains(r#""value":4"#));
        assert!(json.contains(r#""total_score":9"#));
    }

    #[test]
    fn test_results_ready_serialization() {
        let event = HeadlessEvent::results_ready(75, 125, "High Impact", "high", 25, 25);
        let json = serde_json::to_string(&event).unwrap();

        assert!(json.contains(r#""event":"results_ready""#));
        assert!(json.contains(r#""level":"High Impact""#));
        assert!(json.contains(r#""severity":"high""#));
    }

    #[test]
    fn test_error_serialization() {
        let event = HeadlessEvent::error("bad answer".to_string(), true);
        let json = serde_json::to_string(&event).unwrap();

        assert!(json.contains(r#""event":"error""#));
        assert!(json.contains(r#""message":"bad answer""#));
        assert!(json.contains(r#""fatal":true"#));
    }

    #[test]
    fn test_write_to_emits_one_line() {
        let mut out = Vec::new();
        HeadlessEvent::assessment_started(5, 25)
            .write_to(&mut out)
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with('\n'));
        assert_eq!(text.lines().count(), 1);
        let value: serde_json::Value = serde_json::from_str(text.trim()).unwrap();
        assert_eq!(value["event"], "assessment_started");
    }
}
