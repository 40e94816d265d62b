//! Application state (Model in TEA pattern)

use std::sync::Arc;

use audit_core::{Assessment, FlowPhase, LikertValue, ScoreBand};

use crate::answers::AnswerSheet;
use crate::config::Settings;
use crate::confirm_dialog::ConfirmDialogState;

/// Current UI mode/screen overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Intro or assessment, no overlay
    #[default]
    Normal,

    /// Confirmation dialog (quit with answers recorded)
    ConfirmDialog,
}

/// The item the viewport keeps centered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Top of the page (intro, or right after a restart)
    #[default]
    Top,
    /// A question card, by flattened index
    Question(usize),
    /// The results view
    Results,
}

/// Complete application state
#[derive(Debug)]
pub struct AppState {
    /// Validated questionnaire, shared read-only
    pub assessment: Arc<Assessment>,

    pub settings: Settings,

    pub phase: FlowPhase,

    pub answers: AnswerSheet,

    /// Results view is rendered below the last question
    pub results_visible: bool,

    pub focus: Focus,

    /// Bumped on every start/restart; deferred messages from an older
    /// generation are ignored
    pub generation: u64,

    pub ui_mode: UiMode,

    pub confirm_dialog_state: Option<ConfirmDialogState>,

    quitting: bool,
}

impl AppState {
    /// State for the built-in questionnaire with default settings
    pub fn new() -> Self {
        Self::with_settings(Arc::new(Assessment::builtin()), Settings::default())
    }

    pub fn with_settings(assessment: Arc<Assessment>, settings: Settings) -> Self {
        Self {
            assessment,
            settings,
            phase: FlowPhase::Intro,
            answers: AnswerSheet::new(),
            results_visible: false,
            focus: Focus::Top,
            generation: 0,
            ui_mode: UiMode::Normal,
            confirm_dialog_state: None,
            quitting: false,
        }
    }

    // ─────────────────────────────────────────────────────────
    // Transitions
    // ─────────────────────────────────────────────────────────

    /// Intro → Assessment: all slots unset, results hidden
    pub fn begin_assessment(&mut self) {
        self.phase = FlowPhase::Assessment;
        self.answers = AnswerSheet::unset(self.total_questions());
        self.results_visible = false;
        self.focus = Focus::Question(0);
        self.generation += 1;
    }

    /// Assessment → Intro: answers discarded, back to the top
    pub fn reset_to_intro(&mut self) {
        self.phase = FlowPhase::Intro;
        self.answers.clear();
        self.results_visible = false;
        self.focus = Focus::Top;
        self.generation += 1;
    }

    // ─────────────────────────────────────────────────────────
    // Derived values
    // ─────────────────────────────────────────────────────────

    pub fn total_questions(&self) -> usize {
        self.assessment.total_questions()
    }

    pub fn answered_count(&self) -> usize {
        self.answers.answered_count()
    }

    pub fn total_score(&self) -> u32 {
        self.answers.total_score()
    }

    /// Answered share of all questions, `0.0..=100.0`
    pub fn progress_percentage(&self) -> f64 {
        self.answers.progress_percentage()
    }

    /// Band for the current total score
    pub fn current_band(&self) -> &ScoreBand {
        self.assessment.resolve_band(self.total_score())
    }

    /// Value recorded for a question, `None` when unanswered
    pub fn selected_value(&self, index: usize) -> Option<LikertValue> {
        self.answers.get(index)
    }

    pub fn is_last_question(&self, index: usize) -> bool {
        index + 1 == self.total_questions()
    }

    /// Question index under focus, if a question is focused
    pub fn focused_question(&self) -> Option<usize> {
        match self.focus {
            Focus::Question(i) => Some(i),
            _ => None,
        }
    }

    // ─────────────────────────────────────────────────────────
    // Quit handling
    // ─────────────────────────────────────────────────────────

    /// Quit, or ask first when answers would be lost
    pub fn request_quit(&mut self) {
        let has_progress = self.phase == FlowPhase::Assessment && self.answered_count() > 0;
        if self.settings.behavior.confirm_quit && has_progress && !self.results_visible {
            self.confirm_dialog_state = Some(ConfirmDialogState::quit_confirmation(
                self.answered_count(),
                self.total_questions(),
            ));
            self.ui_mode = UiMode::ConfirmDialog;
        } else {
            self.quitting = true;
        }
    }

    pub fn confirm_quit(&mut self) {
        self.confirm_dialog_state = None;
        self.ui_mode = UiMode::Normal;
        self.quitting = true;
    }

    pub fn cancel_quit(&mut self) {
        self.confirm_dialog_state = None;
        self.ui_mode = UiMode::Normal;
    }

    pub fn force_quit(&mut self) {
        self.quitting = true;
    }

    pub fn should_quit(&self) -> bool {
        self.quitting
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(n: u8) -> LikertValue {
        LikertValue::new(n).unwrap()
    }

    #[test]
    fn test_new_state_is_intro_with_empty_answers() {
        let state = AppState::new();
        assert_eq!(state.phase, FlowPhase::Intro);
        assert!(state.answers.is_empty());
        assert!(!state.results_visible);
        assert_eq!(state.focus, Focus::Top);
        assert_eq!(state.total_questions(), 25);
    }

    #[test]
    fn test_begin_assessment_sizes_answers() {
        let mut state = AppState::new();
        state.begin_assessment();

        assert_eq!(state.phase, FlowPhase::Assessment);
        assert_eq!(state.answers.len(), 25);
        assert_eq!(state.answered_count(), 0);
        assert_eq!(state.focus, Focus::Question(0));
        assert_eq!(state.generation, 1);
    }

    #[test]
    fn test_reset_to_intro_clears_everything() {
        let mut state = AppState::new();
        state.begin_assessment();
        state.answers.set(0, v(4));
        state.results_visible = true;

        state.reset_to_intro();

        assert_eq!(state.phase, FlowPhase::Intro);
        assert!(state.answers.is_empty());
        assert!(!state.results_visible);
        assert_eq!(state.focus, Focus::Top);
        assert_eq!(state.generation, 2);
    }

    #[test]
    fn test_current_band_all_threes_is_high_impact() {
        let mut state = AppState::new();
        state.begin_assessment();
        for i in 0..25 {
            state.answers.set(i, v(3));
        }
        assert_eq!(state.total_score(), 75);
        assert_eq!(state.current_band().level, "High Impact");
    }

    #[test]
    fn test_current_band_all_zeros_is_low_impact() {
        let mut state = AppState::new();
        state.begin_assessment();
        for i in 0..25 {
            state.answers.set(i, v(0));
        }
        assert_eq!(state.total_score(), 0);
        assert_eq!(state.current_band().level, "Low Impact");
    }

    #[test]
    fn test_progress_percentage() {
        let mut state = AppState::new();
        assert_eq!(state.progress_percentage(), 0.0);
        state.begin_assessment();
        for i in 0..5 {
            state.answers.set(i, v(1));
        }
        assert_eq!(state.progress_percentage(), 20.0);
    }

    #[test]
    fn test_request_quit_without_progress_quits() {
        let mut state = AppState::new();
        state.request_quit();
        assert!(state.should_quit());
        assert_eq!(state.ui_mode, UiMode::Normal);
    }

    #[test]
    fn test_request_quit_with_progress_asks() {
        let mut state = AppState::new();
        state.begin_assessment();
        state.answers.set(0, v(2));

        state.request_quit();

        assert!(!state.should_quit());
        assert_eq!(state.ui_mode, UiMode::ConfirmDialog);
        assert!(state.confirm_dialog_state.is_some());

        state.cancel_quit();
        assert_eq!(state.ui_mode, UiMode::Normal);
        assert!(state.confirm_dialog_state.is_none());
        assert!(!state.should_quit());
    }

    #[test]
    fn test_request_quit_respects_setting() {
        let mut settings = Settings::default();
        settings.behavior.confirm_quit = false;
        let mut state = AppState::with_settings(Arc::new(Assessment::builtin()), settings);
        state.begin_assessment();
        state.answers.set(0, v(2));

        state.request_quit();
        assert!(state.should_quit());
    }

    #[test]
    fn test_is_last_question() {
        let state = AppState::new();
        assert!(state.is_last_question(24));
        assert!(!state.is_last_question(23));
    }
}
