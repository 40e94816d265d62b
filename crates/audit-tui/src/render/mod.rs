//! Main render/view function (View in TEA pattern)


use audit_app::state::{AppState, UiMode};
use audit_core::FlowPhase;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use super::{layout, widgets};
use crate::theme::palette;

/// Render the complete UI (View function in TEA)
///
/// Pure: reads state, never modifies it. Scroll position is derived from
/// the focused item on every frame.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let in_assessment = state.phase == FlowPhase::Assessment;
    let areas = layout::create(area, in_assessment);

    match state.phase {
        FlowPhase::Intro => {
            let intro = widgets::IntroView::new(state.assessment.intro())
                .show_footer(state.settings.ui.show_footer);
            frame.render_widget(intro, areas.body);
        }
        FlowPhase::Assessment => {
            let progress = widgets::ProgressBar::new(
                state.answered_count(),
                state.total_questions(),
                state.progress_percentage(),
            );
            frame.render_widget(progress, areas.progress);
            frame.render_widget(widgets::AssessmentView::new(state), areas.body);
        }
    }

    if state.ui_mode == UiMode::ConfirmDialog {
        if let Some(dialog_state) = &state.confirm_dialog_state {
            frame.render_widget(widgets::ConfirmDialog::new(dialog_state), area);
        }
    }
}
