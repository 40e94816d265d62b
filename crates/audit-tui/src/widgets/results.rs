//! Results view: score, band interpretation, next steps, restart action

use audit_app::AppState;
use ratatui::text::{Line, Span};

use crate::theme::styles;
use crate::wrap::wrap_text;

const BULLET: &str = "  • ";
const BULLET_CONTINUATION: &str = "    ";
const BULLET_WIDTH: usize = 4;

/// Lines of the results view, wrapped to `width` columns
///
/// The assessment document appends them below the last question.
pub fn results_lines(state: &AppState, width: usize) -> Vec<Line<'static>> {
    let assessment = &state.assessment;
    let band = state.current_band();
    let next = assessment.next_step();

    let mut lines = vec![
        Line::styled("Assessment Complete!", styles::accent_bold()),
        Line::styled(
            format!(
                "{} of {} questions answered",
                state.answered_count(),
                state.total_questions()
            ),
            styles::text_muted(),
        ),
        Line::default(),
        Line::from(vec![
            Span::styled("Your score: ", styles::text_secondary()),
            Span::styled(
                format!("{}/{}", state.total_score(), assessment.max_score()),
                styles::text_bright_bold(),
            ),
        ]),
        Line::styled(band.level.clone(), styles::severity(band.severity)),
    ];
    push_wrapped(&mut lines, &band.text, width, styles::text_primary());

    if !next.title.is_empty() {
        lines.push(Line::default());
        lines.push(Line::styled(next.title.clone(), styles::text_bright_bold()));
        push_wrapped(&mut lines, &next.description, width, styles::text_secondary());
        for point in &next.points {
            let wrapped = wrap_text(point, width.saturating_sub(BULLET_WIDTH));
            for (i, text) in wrapped.into_iter().enumerate() {
                let prefix = if i == 0 { BULLET } else { BULLET_CONTINUATION };
                lines.push(Line::from(vec![
                    Span::styled(prefix, styles::accent()),
                    Span::styled(text, styles::text_primary()),
                ]));
            }
        }
    }

    if !next.call_to_action.is_empty() {
        lines.push(Line::default());
        push_wrapped(&mut lines, &next.call_to_action, width, styles::accent());
    }

    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::styled("[r]", styles::keybinding()),
        Span::styled(" Take Again", styles::text_bright_bold()),
    ]));
    lines
}

fn push_wrapped(
    lines: &mut Vec<Line<'static>>,
    text: &str,
    width: usize,
    style: ratatui::style::Style,
) {
    if text.trim().is_empty() {
        return;
    }
    lines.extend(
        wrap_text(text, width)
            .into_iter()
            .map(|l| Line::styled(l, style)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{answer_all, create_started_state};

    fn text_of(lines: &[Line<'_>]) -> String {
        lines
            .iter()
            .map(|l| l.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_results_lines_high_impact() {
        let mut state = create_started_state();
        answer_all(&mut state, 3);

        let text = text_of(&results_lines(&state, 70));

        assert!(text.contains("Assessment Complete!"));
        assert!(text.contains("25 of 25 questions answered"));
        assert!(text.contains("75/125"));
        assert!(text.contains("High Impact"));
        assert!(text.contains("Next Step for Executives"));
        assert!(text.contains("[r] Take Again"));
    }

    #[test]
    fn test_results_lines_low_impact() {
        let mut state = create_started_state();
        answer_all(&mut state, 0);

        let text = text_of(&results_lines(&state, 70));

        assert!(text.contains("0/125"));
        assert!(text.contains("Low Impact"));
    }

    #[test]
    fn test_level_line_uses_severity_color() {
        let mut state = create_started_state();
        answer_all(&mut state, 5);

        let lines = results_lines(&state, 70);
        let level = lines
            .iter()
            .find(|l| l.to_string() == "Critical Impact")
            .expect("level line");
        assert_eq!(
            level.style.fg,
            styles::severity(audit_core::Severity::Critical).fg
        );
    }

    #[test]
    fn test_results_lines_respect_width() {
        let mut state = create_started_state();
        answer_all(&mut state, 2);

        for line in results_lines(&state, 30) {
            assert!(line.width() <= 30, "{:?}", line.to_string());
        }
    }
}
