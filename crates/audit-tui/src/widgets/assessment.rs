//! Assessment page: question cards, then results once revealed
//!
//! The page is built as one [`Document`] of pre-wrapped lines. Each item
//! records where it starts so the view can scroll the focused item into
//! the middle of the viewport.

use std::ops::Range;

use audit_app::{AppState, Focus};
use audit_core::{LikertValue, Question, SCALE_HIGH_LABEL, SCALE_LOW_LABEL};
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Margin, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use super::{results_lines, Footer};
use crate::theme::styles;
use crate::wrap::wrap_text;

/// Left gutter of a question card
const CARD_GUTTER: &str = "│ ";
const CARD_GUTTER_FOCUSED: &str = "┃ ";
const QUOTE_GUTTER: &str = "▎ ";
const GUTTER_WIDTH: usize = 2;

/// Width of one scale option, e.g. " 3 "
const OPTION_WIDTH: usize = 3;
const OPTION_GAP: &str = "  ";

/// Columns used by the 0–5 selector
pub fn selector_width() -> usize {
    let count = LikertValue::all().count();
    count * OPTION_WIDTH + (count - 1) * OPTION_GAP.len()
}

/// Pre-wrapped lines of the assessment page
#[derive(Debug, Default)]
pub struct Document {
    lines: Vec<Line<'static>>,
    /// First line of each question item (its section header, if any)
    question_starts: Vec<usize>,
    results_start: Option<usize>,
}

impl Document {
    /// Lay out the page for a content width of `width` columns
    pub fn build(state: &AppState, width: u16) -> Self {
        let width = width as usize;
        let mut doc = Self::default();

        for question in state.assessment.questions() {
            let index = question.number - 1;
            let focused = state.focus == Focus::Question(index);

            doc.question_starts.push(doc.lines.len());
            if question.is_first_of_section {
                doc.push_section_header(question, width);
            }
            doc.push_card(state, question, index, focused, width);
            doc.lines.push(Line::default());
        }

        if state.results_visible {
            doc.results_start = Some(doc.lines.len());
            doc.lines.push(Line::styled(
                "─".repeat(width),
                styles::border_inactive(),
            ));
            doc.lines.push(Line::default());
            doc.lines.extend(results_lines(state, width));
            doc.lines.push(Line::default());
        }

        let footer = &state.assessment.intro().footer;
        if state.settings.ui.show_footer && !footer.is_empty() {
            for line in wrap_text(footer, width) {
                doc.lines.push(Footer::line(&line));
            }
        }

        doc
    }

    pub fn lines(&self) -> &[Line<'static>] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<Line<'static>> {
        self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn question_start(&self, index: usize) -> Option<usize> {
        self.question_starts.get(index).copied()
    }

    pub fn results_start(&self) -> Option<usize> {
        self.results_start
    }

    /// Line range of the focused item
    pub fn item_range(&self, focus: Focus) -> Option<Range<usize>> {
        match focus {
            Focus::Top => None,
            Focus::Question(index) => {
                let start = self.question_start(index)?;
                let end = self
                    .question_start(index + 1)
                    .or(self.results_start)
                    .unwrap_or(self.lines.len());
                Some(start..end)
            }
            Focus::Results => self.results_start.map(|start| start..self.lines.len()),
        }
    }

    /// Scroll offset that centers the focused item in a viewport of
    /// `height` rows
    ///
    /// Items taller than the viewport are aligned to their first line.
    pub fn scroll_offset(&self, focus: Focus, height: u16) -> u16 {
        let height = height as usize;
        let Some(range) = self.item_range(focus) else {
            return 0;
        };

        let item_height = range.end - range.start;
        let offset = if item_height >= height {
            range.start
        } else {
            (range.start + item_height / 2).saturating_sub(height / 2)
        };

        let max_offset = self.lines.len().saturating_sub(height);
        u16::try_from(offset.min(max_offset)).unwrap_or(u16::MAX)
    }

    fn push_section_header(&mut self, question: &Question, width: usize) {
        for line in wrap_text(&question.section_title, width) {
            self.lines.push(Line::styled(line, styles::accent_bold()));
        }
        let subtitle = styles::text_secondary().add_modifier(Modifier::ITALIC);
        for line in wrap_text(&question.section_subtitle, width) {
            self.lines.push(Line::styled(line, subtitle));
        }
        if !question.section_info.is_empty() {
            let quote = styles::text_muted().add_modifier(Modifier::ITALIC);
            for line in wrap_text(&question.section_info, width.saturating_sub(GUTTER_WIDTH)) {
                self.lines.push(Line::from(vec![
                    Span::styled(QUOTE_GUTTER, styles::quote_bar()),
                    Span::styled(line, quote),
                ]));
            }
        }
        self.lines.push(Line::default());
    }

    fn push_card(
        &mut self,
        state: &AppState,
        question: &Question,
        index: usize,
        focused: bool,
        width: usize,
    ) {
        let gutter = if focused {
            Span::styled(CARD_GUTTER_FOCUSED, styles::border_active())
        } else {
            Span::styled(CARD_GUTTER, styles::border_inactive())
        };
        let inner = width.saturating_sub(GUTTER_WIDTH);
        let mut push = |spans: Vec<Span<'static>>| {
            let mut line = vec![gutter.clone()];
            line.extend(spans);
            self.lines.push(Line::from(line));
        };

        let title_style = if focused {
            styles::accent_bold()
        } else {
            styles::text_secondary().add_modifier(Modifier::BOLD)
        };
        push(vec![
            Span::styled(format!("Question {}", question.number), title_style),
            Span::styled(
                format!(" of {}", state.total_questions()),
                styles::text_muted(),
            ),
        ]);

        for line in wrap_text(&question.text, inner) {
            push(vec![Span::styled(line, styles::text_primary())]);
        }
        push(vec![]);

        push(vec![scale_labels()]);

        let selected = state.selected_value(index);
        push(selector_spans(selected));

        if selected.is_some() {
            push(vec![Span::styled("✓ Answer recorded", styles::answer_recorded())]);
        }
    }
}

/// "Never … Almost Always" spread over the selector width
fn scale_labels() -> Span<'static> {
    let gap = selector_width()
        .saturating_sub(SCALE_LOW_LABEL.len() + SCALE_HIGH_LABEL.len())
        .max(1);
    Span::styled(
        format!("{}{}{}", SCALE_LOW_LABEL, " ".repeat(gap), SCALE_HIGH_LABEL),
        styles::text_muted(),
    )
}

fn selector_spans(selected: Option<LikertValue>) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    for value in LikertValue::all() {
        if !spans.is_empty() {
            spans.push(Span::raw(OPTION_GAP));
        }
        let style: Style = if selected == Some(value) {
            styles::focused_selected()
        } else {
            styles::scale_option()
        };
        spans.push(Span::styled(format!(" {} ", value), style));
    }
    spans
}

/// Scrolling assessment page with a key hint row
pub struct AssessmentView<'a> {
    state: &'a AppState,
}

impl<'a> AssessmentView<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn hints(&self) -> Line<'static> {
        let mut spans = vec![
            Span::styled("0-5", styles::keybinding()),
            Span::styled(" answer  ", styles::text_muted()),
            Span::styled("↑↓", styles::keybinding()),
            Span::styled(" move  ", styles::text_muted()),
        ];
        if self.state.results_visible {
            spans.push(Span::styled("r", styles::keybinding()));
            spans.push(Span::styled(" restart  ", styles::text_muted()));
        }
        spans.push(Span::styled("q", styles::keybinding()));
        spans.push(Span::styled(" quit", styles::text_muted()));
        Line::from(spans)
    }
}

impl Widget for AssessmentView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [body, hints] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(area);
        let body = body.inner(Margin::new(1, 0));

        let doc = Document::build(self.state, body.width);
        let offset = doc.scroll_offset(self.state.focus, body.height);

        Paragraph::new(doc.into_lines())
            .scroll((offset, 0))
            .render(body, buf);
        Paragraph::new(self.hints()).render(hints.inner(Margin::new(1, 0)), buf);
    }
}
