//! Confirmation dialog widget for quitting mid-assessment

use audit_app::confirm_dialog::ConfirmDialogState;
use audit_app::Message;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};

use crate::theme::{palette, styles};

const MODAL_WIDTH: u16 = 50;
const MODAL_HEIGHT: u16 = 9;

/// Confirmation dialog widget
///
/// Dims whatever is already in the buffer and draws the modal centered
/// over it.
pub struct ConfirmDialog<'a> {
    state: &'a ConfirmDialogState,
}

impl<'a> ConfirmDialog<'a> {
    pub fn new(state: &'a ConfirmDialogState) -> Self {
        Self { state }
    }

    /// Key shown for an option
    fn option_key(message: &Message, label: &str) -> String {
        match message {
            Message::ConfirmQuit => "y".to_string(),
            Message::CancelQuit => "n".to_string(),
            _ => label
                .chars()
                .next()
                .map(|c| c.to_lowercase().to_string())
                .unwrap_or_default(),
        }
    }

    fn buttons(&self) -> Line<'static> {
        let mut spans = Vec::new();
        for (label, message) in &self.state.options {
            if !spans.is_empty() {
                spans.push(Span::raw("   "));
            }
            let key_style = match message {
                Message::ConfirmQuit => styles::severity(audit_core::Severity::Critical),
                Message::CancelQuit => styles::severity(audit_core::Severity::Low),
                _ => styles::keybinding(),
            };
            spans.push(Span::styled("[", styles::text_muted()));
            spans.push(Span::styled(Self::option_key(message, label), key_style));
            spans.push(Span::styled(format!("] {}", label), styles::text_secondary()));
        }
        Line::from(spans)
    }
}

/// Center a fixed-size rect within an area, clamped to the area
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width - w) / 2;
    let y = area.y + (area.height - h) / 2;
    Rect::new(x, y, w, h)
}

/// Mute everything behind the modal
fn dim_background(buf: &mut Buffer, area: Rect) {
    let dim = Style::default()
        .fg(palette::TEXT_MUTED)
        .bg(palette::DEEPEST_BG);
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_style(dim);
            }
        }
    }
}

impl Widget for ConfirmDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        dim_background(buf, area);

        let modal_area = centered_rect(MODAL_WIDTH, MODAL_HEIGHT, area);
        Clear.render(modal_area, buf);

        let title = format!(" {} ", self.state.title);
        let block = styles::modal_block(&title)
            .title_alignment(Alignment::Center)
            .border_style(styles::border_active());
        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        let [_, message, detail, _, buttons] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        Paragraph::new(self.state.message.as_str())
            .alignment(Alignment::Center)
            .style(Style::default().fg(palette::STATUS_YELLOW))
            .render(message, buf);

        Paragraph::new(self.state.detail.as_str())
            .alignment(Alignment::Center)
            .style(styles::text_primary())
            .render(detail, buf);

        Paragraph::new(self.buttons())
            .alignment(Alignment::Center)
            .render(buttons, buf);
    }
}
