//! Confidentiality footer shown under the intro and the assessment

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Widget};

use crate::theme::styles;

pub struct Footer<'a> {
    text: &'a str,
}

impl<'a> Footer<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }

    pub fn line(text: &str) -> Line<'static> {
        Line::styled(text.to_string(), styles::text_muted()).alignment(Alignment::Center)
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.text.is_empty() || area.height == 0 {
            return;
        }
        Paragraph::new(Self::line(self.text)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_footer_renders_text() {
        let mut term = TestTerminal::with_size(60, 1);
        term.render_widget(Footer::new("Confidential"), term.area());
        assert!(term.buffer_contains("Confidential"));
    }

    #[test]
    fn test_empty_footer_renders_nothing() {
        let mut term = TestTerminal::with_size(20, 1);
        term.render_widget(Footer::new(""), term.area());
        assert_eq!(term.content().trim(), "");
    }
}
