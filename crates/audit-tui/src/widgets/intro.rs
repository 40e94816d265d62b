//! Intro screen: headline, description, start action

use audit_core::Intro;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Margin, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget, Wrap};

use super::Footer;
use crate::theme::styles;

/// Intro view widget
pub struct IntroView<'a> {
    intro: &'a Intro,
    show_footer: bool,
}

impl<'a> IntroView<'a> {
    pub fn new(intro: &'a Intro) -> Self {
        Self {
            intro,
            show_footer: true,
        }
    }

    pub fn show_footer(mut self, show: bool) -> Self {
        self.show_footer = show;
        self
    }

    fn description_lines(&self) -> Vec<Line<'a>> {
        let mut lines = Vec::new();
        for paragraph in self
            .intro
            .description
            .split("\n\n")
            .map(str::trim)
            .filter(|p| !p.is_empty())
        {
            if !lines.is_empty() {
                lines.push(Line::default());
            }
            lines.push(Line::styled(paragraph, styles::text_secondary()));
        }
        lines
    }
}

impl Widget for IntroView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(true);
        let inner = block.inner(area);
        block.render(area, buf);

        let footer_height = if self.show_footer && !self.intro.footer.is_empty() {
            1
        } else {
            0
        };

        let [content, actions, footer] = Layout::vertical([
            Constraint::Min(1),
            Constraint::Length(2),
            Constraint::Length(footer_height),
        ])
        .areas(inner.inner(Margin::new(2, 1)));

        let mut lines = vec![
            Line::styled(self.intro.headline.as_str(), styles::accent_bold())
                .alignment(Alignment::Center),
            Line::default(),
        ];
        lines.extend(self.description_lines());

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(content, buf);

        let start = Line::from(vec![
            Span::styled("[Enter]", styles::keybinding()),
            Span::styled(" Start Audit", styles::text_bright_bold()),
            Span::styled("    [q] Quit", styles::text_muted()),
        ])
        .alignment(Alignment::Center);
        Paragraph::new(start).render(actions, buf);

        if footer_height > 0 {
            Footer::new(&self.intro.footer).render(footer, buf);
        }
    }
}
