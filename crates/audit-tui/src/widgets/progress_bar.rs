//! Progress gauge: answered questions over total

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Gauge, Widget};

use crate::theme::{palette, styles};

pub struct ProgressBar {
    answered: usize,
    total: usize,
    percentage: f64,
}

impl ProgressBar {
    pub fn new(answered: usize, total: usize, percentage: f64) -> Self {
        Self {
            answered,
            total,
            percentage,
        }
    }

    pub fn label(&self) -> String {
        format!(
            "{}/{} answered · {:.0}%",
            self.answered, self.total, self.percentage
        )
    }
}

impl Widget for ProgressBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let ratio = (self.percentage / 100.0).clamp(0.0, 1.0);
        Gauge::default()
            .block(styles::glass_block(false).title(" Progress "))
            .gauge_style(
                Style::default()
                    .fg(palette::GAUGE_FILLED)
                    .bg(palette::GAUGE_EMPTY),
            )
            .ratio(ratio)
            .label(self.label())
            .render(area, buf);
    }
}
