//! Screen layout definitions for the TUI
//!
//! The intro uses the whole screen. During the assessment a progress
//! gauge sits above the scrolling question document.

use ratatui::layout::{Constraint, Layout, Rect};

/// Height of the progress gauge container (border + gauge + border)
pub const PROGRESS_HEIGHT: u16 = 3;

/// Width the content column is capped at on wide terminals
pub const MAX_CONTENT_WIDTH: u16 = 90;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Progress gauge, empty on the intro screen
    pub progress: Rect,

    /// Main content area (intro or question document)
    pub body: Rect,
}

/// Create the main screen layout
///
/// # Arguments
/// * `area` - Total screen area
/// * `show_progress` - Reserve the progress gauge row (assessment phase)
pub fn create(area: Rect, show_progress: bool) -> ScreenAreas {
    let area = content_column(area);
    let progress_height = if show_progress { PROGRESS_HEIGHT } else { 0 };

    let chunks = Layout::vertical([
        Constraint::Length(progress_height),
        Constraint::Min(3),
    ])
    .split(area);

    ScreenAreas {
        progress: chunks[0],
        body: chunks[1],
    }
}

/// Center a column of at most [`MAX_CONTENT_WIDTH`] within the area
pub fn content_column(area: Rect) -> Rect {
    let width = area.width.min(MAX_CONTENT_WIDTH);
    let x = area.x + (area.width - width) / 2;
    Rect::new(x, area.y, width, area.height)
}
