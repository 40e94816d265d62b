//! Color palette for the audit screens.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black; // Terminal background
pub const POPUP_BG: Color = Color::DarkGray; // Modal/popup backgrounds

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray; // Unfocused cards
pub const BORDER_ACTIVE: Color = Color::Cyan; // Focused card

// --- Accent ---
pub const ACCENT: Color = Color::Cyan;
pub const CONTRAST_FG: Color = Color::Black; // Text on accent backgrounds

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;
pub const TEXT_BRIGHT: Color = Color::White;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green;
pub const STATUS_RED: Color = Color::Red;
pub const STATUS_YELLOW: Color = Color::Yellow;
pub const STATUS_ORANGE: Color = Color::LightRed;

// --- Section header quote ---
pub const QUOTE_BAR: Color = Color::Blue;

// --- Progress gauge ---
pub const GAUGE_FILLED: Color = Color::Cyan;
pub const GAUGE_EMPTY: Color = Color::DarkGray;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_border_differs_from_dim_border() {
        assert_ne!(BORDER_ACTIVE, BORDER_DIM);
    }

    #[test]
    fn test_status_colors_are_distinct() {
        let colors = [STATUS_GREEN, STATUS_YELLOW, STATUS_ORANGE, STATUS_RED];
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
