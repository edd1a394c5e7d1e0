//! Color themes for the UI.

use crate::app::Theme;
use ratatui::style::Color;

/// Theme color palette.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    /// Background color.
    pub bg: Color,
    /// Plot title color.
    pub heading: Color,
    /// Border color.
    pub border: Color,
    /// Scatter mark color.
    pub point: Color,
    /// Route segment color.
    pub route: Color,
    /// Point index label color.
    pub label: Color,
    /// Status bar foreground color.
    pub status_fg: Color,
    /// Status bar background color.
    pub status_bg: Color,
    /// Keymap bar foreground color.
    pub keymap_fg: Color,
}

impl ThemeColors {
    /// Create color palette from theme.
    pub fn from_theme(theme: &Theme) -> Self {
        match theme {
            Theme::GruvboxDark => Self {
                bg: Color::Rgb(40, 40, 40),
                heading: Color::Rgb(251, 184, 108),
                border: Color::Rgb(102, 92, 84),
                point: Color::Rgb(131, 165, 152),
                route: Color::Rgb(235, 219, 178),
                label: Color::Rgb(250, 189, 47),
                status_fg: Color::Rgb(235, 219, 178),
                status_bg: Color::Rgb(60, 56, 54),
                keymap_fg: Color::Rgb(184, 187, 38),
            },
            Theme::GruvboxLight => Self {
                bg: Color::Rgb(251, 245, 234),
                heading: Color::Rgb(175, 58, 3),
                border: Color::Rgb(213, 196, 161),
                point: Color::Rgb(7, 102, 120),
                route: Color::Rgb(40, 40, 40),
                label: Color::Rgb(181, 118, 20),
                status_fg: Color::Rgb(60, 56, 54),
                status_bg: Color::Rgb(235, 219, 178),
                keymap_fg: Color::Rgb(121, 116, 14),
            },
        }
    }
}
