//! Plot configuration.

use ratatui::symbols::Marker;

/// Configuration for the plot view.
#[derive(Debug, Clone)]
pub struct PlotConfig {
    /// Margin added around the data on each axis (0.05 = 5% of the span).
    pub padding_factor: f64,
    /// Marker used to rasterize points and lines.
    pub marker: Marker,
    /// Whether point indices are printed next to each point.
    pub show_labels: bool,
    /// Title shown on the plot border.
    pub title: String,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            padding_factor: 0.05,
            marker: Marker::Braille,
            show_labels: false,
            title: "Route".to_string(),
        }
    }
}

impl PlotConfig {
    /// Config with a custom title.
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}
