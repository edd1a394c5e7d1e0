//! Status bar UI component.

use crate::session::Summary;
use crate::ui::formatters::{format_count, format_length};
use crate::ui::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Draw the status bar.
pub fn draw_status(
    f: &mut Frame<'_>,
    area: Rect,
    status: &str,
    summary: &Summary,
    colors: &ThemeColors,
) {
    let text = format!(
        " {} | {} points | {} segments | length {} | {}",
        summary.source,
        format_count(summary.points),
        format_count(summary.segments),
        format_length(summary.length),
        status
    );

    let paragraph =
        Paragraph::new(text).style(Style::default().fg(colors.status_fg).bg(colors.status_bg));

    f.render_widget(paragraph, area);
}
