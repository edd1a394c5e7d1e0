//! Keymap help bar UI component.

use crate::ui::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Draw the keymap help bar.
pub fn draw_keymap(f: &mut Frame<'_>, area: Rect, colors: &ThemeColors) {
    let paragraph = Paragraph::new(" q/Esc:close | i:labels | T:theme")
        .style(Style::default().fg(colors.keymap_fg).bg(colors.bg));

    f.render_widget(paragraph, area);
}
