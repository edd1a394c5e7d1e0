//! User interface rendering.

mod formatters;
mod keymap_bar;
mod plot_view;
mod status_bar;
mod theme;

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

pub use formatters::{format_count, format_length};
pub use theme::ThemeColors;

/// Draw the UI.
pub fn draw(f: &mut Frame<'_>, app: &App) {
    let colors = ThemeColors::from_theme(&app.theme);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Plot
            Constraint::Length(1), // Status
            Constraint::Length(1), // Keymap
        ])
        .split(f.area());

    plot_view::draw_plot(f, chunks[0], app, &colors);
    status_bar::draw_status(f, chunks[1], &app.status, &app.summary, &colors);
    keymap_bar::draw_keymap(f, chunks[2], &colors);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlotConfig;
    use crate::data::Point;
    use crate::plot::Figure;
    use crate::session::{Session, SessionOptions, Summary};
    use ratatui::{backend::TestBackend, Terminal};
    use std::io::Cursor;

    fn builtin_app() -> App {
        let options = SessionOptions {
            use_defaults: true,
            ..Default::default()
        };
        let session =
            Session::acquire(&mut Cursor::new(Vec::<u8>::new()), &mut Vec::<u8>::new(), &options).unwrap();
        App::new(
            session.figure().unwrap(),
            PlotConfig::default(),
            session.summary().unwrap(),
        )
    }

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn draws_title_status_and_keymap() {
        let text = screen(&builtin_app());
        assert!(text.contains(" Route "));
        assert!(text.contains("built-in points | 14 points | 15 segments"));
        assert!(text.contains("q/Esc:close"));
    }

    #[test]
    fn plot_area_is_not_blank() {
        let text = screen(&builtin_app());
        // Braille cells occupy U+2800..U+28FF.
        assert!(text.chars().any(|c| ('\u{2801}'..='\u{28FF}').contains(&c)));
    }

    #[test]
    fn labels_are_printed_when_enabled() {
        let points: Vec<Point> = (0..12).map(|i| Point::new(i * 10, (i % 3) * 10)).collect();
        let mut figure = Figure::new();
        figure.scatter(&points);
        let mut app = App::new(figure, PlotConfig::default(), Summary::default());

        assert!(!screen(&app).contains("11"));
        app.toggle_labels();
        let text = screen(&app);
        assert!(text.contains("11"));
        assert!(text.contains("Labels: ON"));
    }
}
