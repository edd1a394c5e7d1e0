//! Route plot drawn on a ratatui canvas.

use crate::app::App;
use crate::ui::ThemeColors;
use ratatui::{
    layout::Rect,
    style::Style,
    text::Span,
    widgets::{
        canvas::{Canvas, Line, Points},
        Block, Borders,
    },
    Frame,
};

/// Draw the accumulated figure.
pub fn draw_plot(f: &mut Frame<'_>, area: Rect, app: &App, colors: &ThemeColors) {
    let figure = &app.figure;
    let (x_bounds, y_bounds) = figure.bounds(app.config.padding_factor);

    let coords: Vec<(f64, f64)> = figure
        .scatter_points()
        .iter()
        .map(|p| p.as_f64())
        .collect();

    let canvas = Canvas::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.border))
                .title(format!(" {} ", app.config.title))
                .title_style(Style::default().fg(colors.heading)),
        )
        .background_color(colors.bg)
        .marker(app.config.marker)
        .x_bounds(x_bounds)
        .y_bounds(y_bounds)
        .paint(|ctx| {
            for segment in figure.segments() {
                let (x1, y1) = segment.from.as_f64();
                let (x2, y2) = segment.to.as_f64();
                ctx.draw(&Line {
                    x1,
                    y1,
                    x2,
                    y2,
                    color: colors.route,
                });
            }

            // Marks sit above the route.
            ctx.layer();
            ctx.draw(&Points {
                coords: &coords,
                color: colors.point,
            });

            if app.config.show_labels {
                for (i, &(x, y)) in coords.iter().enumerate() {
                    ctx.print(
                        x,
                        y,
                        Span::styled(i.to_string(), Style::default().fg(colors.label)),
                    );
                }
            }
        });

    f.render_widget(canvas, area);
}
