//! Blocking plot window.
//!
//! Takes over the terminal, draws the figure and waits for the user to
//! close it. The terminal is restored however the loop ends.

use crate::app::{Action, App};
use crate::error::{Result, RoutePlotError};
use crate::ui;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;
use std::time::Duration;

/// Show the plot until the user presses `q` or `Esc`.
pub fn show(mut app: App) -> Result<()> {
    enable_raw_mode().map_err(|e| RoutePlotError::Terminal(e.to_string()))?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(RoutePlotError::Terminal(e.to_string()));
    }

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = match Terminal::new(backend) {
        Ok(t) => t,
        Err(e) => {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            return Err(RoutePlotError::Terminal(e.to_string()));
        }
    };

    tracing::info!("Plot window opened");
    let res = run_loop(&mut terminal, &mut app);

    // Restore terminal; every step runs even if an earlier one fails.
    let raw = disable_raw_mode();
    let screen = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let cursor = terminal.show_cursor();

    tracing::info!("Plot window closed");
    finish(res, [raw, screen, cursor])
}

/// The event loop's outcome wins over any restore failure.
fn finish(res: Result<()>, restore: [io::Result<()>; 3]) -> Result<()> {
    res?;
    for step in restore {
        step?;
    }
    Ok(())
}

fn run_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if app.handle_key(key) == Action::Quit {
                    return Ok(());
                }
            }
        }
    }
}
