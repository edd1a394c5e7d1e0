//! Plot viewer state and key handling.

use crate::config::PlotConfig;
use crate::plot::Figure;
use crate::session::Summary;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Gruvbox dark theme.
    GruvboxDark,
    /// Gruvbox light theme.
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Keep showing the plot.
    Continue,
    /// Close the window.
    Quit,
}

/// Viewer state.
#[derive(Debug)]
pub struct App {
    /// Figure being displayed.
    pub figure: Figure,
    /// Plot configuration.
    pub config: PlotConfig,
    /// Facts about the loaded route.
    pub summary: Summary,
    /// Status message.
    pub status: String,
    /// Current theme.
    pub theme: Theme,
}

impl App {
    /// Create a viewer for a rendered figure.
    pub fn new(figure: Figure, config: PlotConfig, summary: Summary) -> Self {
        Self {
            figure,
            config,
            summary,
            status: "Ready".to_string(),
            theme: Theme::GruvboxDark,
        }
    }

    /// Handle one key press.
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        match (key.modifiers, key.code) {
            (KeyModifiers::NONE, KeyCode::Char('q')) | (KeyModifiers::NONE, KeyCode::Esc) => {
                return Action::Quit;
            }
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => return Action::Quit,
            (KeyModifiers::NONE, KeyCode::Char('i')) => self.toggle_labels(),
            (KeyModifiers::SHIFT, KeyCode::Char('T')) | (KeyModifiers::NONE, KeyCode::Char('T')) => {
                self.cycle_theme();
            }
            _ => {}
        }
        Action::Continue
    }

    /// Toggle point index labels.
    pub fn toggle_labels(&mut self) {
        self.config.show_labels = !self.config.show_labels;
        self.status = if self.config.show_labels {
            "Labels: ON".to_string()
        } else {
            "Labels: OFF".to_string()
        };
    }

    /// Cycle to the next theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = format!("Theme: {}", self.theme.name());
    }
}
