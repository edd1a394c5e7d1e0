//! Point-text parsing.
//!
//! Blank lines are governed by [`BlankLinePolicy`]. The default,
//! `SkipTrailing`, departs from a strict one-pair-per-line reading so that
//! files ending in a newline parse; `Reject` restores the strict behavior.

use crate::error::{Result, RoutePlotError};
use std::fmt;

/// A 2D integer coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: i64,
    /// Vertical coordinate.
    pub y: i64,
}

impl Point {
    /// Create a new point.
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Point as floating-point canvas coordinates.
    pub fn as_f64(self) -> (f64, f64) {
        (self.x as f64, self.y as f64)
    }

    /// Euclidean distance to another point.
    pub fn distance(self, other: Point) -> f64 {
        // Widen first; the difference of two i64 values can overflow.
        let dx = self.x as f64 - other.x as f64;
        let dy = self.y as f64 - other.y as f64;
        dx.hypot(dy)
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// How the point parser treats blank (whitespace-only) lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlankLinePolicy {
    /// Every blank line is a parse failure, including a trailing one.
    Reject,
    /// Blank lines at the end of the text are ignored; any other blank line
    /// is a parse failure.
    #[default]
    SkipTrailing,
    /// Blank lines are ignored wherever they occur.
    SkipAll,
}

/// Options for [`parse_points`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ParseOptions {
    /// Blank line handling.
    pub blank_lines: BlankLinePolicy,
}

impl ParseOptions {
    /// Options with the given blank line policy.
    pub fn with_blank_lines(blank_lines: BlankLinePolicy) -> Self {
        Self { blank_lines }
    }
}

/// Parse one `x y` pair per line, preserving line order.
///
/// Lines are split on `\n`; each must hold exactly two whitespace-separated
/// integers. Blank lines are handled according to `options.blank_lines`.
/// The first malformed line aborts the parse.
pub fn parse_points(text: &str, options: &ParseOptions) -> Result<Vec<Point>> {
    let lines: Vec<&str> = text.split('\n').collect();

    // Index one past the last line carrying data.
    let data_end = lines
        .iter()
        .rposition(|l| !l.trim().is_empty())
        .map_or(0, |i| i + 1);

    let mut points = Vec::with_capacity(data_end);
    for (idx, line) in lines.iter().enumerate() {
        let line_no = idx + 1;

        if line.trim().is_empty() {
            let skip = match options.blank_lines {
                BlankLinePolicy::Reject => false,
                BlankLinePolicy::SkipTrailing => idx >= data_end,
                BlankLinePolicy::SkipAll => true,
            };
            if skip {
                continue;
            }
            return Err(RoutePlotError::point_parse(line_no, *line, "blank line"));
        }

        points.push(parse_line(line_no, line)?);
    }

    tracing::debug!("Parsed {} points", points.len());
    Ok(points)
}

fn parse_line(line_no: usize, line: &str) -> Result<Point> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != 2 {
        return Err(RoutePlotError::point_parse(
            line_no,
            line,
            format!("expected 2 values, found {}", tokens.len()),
        ));
    }

    let coord = |token: &str| {
        token
            .parse::<i64>()
            .map_err(|e| RoutePlotError::point_parse(line_no, line, format!("{token:?}: {e}")))
    };

    Ok(Point::new(coord(tokens[0])?, coord(tokens[1])?))
}
