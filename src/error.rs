//! Error types for routeplot.
//!
//! This module provides a unified error handling approach using `thiserror`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for routeplot operations.
pub type Result<T> = std::result::Result<T, RoutePlotError>;

/// Errors that can occur while loading, parsing or plotting a route.
#[derive(Debug, Error)]
pub enum RoutePlotError {
    /// Failed to open or read a points file.
    #[error("Failed to read points file: {path}")]
    FileOpen {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A line of point text is not two whitespace-separated integers.
    #[error("Invalid point on line {line} ({content:?}): {reason}")]
    PointParse {
        /// 1-based line number in the original text.
        line: usize,
        /// Offending line content.
        content: String,
        /// What was wrong with it.
        reason: String,
    },

    /// A route token is not an integer.
    #[error("Invalid route entry at position {position}: {token:?}")]
    RouteParse {
        /// 0-based token position.
        position: usize,
        /// Offending token.
        token: String,
    },

    /// A route index does not name a parsed point.
    #[error("Route entry {position} refers to point {index}, but only {len} points exist")]
    IndexOutOfRange {
        /// 0-based position within the route.
        position: usize,
        /// Requested point index.
        index: i64,
        /// Number of points available.
        len: usize,
    },

    /// A route with no entries cannot be drawn.
    #[error("Route is empty")]
    EmptyRoute,

    /// The exact solvers refuse large inputs.
    #[error("Cannot solve a tour over {count} points (limit is {max})")]
    TooManyPoints {
        /// Number of points given.
        count: usize,
        /// Solver limit.
        max: usize,
    },

    /// Terminal error.
    #[error("Terminal error: {0}")]
    Terminal(String),
}

impl RoutePlotError {
    /// Create a FileOpen error.
    pub fn file_open(path: PathBuf, source: std::io::Error) -> Self {
        Self::FileOpen { path, source }
    }

    /// Create a PointParse error.
    pub fn point_parse(line: usize, content: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::PointParse {
            line,
            content: content.into(),
            reason: reason.into(),
        }
    }

    /// Create a RouteParse error.
    pub fn route_parse(position: usize, token: impl Into<String>) -> Self {
        Self::RouteParse {
            position,
            token: token.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_input() {
        let err = RoutePlotError::point_parse(3, "1 x", "invalid digit");
        assert_eq!(
            err.to_string(),
            "Invalid point on line 3 (\"1 x\"): invalid digit"
        );

        let err = RoutePlotError::IndexOutOfRange {
            position: 2,
            index: 14,
            len: 14,
        };
        assert!(err.to_string().contains("point 14"));
    }
}
