//! Route-text parsing.

use crate::error::{Result, RoutePlotError};
use std::fmt;

/// Separator between route indices.
pub const ROUTE_DELIMITER: &str = " -> ";

/// An ordered visiting sequence of point indices.
///
/// Indices are not checked against any point set here; negative or too
/// large values are rejected when the route is drawn or measured.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Route {
    indices: Vec<i64>,
}

impl Route {
    /// Create a route from raw indices.
    pub fn new(indices: Vec<i64>) -> Self {
        Self { indices }
    }

    /// The indices in visiting order.
    pub fn indices(&self) -> &[i64] {
        &self.indices
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Whether the route has no entries.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Resolve every entry against `len` points.
    ///
    /// Fails on the first entry that is not a valid index, so callers can
    /// check the whole route before drawing anything.
    pub fn resolve(&self, len: usize) -> Result<Vec<usize>> {
        if self.indices.is_empty() {
            return Err(RoutePlotError::EmptyRoute);
        }

        self.indices
            .iter()
            .enumerate()
            .map(|(position, &index)| {
                usize::try_from(index)
                    .ok()
                    .filter(|&i| i < len)
                    .ok_or(RoutePlotError::IndexOutOfRange {
                        position,
                        index,
                        len,
                    })
            })
            .collect()
    }
}

impl From<Vec<usize>> for Route {
    fn from(indices: Vec<usize>) -> Self {
        Self::new(indices.into_iter().map(|i| i as i64).collect())
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, index) in self.indices.iter().enumerate() {
            if i > 0 {
                f.write_str(ROUTE_DELIMITER)?;
            }
            write!(f, "{index}")?;
        }
        Ok(())
    }
}

/// Parse `a -> b -> c` into a route, preserving order.
///
/// Whitespace around each token is ignored, so a trailing newline is fine.
/// Any token that is not an integer (an empty one included) fails the parse.
pub fn parse_route(text: &str) -> Result<Route> {
    let indices = text
        .split(ROUTE_DELIMITER)
        .enumerate()
        .map(|(position, token)| {
            token
                .trim()
                .parse::<i64>()
                .map_err(|_| RoutePlotError::route_parse(position, token))
        })
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!("Parsed route with {} entries", indices.len());
    Ok(Route::new(indices))
}
