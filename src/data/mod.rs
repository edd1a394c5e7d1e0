//! Input data and parsing.
//!
//! This module turns raw text into points and routes, and decides where the
//! point text comes from.

mod points;
mod route;
mod source;

pub use points::{parse_points, BlankLinePolicy, ParseOptions, Point};
pub use route::{parse_route, Route, ROUTE_DELIMITER};
pub use source::{PointSource, DEFAULT_POINTS, DEFAULT_ROUTE};
