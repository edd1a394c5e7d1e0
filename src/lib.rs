//! Routeplot - plot a closed route over a set of 2D points in the terminal.
//!
//! Routeplot reads integer `x y` points and a visiting order written as
//! `a -> b -> c`, then draws every point and the closed polyline through
//! them in a full-screen terminal window.
//!
//! # Features
//!
//! - Built-in sample dataset and route
//! - Explicit blank-line policy for point files
//! - Tour length reporting
//! - Exact brute force and branch-and-bound solvers for small inputs
//! - Gruvbox color themes
//!
//! # Example
//!
//! ```
//! use routeplot::data::{parse_points, parse_route, ParseOptions};
//! use routeplot::plot::{render, Figure};
//!
//! let points = parse_points("0 0\n4 0\n4 3", &ParseOptions::default())?;
//! let route = parse_route("0 -> 1 -> 2")?;
//!
//! let mut figure = Figure::new();
//! render(&mut figure, &points, &route)?;
//! assert_eq!(figure.segments().len(), 3);
//! # Ok::<(), routeplot::RoutePlotError>(())
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod config;
pub mod data;
pub mod display;
pub mod error;
pub mod plot;
pub mod prompt;
pub mod session;
pub mod tour;
pub mod ui;

pub use error::{Result, RoutePlotError};
