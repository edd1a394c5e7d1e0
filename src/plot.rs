//! Figure accumulation and route rendering.
//!
//! A [`Figure`] collects drawable primitives. [`render`] fills it from a
//! point set and a route; the display layer draws it in one pass.

use crate::data::{Point, Route};
use crate::error::Result;

/// A straight line between two points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    /// Start point.
    pub from: Point,
    /// End point.
    pub to: Point,
}

impl Segment {
    /// Segment length.
    pub fn length(&self) -> f64 {
        self.from.distance(self.to)
    }

    /// Whether both ends coincide.
    pub fn is_degenerate(&self) -> bool {
        self.from == self.to
    }
}

/// Accumulated drawable state for one display pass.
#[derive(Debug, Clone, Default)]
pub struct Figure {
    scatter: Vec<Point>,
    segments: Vec<Segment>,
}

impl Figure {
    /// Create an empty figure.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a scatter mark for every point.
    pub fn scatter(&mut self, points: &[Point]) {
        self.scatter.extend_from_slice(points);
    }

    /// Add a line segment.
    pub fn line(&mut self, from: Point, to: Point) {
        self.segments.push(Segment { from, to });
    }

    /// Scatter marks in insertion order.
    pub fn scatter_points(&self) -> &[Point] {
        &self.scatter
    }

    /// Segments in insertion order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Whether nothing has been drawn.
    pub fn is_empty(&self) -> bool {
        self.scatter.is_empty() && self.segments.is_empty()
    }

    /// Padded `(x_bounds, y_bounds)` covering every primitive.
    ///
    /// A zero span on either axis is widened to one unit so the canvas
    /// always has a usable area.
    pub fn bounds(&self, padding_factor: f64) -> ([f64; 2], [f64; 2]) {
        let coords = self
            .scatter
            .iter()
            .copied()
            .chain(self.segments.iter().flat_map(|s| [s.from, s.to]))
            .map(Point::as_f64);

        let mut x = [f64::INFINITY, f64::NEG_INFINITY];
        let mut y = [f64::INFINITY, f64::NEG_INFINITY];
        for (px, py) in coords {
            x = [x[0].min(px), x[1].max(px)];
            y = [y[0].min(py), y[1].max(py)];
        }

        (pad_axis(x, padding_factor), pad_axis(y, padding_factor))
    }
}

fn pad_axis([min, max]: [f64; 2], factor: f64) -> [f64; 2] {
    if min > max {
        return [-1.0, 1.0];
    }
    let span = max - min;
    let pad = if span == 0.0 { 1.0 } else { span * factor };
    [min - pad, max + pad]
}

/// Draw `points` and the closed `route` through them onto `figure`.
///
/// Every point gets a scatter mark, consecutive route entries get a
/// segment, and one closing segment joins the last entry to the first.
/// The route is fully validated before anything is added, so a failure
/// leaves the figure unchanged.
pub fn render(figure: &mut Figure, points: &[Point], route: &Route) -> Result<()> {
    let order = route.resolve(points.len())?;

    figure.scatter(points);

    for pair in order.windows(2) {
        figure.line(points[pair[0]], points[pair[1]]);
    }

    // A one-entry route closes onto itself.
    if let (Some(&first), Some(&last)) = (order.first(), order.last()) {
        figure.line(points[last], points[first]);
    }

    tracing::info!(
        "Rendered {} points and {} segments",
        points.len(),
        order.len()
    );
    Ok(())
}
