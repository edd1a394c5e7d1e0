//! Tour length and exact tour solvers.
//!
//! Both solvers fix point 0 as the start and enumerate orderings of the
//! remaining points by swapping in place.

use crate::data::{Point, Route};
use crate::error::{Result, RoutePlotError};

/// Largest point set the exact solvers accept.
pub const MAX_SOLVER_POINTS: usize = 11;

/// Exact solving strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveMethod {
    /// Try every ordering.
    BruteForce,
    /// Try orderings, abandoning partial tours that cannot win.
    BranchAndBound,
}

impl SolveMethod {
    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::BruteForce => "Brute Force",
            Self::BranchAndBound => "Branch and Bound",
        }
    }
}

/// Length of the closed route, closing edge included.
pub fn tour_length(points: &[Point], route: &Route) -> Result<f64> {
    let order = route.resolve(points.len())?;
    Ok(closed_length(points, &order))
}

fn closed_length(points: &[Point], order: &[usize]) -> f64 {
    let open: f64 = order
        .windows(2)
        .map(|w| points[w[0]].distance(points[w[1]]))
        .sum();
    let closing = match (order.first(), order.last()) {
        (Some(&first), Some(&last)) => points[last].distance(points[first]),
        _ => 0.0,
    };
    open + closing
}

/// Compute a shortest closed tour through every point, starting at 0.
pub fn solve(points: &[Point], method: SolveMethod) -> Result<Route> {
    if points.is_empty() {
        return Err(RoutePlotError::EmptyRoute);
    }
    if points.len() > MAX_SOLVER_POINTS {
        return Err(RoutePlotError::TooManyPoints {
            count: points.len(),
            max: MAX_SOLVER_POINTS,
        });
    }

    let mut search = Search::new(points);
    match method {
        SolveMethod::BruteForce => search.permute(1),
        SolveMethod::BranchAndBound => search.branch(1, 0.0),
    }

    tracing::info!(
        "{} found tour of length {:.3} after {} complete tours",
        method.name(),
        search.best_length,
        search.completed
    );
    Ok(Route::from(search.best))
}

struct Search<'a> {
    points: &'a [Point],
    current: Vec<usize>,
    best: Vec<usize>,
    best_length: f64,
    completed: u64,
}

impl<'a> Search<'a> {
    fn new(points: &'a [Point]) -> Self {
        let current: Vec<usize> = (0..points.len()).collect();
        Self {
            points,
            best: current.clone(),
            current,
            best_length: f64::INFINITY,
            completed: 0,
        }
    }

    fn dist(&self, a: usize, b: usize) -> f64 {
        self.points[self.current[a]].distance(self.points[self.current[b]])
    }

    fn record(&mut self, length: f64) {
        self.completed += 1;
        if length < self.best_length {
            self.best_length = length;
            self.best.copy_from_slice(&self.current);
        }
    }

    fn permute(&mut self, level: usize) {
        let n = self.current.len();
        if level == n {
            let length = closed_length(self.points, &self.current);
            self.record(length);
            return;
        }
        for i in level..n {
            self.current.swap(level, i);
            self.permute(level + 1);
            self.current.swap(level, i);
        }
    }

    /// `partial` is the open path length through `current[..level]`.
    fn branch(&mut self, level: usize, partial: f64) {
        let n = self.current.len();
        if level == n {
            let length = partial + self.dist(n - 1, 0);
            self.record(length);
            return;
        }
        for i in level..n {
            self.current.swap(level, i);
            let extended = partial + self.dist(level - 1, level);
            if extended < self.best_length {
                self.branch(level + 1, extended);
            }
            self.current.swap(level, i);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(coords: &[(i64, i64)]) -> Vec<Point> {
        coords.iter().copied().map(Point::from).collect()
    }

    #[test]
    fn length_includes_closing_edge() {
        let points = pts(&[(0, 0), (3, 0), (3, 4)]);
        let length = tour_length(&points, &Route::new(vec![0, 1, 2])).unwrap();
        assert_eq!(length, 12.0);
    }

    #[test]
    fn single_entry_length_is_zero() {
        let points = pts(&[(5, 5)]);
        assert_eq!(tour_length(&points, &Route::new(vec![0])).unwrap(), 0.0);
    }

    #[test]
    fn length_of_extreme_coordinates_is_finite() {
        let points = pts(&[(i64::MAX, 0), (i64::MIN, 0)]);
        let length = tour_length(&points, &Route::new(vec![0, 1])).unwrap();
        assert!(length.is_finite());
        assert!(length > 3.0e19);
    }

    #[test]
    fn length_validates_indices() {
        let points = pts(&[(0, 0)]);
        assert!(tour_length(&points, &Route::new(vec![0, 1])).is_err());
    }

    #[test]
    fn solvers_untangle_a_square() {
        // Listed so that 0 -> 1 -> 2 -> 3 crosses itself.
        let points = pts(&[(0, 0), (10, 10), (10, 0), (0, 10)]);
        for method in [SolveMethod::BruteForce, SolveMethod::BranchAndBound] {
            let route = solve(&points, method).unwrap();
            assert_eq!(route.indices()[0], 0);
            assert_eq!(route.len(), 4);
            assert_eq!(tour_length(&points, &route).unwrap(), 40.0);
        }
    }

    #[test]
    fn solvers_agree_on_optimal_length() {
        let points = pts(&[
            (-3138, -2512),
            (6804, -1072),
            (-193, 8782),
            (-5168, 2636),
            (-8022, -3864),
            (4244, -1339),
            (-192, 3337),
        ]);
        let brute = solve(&points, SolveMethod::BruteForce).unwrap();
        let bnb = solve(&points, SolveMethod::BranchAndBound).unwrap();

        let a = tour_length(&points, &brute).unwrap();
        let b = tour_length(&points, &bnb).unwrap();
        assert!((a - b).abs() < 1e-6);

        let mut visited = brute.indices().to_vec();
        visited.sort_unstable();
        assert_eq!(visited, (0..points.len() as i64).collect::<Vec<_>>());
    }

    #[test]
    fn trivial_and_oversized_inputs() {
        assert_eq!(
            solve(&pts(&[(1, 1)]), SolveMethod::BruteForce).unwrap().indices(),
            &[0]
        );
        assert!(matches!(
            solve(&[], SolveMethod::BranchAndBound),
            Err(RoutePlotError::EmptyRoute)
        ));

        let many: Vec<Point> = (0..=MAX_SOLVER_POINTS as i64).map(|i| Point::new(i, i)).collect();
        assert!(matches!(
            solve(&many, SolveMethod::BruteForce),
            Err(RoutePlotError::TooManyPoints { count: 12, max: 11 })
        ));
    }
}
