//! Tour length evaluation.

use crate::distance::DistanceMatrix;
use crate::models::Tour;

/// Total length of a tour as a closed loop.
///
/// Sums the distance of every consecutive pair in visiting order, plus the
/// closing edge from the last point back to the first. This is the form the
/// optimizer and the reporter use everywhere: the system always compares
/// closed tours.
///
/// # Examples
///
/// ```
/// use tour_anneal::models::{PointSet, Tour};
/// use tour_anneal::distance::DistanceMatrix;
/// use tour_anneal::evaluation::closed_tour_length;
///
/// let ps = PointSet::from_coords(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]).unwrap();
/// let dm = DistanceMatrix::from_points(&ps);
/// let tour = Tour::identity(4);
/// assert!((closed_tour_length(&tour, &dm) - 40.0).abs() < 1e-10);
/// ```
pub fn closed_tour_length(tour: &Tour, distances: &DistanceMatrix) -> f64 {
    match tour.order() {
        [] | [_] => 0.0,
        [first, .., last] => open_path_length(tour, distances) + distances.get(*last, *first),
    }
}

/// Length of a tour as an open path, without the closing edge.
///
/// Diagnostic partial-path measurement; the optimizer never uses it. For a
/// single-point tour the result is exactly 0.
pub fn open_path_length(tour: &Tour, distances: &DistanceMatrix) -> f64 {
    tour.order()
        .windows(2)
        .map(|w| distances.get(w[0], w[1]))
        .sum()
}
