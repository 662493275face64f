//! 2-opt segment reversal for closed tours.
//!
//! # Algorithm
//!
//! Reversing the positions `i..=k` of a tour removes the two edges entering
//! and leaving that segment and reconnects the loop with their crossed
//! counterparts:
//!
//! ```text
//! delta = d(r[i-1], r[k]) + d(r[i], r[k+1]) - d(r[i-1], r[i]) - d(r[k], r[k+1])
//! ```
//!
//! (indices mod n, so `k = n-1` reconnects to `r[0]`). A negative delta
//! means the reversal shortens the closed tour.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use crate::distance::DistanceMatrix;
use crate::evaluation::closed_tour_length;
use crate::models::Tour;

/// Returns a new tour with the positions `i..=k` reversed.
///
/// This is the sole move type the annealing optimizer uses. The operator is
/// pure: the input tour is untouched, so the caller keeps the original for
/// comparison or rollback. Applying the same `(i, k)` twice returns the
/// original tour.
///
/// # Panics
///
/// Panics unless `i < k < tour.len()`.
///
/// # Examples
///
/// ```
/// use tour_anneal::models::Tour;
/// use tour_anneal::local_search::reverse_segment;
///
/// let tour = Tour::identity(5);
/// let moved = reverse_segment(&tour, 1, 3);
/// assert_eq!(moved.order(), &[0, 3, 2, 1, 4]);
/// assert_eq!(reverse_segment(&moved, 1, 3), tour);
/// ```
pub fn reverse_segment(tour: &Tour, i: usize, k: usize) -> Tour {
    assert!(
        i < k && k < tour.len(),
        "segment bounds ({i}, {k}) invalid for tour of length {}",
        tour.len()
    );
    let mut order = tour.order().to_vec();
    order[i..=k].reverse();
    Tour::from_order_unchecked(order)
}

/// Length change of the closed tour from reversing positions `i..=k`.
///
/// Only the two broken and reconnected edges contribute, so this is O(1)
/// where a full recomputation is O(n). Position 0 must stay outside the
/// segment so the edge into the segment is well defined.
///
/// # Panics
///
/// Panics unless `0 < i < k < tour.len()`.
pub fn two_opt_delta(tour: &Tour, distances: &DistanceMatrix, i: usize, k: usize) -> f64 {
    let order = tour.order();
    let n = order.len();
    assert!(
        0 < i && i < k && k < n,
        "segment bounds ({i}, {k}) invalid for tour of length {n}"
    );

    let prev = order[i - 1];
    let next = order[(k + 1) % n];

    let old_cost = distances.get(prev, order[i]) + distances.get(order[k], next);
    let new_cost = distances.get(prev, order[k]) + distances.get(order[i], next);

    new_cost - old_cost
}

/// Applies first-improvement 2-opt descent until no reversal shortens the
/// closed tour.
///
/// Deterministic counterpart to the annealing optimizer: it lands in the
/// nearest 2-opt local optimum instead of escaping it. Returns the improved
/// tour and its closed length. Tours with fewer than 4 points have no
/// non-trivial reversal and are returned unchanged.
pub fn two_opt_improve(tour: &Tour, distances: &DistanceMatrix) -> (Tour, f64) {
    let n = tour.len();
    if n < 4 {
        return (tour.clone(), closed_tour_length(tour, distances));
    }

    let mut current = tour.clone();
    let mut improved = true;

    while improved {
        improved = false;
        for i in 1..n - 1 {
            for k in i + 1..n {
                if two_opt_delta(&current, distances, i, k) < -1e-10 {
                    current = reverse_segment(&current, i, k);
                    improved = true;
                }
            }
        }
    }

    let length = closed_tour_length(&current, distances);
    (current, length)
}
