//! Random permutation baseline.

use rand::Rng;

use crate::models::Tour;

/// Builds a uniformly shuffled tour over `n` points.
///
/// Purely a diagnostic baseline: it establishes an upper bound for
/// comparison against the constructive and annealed tours and is never
/// itself refined.
///
/// # Examples
///
/// ```
/// use tour_anneal::constructive::random_tour;
///
/// let mut rng = u_numflow::random::create_rng(42);
/// let tour = random_tour(5, &mut rng);
/// assert_eq!(tour.len(), 5);
/// ```
pub fn random_tour<R: Rng>(n: usize, rng: &mut R) -> Tour {
    let mut order: Vec<usize> = (0..n).collect();
    u_numflow::random::shuffle(&mut order, rng);
    Tour::from_order_unchecked(order)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_tour_is_permutation() {
        let mut rng = u_numflow::random::create_rng(42);
        let tour = random_tour(20, &mut rng);
        let mut sorted = tour.order().to_vec();
        sorted.sort();
        assert_eq!(sorted, (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn test_random_tour_deterministic_per_seed() {
        let mut a = u_numflow::random::create_rng(7);
        let mut b = u_numflow::random::create_rng(7);
        assert_eq!(random_tour(15, &mut a), random_tour(15, &mut b));
    }

    #[test]
    fn test_random_tour_empty() {
        let mut rng = u_numflow::random::create_rng(42);
        assert!(random_tour(0, &mut rng).is_empty());
    }
}
