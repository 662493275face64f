//! Annealing execution loop.

use rand::Rng;
use u_numflow::random::create_rng;

use super::config::AnnealingConfig;
use crate::distance::DistanceMatrix;
use crate::evaluation::closed_tour_length;
use crate::local_search::reverse_segment;
use crate::models::Tour;

/// Temperature never decays below this floor, keeping acceptance
/// probabilities numerically defined for the remaining iterations.
const TEMPERATURE_FLOOR: f64 = 1e-6;

/// Result of a simulated-annealing run.
#[derive(Debug, Clone)]
pub struct AnnealingResult {
    /// The best tour seen across the whole run. Not necessarily the final
    /// current tour: later iterations may have wandered uphill.
    pub best: Tour,

    /// Closed length of the best tour.
    pub best_length: f64,

    /// Number of iterations executed.
    pub iterations: usize,

    /// Temperature when the run stopped.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of improving moves.
    pub improving_moves: usize,

    /// `true` if the tour was too small for a 2-opt neighborhood and the
    /// seed was returned unchanged.
    pub degenerate: bool,
}

/// Executes simulated annealing over 2-opt segment reversals.
pub struct AnnealingRunner;

impl AnnealingRunner {
    /// Refines a seed tour under the given configuration.
    ///
    /// Each iteration proposes a 2-opt reversal of a uniformly drawn
    /// segment that leaves the first and last positions fixed, evaluates
    /// the candidate's closed length from scratch, and accepts it by the
    /// Metropolis criterion: always when shorter, otherwise with
    /// probability `exp(-delta / T)`. The temperature decays by
    /// `cooling_rate` every iteration, clamped at a small floor, and the
    /// run ends when the iteration budget is exhausted.
    ///
    /// Tours with fewer than 4 points have a degenerate 2-opt neighborhood
    /// (no two interior edges to swap); the seed is returned unchanged and
    /// the result is flagged [`degenerate`](AnnealingResult::degenerate).
    ///
    /// The random stream is created inside the run and never shared, so two
    /// runs with identical parameters and the same `Some` seed produce
    /// identical output tours.
    ///
    /// # Panics
    ///
    /// Panics if the config fails validation or if the seed tour references
    /// points outside the matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// use tour_anneal::models::PointSet;
    /// use tour_anneal::distance::DistanceMatrix;
    /// use tour_anneal::constructive::nearest_neighbor_tour;
    /// use tour_anneal::annealing::{AnnealingConfig, AnnealingRunner};
    ///
    /// let ps = PointSet::from_coords(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]).unwrap();
    /// let dm = DistanceMatrix::from_points(&ps);
    /// let seed = nearest_neighbor_tour(&dm, 0);
    ///
    /// let config = AnnealingConfig::default().with_iterations(500).with_seed(42);
    /// let result = AnnealingRunner::run(&seed, &dm, &config);
    /// assert!((result.best_length - 40.0).abs() < 1e-10);
    /// ```
    pub fn run(seed: &Tour, distances: &DistanceMatrix, config: &AnnealingConfig) -> AnnealingResult {
        config.validate().expect("invalid AnnealingConfig");

        let n = seed.len();
        let initial_length = closed_tour_length(seed, distances);

        if n < 4 {
            return AnnealingResult {
                best: seed.clone(),
                best_length: initial_length,
                iterations: 0,
                final_temperature: config.initial_temperature,
                accepted_moves: 0,
                improving_moves: 0,
                degenerate: true,
            };
        }

        let mut rng = match config.seed {
            Some(s) => create_rng(s),
            None => create_rng(rand::random()),
        };

        let mut current = seed.clone();
        let mut current_length = initial_length;
        let mut best = current.clone();
        let mut best_length = current_length;

        let mut temperature = config.initial_temperature;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;

        for _ in 0..config.iterations {
            // Segment bounds never touch position 0 or n-1, preserving a
            // stable reference point across moves.
            let i = rng.random_range(1..n - 2);
            let k = rng.random_range(i + 1..n - 1);

            let candidate = reverse_segment(&current, i, k);
            let candidate_length = closed_tour_length(&candidate, distances);
            let delta = candidate_length - current_length;

            // Metropolis acceptance criterion
            let accept = if delta < 0.0 {
                improving_moves += 1;
                true
            } else {
                let probability = (-delta / temperature.max(1e-12)).exp();
                rng.random_range(0.0..1.0) < probability
            };

            if accept {
                current = candidate;
                current_length = candidate_length;
                accepted_moves += 1;

                if current_length < best_length {
                    best = current.clone();
                    best_length = current_length;
                }
            }

            temperature = (temperature * config.cooling_rate).max(TEMPERATURE_FLOOR);
        }

        AnnealingResult {
            best,
            best_length,
            iterations: config.iterations,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
            degenerate: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constructive::{nearest_neighbor_tour, random_tour};
    use crate::models::PointSet;

    fn square() -> DistanceMatrix {
        let ps = PointSet::from_coords(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)])
            .expect("valid");
        DistanceMatrix::from_points(&ps)
    }

    fn scattered(n: usize) -> DistanceMatrix {
        // Deterministic pseudo-grid scatter, no RNG needed.
        let coords: Vec<(f64, f64)> = (0..n)
            .map(|i| {
                let x = ((i * 37) % 100) as f64;
                let y = ((i * 61) % 100) as f64;
                (x, y)
            })
            .collect();
        let ps = PointSet::from_coords(&coords).expect("valid");
        DistanceMatrix::from_points(&ps)
    }

    #[test]
    fn test_zero_iterations_returns_seed() {
        let dm = square();
        let seed = Tour::new(vec![0, 2, 1, 3]).expect("valid");
        let config = AnnealingConfig::default().with_iterations(0).with_seed(42);
        let result = AnnealingRunner::run(&seed, &dm, &config);
        assert_eq!(result.best, seed);
        assert!((result.best_length - closed_tour_length(&seed, &dm)).abs() < 1e-12);
        assert_eq!(result.accepted_moves, 0);
        assert!(!result.degenerate);
    }

    #[test]
    fn test_degenerate_tour_returned_unchanged() {
        let ps = PointSet::from_coords(&[(0.0, 0.0), (5.0, 0.0), (0.0, 5.0)]).expect("valid");
        let dm = DistanceMatrix::from_points(&ps);
        let seed = Tour::identity(3);
        let config = AnnealingConfig::default().with_iterations(10_000).with_seed(42);
        let result = AnnealingRunner::run(&seed, &dm, &config);
        assert_eq!(result.best, seed);
        assert_eq!(result.iterations, 0);
        assert!(result.degenerate);
    }

    #[test]
    fn test_uncrosses_square() {
        // For n = 4 the only drawable move is reversing positions [1..=2],
        // which uncrosses [0, 2, 1, 3] into the perimeter tour. Any random
        // stream finds it on the first improving draw.
        let dm = square();
        let crossed = Tour::new(vec![0, 2, 1, 3]).expect("valid");
        let config = AnnealingConfig::default().with_iterations(50).with_seed(1);
        let result = AnnealingRunner::run(&crossed, &dm, &config);
        assert!((result.best_length - 40.0).abs() < 1e-10);
        assert!(result.improving_moves >= 1);
    }

    #[test]
    fn test_best_never_worse_than_seed() {
        let dm = scattered(25);
        let mut rng = u_numflow::random::create_rng(9);
        let seed = random_tour(25, &mut rng);
        let seed_length = closed_tour_length(&seed, &dm);
        let config = AnnealingConfig::default().with_iterations(2_000).with_seed(3);
        let result = AnnealingRunner::run(&seed, &dm, &config);
        assert!(result.best_length <= seed_length + 1e-10);
    }

    #[test]
    fn test_improves_on_nearest_neighbor_seed() {
        let dm = scattered(30);
        let seed = nearest_neighbor_tour(&dm, 0);
        let seed_length = closed_tour_length(&seed, &dm);
        let config = AnnealingConfig::default().with_iterations(5_000).with_seed(42);
        let result = AnnealingRunner::run(&seed, &dm, &config);
        assert!(result.best_length <= seed_length + 1e-10);
        // The result is still a permutation.
        let mut sorted = result.best.order().to_vec();
        sorted.sort();
        assert_eq!(sorted, (0..30).collect::<Vec<_>>());
    }

    #[test]
    fn test_deterministic_with_same_seed() {
        let dm = scattered(20);
        let seed = nearest_neighbor_tour(&dm, 0);
        let config = AnnealingConfig::default().with_iterations(3_000).with_seed(77);
        let a = AnnealingRunner::run(&seed, &dm, &config);
        let b = AnnealingRunner::run(&seed, &dm, &config);
        assert_eq!(a.best, b.best);
        assert_eq!(a.best_length, b.best_length);
        assert_eq!(a.accepted_moves, b.accepted_moves);
        assert_eq!(a.improving_moves, b.improving_moves);
    }

    #[test]
    fn test_move_counters_coherent() {
        let dm = scattered(15);
        let seed = nearest_neighbor_tour(&dm, 0);
        let config = AnnealingConfig::default().with_iterations(1_000).with_seed(5);
        let result = AnnealingRunner::run(&seed, &dm, &config);
        assert!(result.improving_moves <= result.accepted_moves);
        assert!(result.accepted_moves <= result.iterations);
        assert_eq!(result.iterations, 1_000);
    }

    #[test]
    fn test_temperature_clamped_at_floor() {
        let dm = scattered(10);
        let seed = nearest_neighbor_tour(&dm, 0);
        // 0.5^50_000 underflows far past the floor without the clamp.
        let config = AnnealingConfig::default()
            .with_cooling_rate(0.5)
            .with_iterations(50_000)
            .with_seed(2);
        let result = AnnealingRunner::run(&seed, &dm, &config);
        assert!(result.final_temperature >= TEMPERATURE_FLOOR);
    }

    #[test]
    #[should_panic(expected = "invalid AnnealingConfig")]
    fn test_invalid_config_panics() {
        let dm = square();
        let seed = Tour::identity(4);
        let config = AnnealingConfig::default().with_cooling_rate(2.0);
        AnnealingRunner::run(&seed, &dm, &config);
    }
}
