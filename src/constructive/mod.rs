//! Constructive heuristics for building initial tours.
//!
//! - [`random_tour`] — Uniformly shuffled permutation, diagnostic baseline
//! - [`nearest_neighbor_tour`] — Greedy nearest-neighbor, O(n²), the default
//!   annealing seed

mod nearest_neighbor;
mod random;

pub use nearest_neighbor::nearest_neighbor_tour;
pub use random::random_tour;
