//! # tour-anneal
//!
//! Route optimization for the traveling-salesman problem: visit a set of 2D
//! points exactly once at minimum total travel distance, approximated by
//! greedy construction refined with simulated annealing over 2-opt moves.
//!
//! The crate is a pure, single-threaded library: point acquisition, argument
//! parsing, and rendering belong to external collaborators. It consumes a
//! validated point set and hands back labeled tours with their lengths.
//!
//! ## Modules
//!
//! - [`models`] — Domain types (Point, PointSet, Tour, TourError)
//! - [`distance`] — Dense Euclidean distance matrix, built once per session
//! - [`evaluation`] — Closed-tour and open-path length
//! - [`constructive`] — Initial tours (random baseline, greedy nearest neighbor)
//! - [`local_search`] — 2-opt segment reversal and deterministic descent
//! - [`annealing`] — Stochastic refinement under a cooling schedule
//! - [`report`] — Labeled tour aggregation for external presentation
//!
//! ## Example
//!
//! ```
//! use tour_anneal::models::PointSet;
//! use tour_anneal::distance::DistanceMatrix;
//! use tour_anneal::constructive::{nearest_neighbor_tour, random_tour};
//! use tour_anneal::annealing::{AnnealingConfig, AnnealingRunner};
//! use tour_anneal::report::TourReport;
//!
//! let points = PointSet::from_coords(&[
//!     (0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0), (5.0, 15.0),
//! ])?;
//! let distances = DistanceMatrix::from_points(&points);
//!
//! let mut rng = u_numflow::random::create_rng(42);
//! let random = random_tour(points.len(), &mut rng);
//! let greedy = nearest_neighbor_tour(&distances, 0);
//!
//! let config = AnnealingConfig::default().with_iterations(2_000).with_seed(42);
//! let annealed = AnnealingRunner::run(&greedy, &distances, &config);
//!
//! let mut report = TourReport::new();
//! report.push("Random", random, &distances);
//! report.push("Greedy", greedy, &distances);
//! report.push("Annealed", annealed.best, &distances);
//!
//! let greedy_len = report.get("Greedy").unwrap().length;
//! assert!(report.get("Annealed").unwrap().length <= greedy_len);
//! # Ok::<(), tour_anneal::models::TourError>(())
//! ```

pub mod annealing;
pub mod constructive;
pub mod distance;
pub mod evaluation;
pub mod local_search;
pub mod models;
pub mod report;
