//! Simulated annealing over 2-opt moves.
//!
//! A single-solution trajectory metaheuristic: starting from a seed tour,
//! repeatedly propose a 2-opt segment reversal and accept it by the
//! Metropolis criterion under a geometrically cooling temperature. Worsening
//! moves are accepted with decaying probability, letting the search escape
//! the local optima that trap deterministic 2-opt descent.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod config;
mod runner;

pub use config::AnnealingConfig;
pub use runner::{AnnealingResult, AnnealingRunner};
