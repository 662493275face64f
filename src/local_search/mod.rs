//! Local search operators over closed tours.
//!
//! - [`reverse_segment`] — Pure 2-opt segment reversal, the annealing move
//! - [`two_opt_delta`] — O(1) length change of a reversal
//! - [`two_opt_improve`] — Deterministic first-improvement 2-opt descent

mod two_opt;

pub use two_opt::{reverse_segment, two_opt_delta, two_opt_improve};
