//! Tour cost evaluation.
//!
//! - [`closed_tour_length`] — consecutive edges plus the closing edge (the
//!   form used for all comparison and optimization)
//! - [`open_path_length`] — diagnostic partial-path measurement

mod evaluator;

pub use evaluator::{closed_tour_length, open_path_length};
