//! Route comparison report for external presentation.
//!
//! - [`TourReport`] — ordered label → (tour, length) aggregation
//! - [`ReportEntry`] — one labeled tour with its closed length

mod tour_report;

pub use tour_report::{ReportEntry, TourReport};
