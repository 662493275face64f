//! Labeled tour aggregation.

use serde::Serialize;

use crate::distance::DistanceMatrix;
use crate::evaluation::closed_tour_length;
use crate::models::Tour;

/// A labeled tour with its closed length.
#[derive(Debug, Clone, Serialize)]
pub struct ReportEntry {
    /// Strategy label, e.g. "Random", "Greedy", "Annealed".
    pub label: String,
    /// The tour produced by that strategy.
    pub tour: Tour,
    /// Closed length of the tour.
    pub length: f64,
}

/// An ordered collection of labeled tours and their lengths, packaged for
/// an external reporting or visualization collaborator.
///
/// Pure aggregation: the report computes each closed length once at
/// insertion and performs no comparison or sorting of its own — ranking is
/// a presentation concern left to the consumer.
///
/// # Examples
///
/// ```
/// use tour_anneal::models::{PointSet, Tour};
/// use tour_anneal::distance::DistanceMatrix;
/// use tour_anneal::report::TourReport;
///
/// let ps = PointSet::from_coords(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]).unwrap();
/// let dm = DistanceMatrix::from_points(&ps);
///
/// let mut report = TourReport::new();
/// report.push("Greedy", Tour::identity(4), &dm);
/// assert_eq!(report.len(), 1);
/// assert!((report.get("Greedy").unwrap().length - 40.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Default, Serialize)]
pub struct TourReport {
    entries: Vec<ReportEntry>,
}

impl TourReport {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Adds a labeled tour, computing its closed length.
    pub fn push(&mut self, label: impl Into<String>, tour: Tour, distances: &DistanceMatrix) {
        let length = closed_tour_length(&tour, distances);
        self.entries.push(ReportEntry {
            label: label.into(),
            tour,
            length,
        });
    }

    /// Returns the entries in insertion order.
    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    /// Returns the first entry with the given label, if any.
    pub fn get(&self, label: &str) -> Option<&ReportEntry> {
        self.entries.iter().find(|e| e.label == label)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the report has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
