//! Input and invariant error types.

use std::fmt;

/// An error raised while validating problem input or a constructed tour.
///
/// The first two variants reject bad input before any matrix or tour work
/// begins; the remaining variants report a broken permutation invariant,
/// which indicates a construction bug and is never silently repaired.
#[derive(Debug, Clone, PartialEq)]
pub enum TourError {
    /// Fewer points than the minimum needed to form a tour.
    TooFewPoints {
        /// Number of points supplied.
        count: usize,
        /// Minimum required.
        required: usize,
    },
    /// A point has a NaN or infinite coordinate.
    NonFiniteCoordinate {
        /// Index of the offending point in the input collection.
        index: usize,
    },
    /// A tour's length does not match the expected point count.
    LengthMismatch {
        /// Expected number of indices.
        expected: usize,
        /// Actual number of indices.
        actual: usize,
    },
    /// A point index appears more than once in a tour.
    DuplicateIndex {
        /// The repeated index.
        index: usize,
    },
    /// A tour references an index outside `0..len`.
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Number of points in the tour.
        len: usize,
    },
}

impl fmt::Display for TourError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TourError::TooFewPoints { count, required } => {
                write!(f, "need at least {required} points, got {count}")
            }
            TourError::NonFiniteCoordinate { index } => {
                write!(f, "point {index} has a non-finite coordinate")
            }
            TourError::LengthMismatch { expected, actual } => {
                write!(f, "tour has {actual} indices, expected {expected}")
            }
            TourError::DuplicateIndex { index } => {
                write!(f, "index {index} appears more than once in tour")
            }
            TourError::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for {len} points")
            }
        }
    }
}

impl std::error::Error for TourError {}
