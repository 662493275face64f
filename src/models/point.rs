//! Point and point set types.

use serde::{Deserialize, Serialize};

use super::TourError;

/// Minimum number of points required before optimization is attempted.
pub const MIN_POINTS: usize = 3;

/// A 2D point with real-valued coordinates.
///
/// Points are immutable and carry no identity of their own; everywhere else
/// in the crate they are referenced by their index in the [`PointSet`].
///
/// # Examples
///
/// ```
/// use tour_anneal::models::Point;
///
/// let a = Point::new(0.0, 0.0);
/// let b = Point::new(3.0, 4.0);
/// assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a point at the given coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Returns `true` if both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// An ordered collection of points, validated at construction.
///
/// The index of a point in this collection is its sole stable identifier:
/// tours reference points only by index. Construction rejects fewer than
/// [`MIN_POINTS`] points and non-finite coordinates, so invalid input never
/// reaches the distance matrix or the heuristics.
///
/// # Examples
///
/// ```
/// use tour_anneal::models::{Point, PointSet};
///
/// let ps = PointSet::new(vec![
///     Point::new(0.0, 0.0),
///     Point::new(10.0, 0.0),
///     Point::new(10.0, 10.0),
/// ]).unwrap();
/// assert_eq!(ps.len(), 3);
///
/// assert!(PointSet::new(vec![Point::new(0.0, 0.0)]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointSet {
    points: Vec<Point>,
}

impl PointSet {
    /// Creates a point set from the given points.
    ///
    /// Returns [`TourError::TooFewPoints`] if fewer than [`MIN_POINTS`]
    /// points are supplied, or [`TourError::NonFiniteCoordinate`] if any
    /// coordinate is NaN or infinite.
    pub fn new(points: Vec<Point>) -> Result<Self, TourError> {
        if points.len() < MIN_POINTS {
            return Err(TourError::TooFewPoints {
                count: points.len(),
                required: MIN_POINTS,
            });
        }
        for (index, p) in points.iter().enumerate() {
            if !p.is_finite() {
                return Err(TourError::NonFiniteCoordinate { index });
            }
        }
        Ok(Self { points })
    }

    /// Creates a point set from raw `(x, y)` pairs.
    pub fn from_coords(coords: &[(f64, f64)]) -> Result<Self, TourError> {
        Self::new(coords.iter().map(|&(x, y)| Point::new(x, y)).collect())
    }

    /// Returns the points in input order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Returns the point at the given index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn get(&self, index: usize) -> Point {
        self.points[index]
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`: construction requires at least [`MIN_POINTS`] points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
        assert!((b.distance_to(&a) - 5.0).abs() < 1e-10);
        assert_eq!(a.distance_to(&a), 0.0);
    }

    #[test]
    fn test_point_accessors() {
        let p = Point::new(1.5, -2.5);
        assert_eq!(p.x(), 1.5);
        assert_eq!(p.y(), -2.5);
    }

    #[test]
    fn test_point_set_valid() {
        let ps = PointSet::from_coords(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]).expect("valid");
        assert_eq!(ps.len(), 3);
        assert!(!ps.is_empty());
        assert_eq!(ps.get(1), Point::new(1.0, 0.0));
    }

    #[test]
    fn test_point_set_too_few() {
        let err = PointSet::from_coords(&[(0.0, 0.0), (1.0, 1.0)]).unwrap_err();
        assert_eq!(
            err,
            TourError::TooFewPoints {
                count: 2,
                required: MIN_POINTS
            }
        );
    }

    #[test]
    fn test_point_set_non_finite() {
        let err =
            PointSet::from_coords(&[(0.0, 0.0), (1.0, f64::NAN), (2.0, 2.0)]).unwrap_err();
        assert_eq!(err, TourError::NonFiniteCoordinate { index: 1 });

        let err =
            PointSet::from_coords(&[(f64::INFINITY, 0.0), (1.0, 1.0), (2.0, 2.0)]).unwrap_err();
        assert_eq!(err, TourError::NonFiniteCoordinate { index: 0 });
    }
}
