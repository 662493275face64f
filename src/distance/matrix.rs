//! Dense distance matrix.

use crate::models::PointSet;

/// A dense n×n distance matrix stored in row-major order.
///
/// Built once per optimization session from a [`PointSet`] and treated as a
/// constant lookup table afterwards: the heuristics and the optimizer all
/// borrow it read-only.
///
/// # Examples
///
/// ```
/// use tour_anneal::models::PointSet;
/// use tour_anneal::distance::DistanceMatrix;
///
/// let ps = PointSet::from_coords(&[(0.0, 0.0), (3.0, 4.0), (6.0, 8.0)]).unwrap();
/// let dm = DistanceMatrix::from_points(&ps);
/// assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Computes the Euclidean distance matrix of a point set.
    ///
    /// O(n²) time and space; each pair is computed once and mirrored, so
    /// the result is symmetric with a zero diagonal.
    pub fn from_points(points: &PointSet) -> Self {
        let n = points.len();
        let mut dm = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = points.get(i).distance_to(&points.get(j));
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        dm
    }

    /// Creates a distance matrix from an explicit n×n grid.
    ///
    /// Returns `None` if the data length doesn't match `size * size`.
    pub fn from_data(size: usize, data: Vec<f64>) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        Some(Self { data, size })
    }

    /// Returns the distance from point `from` to point `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the distance from point `from` to point `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of points in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }
}
