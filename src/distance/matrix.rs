//! Dense distance matrix.

use crate::error::AcoError;
use crate::models::Location;

/// Absolute tolerance when checking explicit data for symmetry.
const SYMMETRY_TOL: f64 = 1e-9;

/// A dense n×n distance matrix stored in row-major order.
///
/// Built once from location coordinates (Euclidean) or from explicit data,
/// and read-only afterwards.
///
/// # Examples
///
/// ```
/// use u_aco::models::Location;
/// use u_aco::distance::DistanceMatrix;
///
/// let locations = vec![
///     Location::depot(0.0, 0.0),
///     Location::new(1, 3.0, 4.0),
///     Location::new(2, 6.0, 8.0),
/// ];
/// let dm = DistanceMatrix::from_locations(&locations).unwrap();
/// assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    fn zeroed(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Computes a Euclidean distance matrix from location coordinates.
    ///
    /// Fails with [`AcoError::TooFewLocations`] for fewer than 2 locations.
    pub fn from_locations(locations: &[Location]) -> Result<Self, AcoError> {
        let n = locations.len();
        if n < 2 {
            return Err(AcoError::TooFewLocations { found: n });
        }
        let mut dm = Self::zeroed(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = locations[i].distance_to(&locations[j]);
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        Ok(dm)
    }

    /// Creates a distance matrix from an explicit n×n grid.
    ///
    /// Entries must be finite and non-negative; the diagonal is forced to zero.
    /// Trails are reinforced in both directions, so `d[i][j]` must equal
    /// `d[j][i]`; asymmetric data fails with [`AcoError::AsymmetricDistance`].
    pub fn from_data(size: usize, mut data: Vec<f64>) -> Result<Self, AcoError> {
        if size < 2 {
            return Err(AcoError::TooFewLocations { found: size });
        }
        if data.len() != size * size {
            return Err(AcoError::DimensionMismatch {
                expected: size * size,
                found: data.len(),
            });
        }
        for (k, &value) in data.iter().enumerate() {
            if !value.is_finite() || value < 0.0 {
                return Err(AcoError::InvalidDistance {
                    from: k / size,
                    to: k % size,
                    value,
                });
            }
        }
        for i in 0..size {
            data[i * size + i] = 0.0;
        }
        let dm = Self { data, size };
        if let Some((from, to)) = dm.first_asymmetry(SYMMETRY_TOL) {
            return Err(AcoError::AsymmetricDistance { from, to });
        }
        Ok(dm)
    }

    /// Returns the distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of customers (every location except the depot).
    pub fn num_customers(&self) -> usize {
        self.size - 1
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        self.first_asymmetry(tol).is_none()
    }

    fn first_asymmetry(&self, tol: f64) -> Option<(usize, usize)> {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return Some((i, j));
                }
            }
        }
        None
    }
}
