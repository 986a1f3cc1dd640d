//! Inverse-distance desirability matrix.

use super::DistanceMatrix;

/// Desirability `η(i, j) = 1 / d(i, j)` of moving between two locations.
///
/// The diagonal is masked to zero so a location never attracts probability
/// mass towards itself. Distinct locations that coincide (`d = 0`) use
/// `1 / f64::EPSILON` so every entry stays finite.
///
/// # Examples
///
/// ```
/// use u_aco::distance::{DistanceMatrix, HeuristicMatrix};
///
/// let dm = DistanceMatrix::from_data(2, vec![0.0, 4.0, 4.0, 0.0]).unwrap();
/// let eta = HeuristicMatrix::from_distances(&dm);
/// assert_eq!(eta.get(0, 1), 0.25);
/// assert_eq!(eta.get(0, 0), 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct HeuristicMatrix {
    data: Vec<f64>,
    size: usize,
}

impl HeuristicMatrix {
    /// Inverts every off-diagonal entry of the distance matrix.
    pub fn from_distances(distances: &DistanceMatrix) -> Self {
        let size = distances.size();
        let mut data = vec![0.0; size * size];
        for i in 0..size {
            for j in 0..size {
                if i != j {
                    data[i * size + j] = 1.0 / distances.get(i, j).max(f64::EPSILON);
                }
            }
        }
        Self { data, size }
    }

    /// Desirability of moving from `from` to `to`.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }
}
