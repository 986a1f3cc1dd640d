//! Pheromone trail matrix.

use crate::error::AcoError;
use crate::models::Solution;
use tracing::warn;

/// Lowest value an entry can decay to. Keeps every trail strictly positive.
const TRAIL_FLOOR: f64 = f64::MIN_POSITIVE;

/// Learned trail strengths over all ordered location pairs.
///
/// Stored as a dense directed matrix but updated symmetrically: depositing
/// on `(i, j)` reinforces `(j, i)` by the same amount. Every entry stays
/// strictly positive: evaporation multiplies and never drops below
/// `f64::MIN_POSITIVE`.
///
/// # Examples
///
/// ```
/// use u_aco::aco::PheromoneMatrix;
///
/// let mut tau = PheromoneMatrix::new(3, 1.0).unwrap();
/// tau.evaporate(0.5);
/// tau.deposit_edge(0, 2, 0.25);
/// assert_eq!(tau.get(1, 2), 0.5);
/// assert_eq!(tau.get(0, 2), 0.75);
/// assert_eq!(tau.get(2, 0), 0.75);
/// ```
#[derive(Debug, Clone)]
pub struct PheromoneMatrix {
    data: Vec<f64>,
    size: usize,
}

impl PheromoneMatrix {
    /// Creates a `size × size` matrix with every entry set to `value`.
    pub fn new(size: usize, value: f64) -> Result<Self, AcoError> {
        if !value.is_finite() || value <= 0.0 {
            return Err(AcoError::NonPositivePheromone(value));
        }
        Ok(Self {
            data: vec![value; size * size],
            size,
        })
    }

    /// Trail strength on the edge `from → to`.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Multiplies every entry by `1 - rho`.
    ///
    /// `rho` is clamped to `[0, 1]`. Entries are floored so that even
    /// `rho = 1` leaves the matrix strictly positive.
    pub fn evaporate(&mut self, rho: f64) {
        let keep = 1.0 - rho.clamp(0.0, 1.0);
        for tau in &mut self.data {
            *tau = (*tau * keep).max(TRAIL_FLOOR);
        }
    }

    /// Adds `amount` to both `(i, j)` and `(j, i)`.
    ///
    /// A self-edge `(i, i)` is reinforced once.
    pub fn deposit_edge(&mut self, i: usize, j: usize, amount: f64) {
        self.data[i * self.size + j] += amount;
        if i != j {
            self.data[j * self.size + i] += amount;
        }
    }

    /// Adds `amount` to every edge traversed by any route of `solution`.
    pub fn deposit(&mut self, solution: &Solution, amount: f64) {
        for (from, to) in solution.edges() {
            self.deposit_edge(from, to, amount);
        }
    }

    /// Elitist reinforcement: deposits `1 / length` on the solution's edges.
    ///
    /// Shorter solutions deposit more. Skipped if `length` is not strictly
    /// positive and finite.
    pub fn reinforce(&mut self, solution: &Solution, length: f64) {
        if !length.is_finite() || length <= 0.0 {
            warn!(length, "skipping pheromone deposit for degenerate solution length");
            return;
        }
        self.deposit(solution, 1.0 / length);
    }

    /// Smallest entry.
    pub fn min_value(&self) -> f64 {
        self.data.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Largest entry.
    pub fn max_value(&self) -> f64 {
        self.data.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Route;

    fn all_equal(tau: &PheromoneMatrix, expected: f64) -> bool {
        (0..tau.size()).all(|i| (0..tau.size()).all(|j| (tau.get(i, j) - expected).abs() < 1e-12))
    }

    #[test]
    fn test_new_uniform() {
        let tau = PheromoneMatrix::new(4, 2.5).expect("valid");
        assert_eq!(tau.size(), 4);
        assert!(all_equal(&tau, 2.5));
    }

    #[test]
    fn test_new_rejects_non_positive() {
        assert_eq!(
            PheromoneMatrix::new(3, 0.0).unwrap_err(),
            AcoError::NonPositivePheromone(0.0)
        );
        assert!(PheromoneMatrix::new(3, -1.0).is_err());
        assert!(PheromoneMatrix::new(3, f64::NAN).is_err());
    }

    #[test]
    fn test_evaporate_halves() {
        let mut tau = PheromoneMatrix::new(3, 1.0).expect("valid");
        tau.evaporate(0.5);
        assert!(all_equal(&tau, 0.5));
        tau.evaporate(0.5);
        assert!(all_equal(&tau, 0.25));
    }

    #[test]
    fn test_evaporate_zero_rate_is_noop() {
        let mut tau = PheromoneMatrix::new(3, 0.7).expect("valid");
        tau.evaporate(0.0);
        assert!(all_equal(&tau, 0.7));
    }

    #[test]
    fn test_full_evaporation_stays_positive() {
        let mut tau = PheromoneMatrix::new(3, 1.0).expect("valid");
        tau.evaporate(1.0);
        assert!(tau.min_value() > 0.0);
    }

    #[test]
    fn test_deposit_symmetry() {
        let mut tau = PheromoneMatrix::new(3, 1.0).expect("valid");
        tau.deposit_edge(1, 2, 0.3);
        assert!((tau.get(1, 2) - 1.3).abs() < 1e-12);
        assert!((tau.get(2, 1) - 1.3).abs() < 1e-12);
        assert!((tau.get(0, 1) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_reinforce_solution_edges() {
        let mut tau = PheromoneMatrix::new(4, 1.0).expect("valid");
        let sol = Solution::from_routes(vec![
            Route::from_stops(0, vec![0, 1, 0]).expect("valid"),
            Route::from_stops(1, vec![0, 2, 3, 0]).expect("valid"),
        ]);
        tau.reinforce(&sol, 4.0);
        // (0,1) is traversed twice: out and back.
        assert!((tau.get(0, 1) - 1.5).abs() < 1e-12);
        assert!((tau.get(2, 3) - 1.25).abs() < 1e-12);
        assert!((tau.get(3, 2) - 1.25).abs() < 1e-12);
        assert!((tau.get(1, 2) - 1.0).abs() < 1e-12);
        assert!((tau.max_value() - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_reinforce_skips_zero_length() {
        let mut tau = PheromoneMatrix::new(2, 1.0).expect("valid");
        let sol = Solution::from_routes(vec![Route::from_stops(0, vec![0, 1, 0]).expect("valid")]);
        tau.reinforce(&sol, 0.0);
        assert!(all_equal(&tau, 1.0));
    }
}
