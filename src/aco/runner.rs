//! ACO execution loop.

use super::{AcoConfig, Colony};
use crate::distance::DistanceMatrix;
use crate::error::AcoError;
use crate::models::{Location, Solution};
use serde::{Deserialize, Serialize};
use tracing::info;
use u_numflow::random::create_rng;

/// Result of an ant colony run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AcoResult {
    /// The best solution found over all iterations.
    pub best: Solution,

    /// Total length of the best solution.
    pub best_length: f64,

    /// Number of iterations executed.
    pub iterations: usize,

    /// Global best length after each iteration (non-increasing).
    pub length_history: Vec<f64>,

    /// Length of each iteration's best ant.
    pub iteration_best_history: Vec<f64>,
}

/// Executes the ant colony for its fixed iteration budget.
///
/// # Examples
///
/// ```
/// use u_aco::aco::{AcoConfig, AcoRunner};
/// use u_aco::models::Location;
///
/// let locations = Location::from_coords(&[
///     (40.0, 50.0),
///     (45.0, 68.0),
///     (50.0, 30.0),
///     (55.0, 20.0),
///     (60.0, 80.0),
///     (65.0, 60.0),
///     (70.0, 40.0),
/// ]);
/// let config = AcoConfig::default().with_iterations(30).with_seed(42);
///
/// let result = AcoRunner::run(&locations, &config).unwrap();
/// assert_eq!(result.best.num_routes(), 2);
/// assert_eq!(result.best.num_served(), 6);
/// assert_eq!(result.length_history.len(), 30);
/// ```
pub struct AcoRunner;

impl AcoRunner {
    /// Runs ACO on Euclidean distances between the given locations.
    ///
    /// Location 0 is the depot.
    pub fn run(locations: &[Location], config: &AcoConfig) -> Result<AcoResult, AcoError> {
        let distances = DistanceMatrix::from_locations(locations)?;
        Self::run_with_distances(distances, config)
    }

    /// Runs ACO on an explicit distance matrix.
    pub fn run_with_distances(
        distances: DistanceMatrix,
        config: &AcoConfig,
    ) -> Result<AcoResult, AcoError> {
        let mut colony = Colony::new(distances, config.clone())?;

        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };

        info!(
            customers = colony.distances().num_customers(),
            vehicles = config.num_vehicles,
            ants = config.num_ants,
            iterations = config.iterations,
            "starting ant colony"
        );

        let mut length_history = Vec::with_capacity(config.iterations);
        let mut iteration_best_history = Vec::with_capacity(config.iterations);
        for _ in 0..config.iterations {
            let summary = colony.step(&mut rng);
            length_history.push(summary.best_length);
            iteration_best_history.push(summary.iteration_best_length);
        }

        let iterations = colony.iteration();
        let Some((best, best_length)) = colony.into_best() else {
            return Err(AcoError::NoIterations);
        };

        info!(best_length, iterations, "ant colony finished");

        Ok(AcoResult {
            best,
            best_length,
            iterations,
            length_history,
            iteration_best_history,
        })
    }
}
