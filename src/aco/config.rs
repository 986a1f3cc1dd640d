//! Colony configuration.
//!
//! [`AcoConfig`] holds every parameter of a run: fleet size, colony size,
//! iteration budget, and the exponents and rates of the pheromone model.

use crate::error::AcoError;
use serde::{Deserialize, Serialize};

/// Configuration for the ant colony.
///
/// # Defaults
///
/// ```
/// use u_aco::aco::AcoConfig;
///
/// let config = AcoConfig::default();
/// assert_eq!(config.num_vehicles, 2);
/// assert_eq!(config.num_ants, 10);
/// assert_eq!(config.iterations, 100);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_aco::aco::AcoConfig;
///
/// let config = AcoConfig::default()
///     .with_num_vehicles(1)
///     .with_num_ants(20)
///     .with_iterations(50)
///     .with_beta(3.0)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AcoConfig {
    /// Number of vehicles; every solution holds exactly this many routes.
    pub num_vehicles: usize,

    /// Number of ants (solutions constructed) per iteration.
    pub num_ants: usize,

    /// Fixed iteration budget. There is no early termination.
    pub iterations: usize,

    /// Pheromone exponent. `0` ignores the learned trails.
    pub alpha: f64,

    /// Heuristic (inverse distance) exponent. Large values approach
    /// nearest-neighbor construction.
    pub beta: f64,

    /// Evaporation rate in `[0, 1]`, applied once per iteration.
    pub rho: f64,

    /// Uniform pheromone level of every edge at setup. Must be positive.
    pub initial_pheromone: f64,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,

    /// Construct the ants of one iteration on the rayon thread pool.
    ///
    /// Only effective with the `parallel` feature. Results are identical
    /// to a sequential run with the same seed.
    pub parallel: bool,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            num_vehicles: 2,
            num_ants: 10,
            iterations: 100,
            alpha: 1.0,
            beta: 5.0,
            rho: 0.5,
            initial_pheromone: 1.0,
            seed: None,
            parallel: false,
        }
    }
}

impl AcoConfig {
    pub fn with_num_vehicles(mut self, n: usize) -> Self {
        self.num_vehicles = n;
        self
    }

    pub fn with_num_ants(mut self, n: usize) -> Self {
        self.num_ants = n;
        self
    }

    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    pub fn with_rho(mut self, rho: f64) -> Self {
        self.rho = rho;
        self
    }

    pub fn with_initial_pheromone(mut self, value: f64) -> Self {
        self.initial_pheromone = value;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), AcoError> {
        if self.num_vehicles == 0 {
            return Err(AcoError::NoVehicles);
        }
        if self.num_ants == 0 {
            return Err(AcoError::NoAnts);
        }
        if self.iterations == 0 {
            return Err(AcoError::NoIterations);
        }
        if !self.alpha.is_finite() || self.alpha < 0.0 {
            return Err(AcoError::InvalidExponent {
                name: "alpha",
                value: self.alpha,
            });
        }
        if !self.beta.is_finite() || self.beta < 0.0 {
            return Err(AcoError::InvalidExponent {
                name: "beta",
                value: self.beta,
            });
        }
        if !(0.0..=1.0).contains(&self.rho) {
            return Err(AcoError::InvalidEvaporation(self.rho));
        }
        if !self.initial_pheromone.is_finite() || self.initial_pheromone <= 0.0 {
            return Err(AcoError::NonPositivePheromone(self.initial_pheromone));
        }
        Ok(())
    }
}
