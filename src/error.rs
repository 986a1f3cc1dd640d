//! Error types for colony setup.
//!
//! Every variant is a configuration error: it is detected before the first
//! iteration runs and aborts the run. Construction defects (a customer
//! visited twice or never) are not represented here; see
//! [`check_partition`](crate::evaluation::check_partition).

use std::fmt;

/// Errors reported while setting up an ant colony run.
#[derive(Debug, Clone, PartialEq)]
pub enum AcoError {
    /// Fewer than two locations (depot plus at least one customer).
    TooFewLocations {
        /// Number of locations supplied.
        found: usize,
    },

    /// Explicit distance data does not form a square matrix.
    DimensionMismatch {
        /// Expected number of entries (`size * size`).
        expected: usize,
        /// Number of entries supplied.
        found: usize,
    },

    /// A distance entry is negative or not finite.
    InvalidDistance {
        /// Row index.
        from: usize,
        /// Column index.
        to: usize,
        /// Offending value.
        value: f64,
    },

    /// Explicit distance data is not symmetric.
    AsymmetricDistance {
        /// Row index of the first mismatching pair.
        from: usize,
        /// Column index of the first mismatching pair.
        to: usize,
    },

    /// Initial pheromone must be strictly positive and finite.
    NonPositivePheromone(f64),

    /// At least one vehicle is required.
    NoVehicles,

    /// At least one ant per iteration is required.
    NoAnts,

    /// At least one iteration is required.
    NoIterations,

    /// `alpha` or `beta` is negative or not finite.
    InvalidExponent {
        /// Parameter name (`"alpha"` or `"beta"`).
        name: &'static str,
        /// Offending value.
        value: f64,
    },

    /// Evaporation rate outside `[0, 1]`.
    InvalidEvaporation(f64),
}

impl fmt::Display for AcoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AcoError::TooFewLocations { found } => {
                write!(f, "at least 2 locations are required, got {found}")
            }
            AcoError::DimensionMismatch { expected, found } => {
                write!(f, "distance data has {found} entries, expected {expected}")
            }
            AcoError::InvalidDistance { from, to, value } => {
                write!(f, "distance {from}->{to} must be finite and non-negative, got {value}")
            }
            AcoError::AsymmetricDistance { from, to } => {
                write!(f, "distance {from}->{to} differs from {to}->{from}")
            }
            AcoError::NonPositivePheromone(v) => {
                write!(f, "initial pheromone must be positive, got {v}")
            }
            AcoError::NoVehicles => write!(f, "num_vehicles must be at least 1"),
            AcoError::NoAnts => write!(f, "num_ants must be at least 1"),
            AcoError::NoIterations => write!(f, "iterations must be at least 1"),
            AcoError::InvalidExponent { name, value } => {
                write!(f, "{name} must be finite and non-negative, got {value}")
            }
            AcoError::InvalidEvaporation(rho) => {
                write!(f, "rho must be in [0, 1], got {rho}")
            }
        }
    }
}

impl std::error::Error for AcoError {}
