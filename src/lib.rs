//! # u-aco
//!
//! Multi-vehicle routing with Ant Colony Optimization: a shared pheromone
//! field, probabilistic construction under a visit-once constraint, and an
//! elitist evaporate/deposit update.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Location, Route, Solution, Violation)
//! - [`distance`] — Distance and inverse-distance heuristic matrices
//! - [`evaluation`] — Solution length and partition checking
//! - [`aco`] — Pheromone matrix, solution construction, colony loop
//! - [`error`] — Configuration errors
//!
//! ## Example
//!
//! ```
//! use u_aco::aco::{AcoConfig, AcoRunner};
//! use u_aco::models::Location;
//!
//! let locations = Location::from_coords(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0), (0.0, 3.0)]);
//! let config = AcoConfig::default()
//!     .with_num_vehicles(1)
//!     .with_num_ants(20)
//!     .with_iterations(50)
//!     .with_seed(42);
//!
//! let result = AcoRunner::run(&locations, &config)?;
//! assert_eq!(result.best.num_served(), 4);
//! # Ok::<(), u_aco::error::AcoError>(())
//! ```

pub mod aco;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod models;

pub use error::AcoError;
