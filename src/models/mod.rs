//! Domain model types for multi-vehicle routing.
//!
//! Locations (depot plus customers), routes as depot-to-depot index
//! sequences, and solutions holding one route per vehicle.

mod location;
mod route;
mod solution;

pub use location::{Location, DEPOT};
pub use route::Route;
pub use solution::{Solution, Violation, ViolationType};
