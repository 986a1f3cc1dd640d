//! Ant Colony Optimization for multi-vehicle routing.
//!
//! A colony of ants repeatedly builds complete solutions by probabilistic
//! sequential customer selection, guided by learned pheromone trails and
//! inverse-distance desirability. After every iteration all trails
//! evaporate and only the iteration's best solution deposits pheromone
//! (elitist update).
//!
//! - [`AcoConfig`] — run parameters and validation
//! - [`PheromoneMatrix`] — trail strengths with evaporate/deposit
//! - [`SolutionConstructor`] — round-robin construction over a shared [`UnvisitedSet`]
//! - [`Colony`] — iteration state and the evaporate/reinforce cycle
//! - [`AcoRunner`] — fixed-budget loop producing an [`AcoResult`]
//!
//! # References
//!
//! - Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a Colony of Cooperating Agents"
//! - Bullnheimer, Hartl & Strauss (1999), "An improved Ant System algorithm for the Vehicle Routing Problem"

mod colony;
mod config;
mod construct;
mod pheromone;
mod runner;

pub use colony::{Colony, IterationSummary};
pub use config::AcoConfig;
pub use construct::{weighted_choice, SolutionConstructor, UnvisitedSet};
pub use pheromone::PheromoneMatrix;
pub use runner::{AcoResult, AcoRunner};
