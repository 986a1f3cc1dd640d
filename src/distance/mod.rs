//! Distance and desirability matrices.
//!
//! Both are computed once at setup and never mutated.

mod heuristic;
mod matrix;

pub use heuristic::HeuristicMatrix;
pub use matrix::DistanceMatrix;
