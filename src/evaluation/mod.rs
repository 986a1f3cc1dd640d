//! Solution evaluation.
//!
//! Computes total route length and checks the visit-once partition
//! invariant of multi-vehicle solutions.

mod evaluator;

pub use evaluator::{check_partition, evaluate, route_length};
