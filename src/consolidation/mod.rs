//! Minimum-cost consolidation of an order at the hub.
//!
//! Ties the pipeline together: order → per-center weights → route search.

mod problem;

pub use problem::{compute_minimum_cost, ConsolidationProblem};
