//! Route cost evaluation.
//!
//! Scores a single (start center, pickup order) candidate against the tiered
//! pricing rule and the distance table.

mod evaluator;

pub use evaluator::RouteCostEvaluator;
