//! Order aggregation.
//!
//! Reduces an order to the total weight waiting at each pickup center.

mod weights;

pub use weights::{aggregate_weights, CenterWeights};
