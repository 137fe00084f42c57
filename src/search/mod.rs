//! Minimum-cost route search.
//!
//! - [`RouteSearch`] — exhaustive search over start centers and pickup orders
//! - [`SearchLimits`] — cap on the number of candidates scored

mod exhaustive;

pub use exhaustive::{RouteSearch, SearchLimits};
