//! # u-consolidation
//!
//! Minimum-cost consolidation routing: an order's items are picked up from
//! several distribution centers and delivered to a single hub, priced per unit
//! distance by a weight-tiered rate.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (LocationId, Catalog, Order, Network, Route)
//! - [`distance`] — Directed distance table
//! - [`pricing`] — Tiered pricing function
//! - [`aggregation`] — Order to per-center weight reduction
//! - [`evaluation`] — Cost of a single (start, pickup order) candidate
//! - [`search`] — Exhaustive minimum-cost route search
//! - [`consolidation`] — End-to-end `compute_minimum_cost`
//! - [`config`] — JSON configuration loading and validation
//! - [`error`] — Validation, configuration and computation errors

pub mod aggregation;
pub mod config;
pub mod consolidation;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod models;
pub mod pricing;
pub mod search;

pub use consolidation::{compute_minimum_cost, ConsolidationProblem};
pub use error::{ConsolidationError, ErrorKind};
