//! Configuration loading.
//!
//! Catalog, distances, network and pricing are supplied as a JSON document,
//! validated once, and then shared read-only by every computation.

mod loader;

pub use loader::{ConsolidationConfig, ConsolidationSettings, DistanceEntry};
