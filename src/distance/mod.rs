//! Distances between locations.
//!
//! Provides a sparse, directed distance table keyed by location pairs.

mod table;

pub use table::DistanceTable;
