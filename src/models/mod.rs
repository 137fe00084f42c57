//! Domain model types for order consolidation.
//!
//! Provides the core abstractions: location identifiers, the product catalog,
//! validated orders, the hub/center network, and routes with their costed
//! outcome.

mod catalog;
mod location;
mod network;
mod order;
mod route;

pub use catalog::{Catalog, CatalogEntry};
pub use location::LocationId;
pub use network::Network;
pub use order::Order;
pub use route::{CostOutcome, CostResponse, Route};
