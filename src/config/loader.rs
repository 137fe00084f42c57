//! JSON configuration documents.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::consolidation::ConsolidationProblem;
use crate::distance::DistanceTable;
use crate::error::ConfigurationError;
use crate::models::{Catalog, CatalogEntry, LocationId, Network};
use crate::pricing::TieredPricing;
use crate::search::SearchLimits;

/// One directed distance entry in a configuration document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceEntry {
    /// Leg origin.
    pub from: LocationId,
    /// Leg destination.
    pub to: LocationId,
    /// Nonnegative distance.
    pub distance: f64,
}

/// Unvalidated configuration as read from JSON.
///
/// ```json
/// {
///   "hub": "HUB",
///   "centers": ["C1", "C2"],
///   "allowed_starts": ["C1"],
///   "catalog": { "A": { "weight": 3.0, "center": "C1" } },
///   "distances": [ { "from": "C1", "to": "HUB", "distance": 4.0 } ],
///   "pricing": { "base_tier_limit": 5, "base_rate": 10, "tier_size": 5, "tier_increment": 8 },
///   "limits": { "max_candidates": 1000 }
/// }
/// ```
///
/// `allowed_starts` defaults to every center and `limits` to
/// [`SearchLimits::default`].
///
/// # Examples
///
/// ```
/// use u_consolidation::config::ConsolidationConfig;
/// use u_consolidation::models::Order;
///
/// let config = ConsolidationConfig::from_json_str(r#"{
///     "hub": "HUB",
///     "centers": ["C1"],
///     "catalog": { "A": { "weight": 3.0, "center": "C1" } },
///     "distances": [ { "from": "C1", "to": "HUB", "distance": 4.0 } ],
///     "pricing": { "base_tier_limit": 5, "base_rate": 10, "tier_size": 5, "tier_increment": 8 }
/// }"#).unwrap();
///
/// let settings = config.build().unwrap();
/// let outcome = settings.problem().minimum_cost_json(r#"{"A": 1}"#).unwrap();
/// assert_eq!(outcome.minimum_cost, 40.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConsolidationConfig {
    /// Delivery destination.
    pub hub: LocationId,
    /// Pickup centers.
    pub centers: Vec<LocationId>,
    /// Centers a route may start from; every center when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_starts: Option<Vec<LocationId>>,
    /// Product code to unit weight and source center.
    pub catalog: BTreeMap<String, CatalogEntry>,
    /// Directed distances.
    pub distances: Vec<DistanceEntry>,
    /// Tiered pricing constants.
    pub pricing: TieredPricing,
    /// Search candidate cap.
    #[serde(default)]
    pub limits: SearchLimits,
}

impl ConsolidationConfig {
    /// Parses a configuration from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigurationError> {
        serde_json::from_str(json).map_err(|source| ConfigurationError::Parse { source })
    }

    /// Parses a configuration from a JSON reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ConfigurationError> {
        serde_json::from_reader(reader).map_err(|source| ConfigurationError::Parse { source })
    }

    /// Reads and parses a configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigurationError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigurationError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Validates the document and produces typed, read-only settings.
    ///
    /// Checks that the hub is not a center, that every catalog entry and
    /// allowed start names a configured center, that distance entries only
    /// connect the hub and centers, and that weights, distances and pricing
    /// constants are in range.
    pub fn build(self) -> Result<ConsolidationSettings, ConfigurationError> {
        let mut network = Network::new(self.hub, self.centers)?;
        if let Some(starts) = self.allowed_starts {
            network = network.with_allowed_starts(starts)?;
        }

        let mut catalog = Catalog::new();
        for (product, entry) in self.catalog {
            if !network.contains_center(entry.center()) {
                return Err(ConfigurationError::UnknownSourceCenter {
                    center: entry.center().clone(),
                    product,
                });
            }
            catalog.insert(product, entry)?;
        }

        let known = |id: &LocationId| id == network.hub() || network.contains_center(id);
        if let Some(location) = self
            .distances
            .iter()
            .flat_map(|e| [&e.from, &e.to])
            .find(|&id| !known(id))
        {
            return Err(ConfigurationError::UnknownLocation {
                location: location.clone(),
            });
        }
        let distances = DistanceTable::from_entries(
            self.distances
                .into_iter()
                .map(|e| (e.from, e.to, e.distance)),
        )?;

        debug!(
            hub = %network.hub(),
            centers = network.centers().len(),
            products = catalog.len(),
            distances = distances.len(),
            "loaded consolidation configuration"
        );

        Ok(ConsolidationSettings {
            catalog,
            distances,
            pricing: self.pricing,
            network,
            limits: self.limits,
        })
    }
}

/// Validated, owned configuration loaded once per process.
#[derive(Debug, Clone, PartialEq)]
pub struct ConsolidationSettings {
    catalog: Catalog,
    distances: DistanceTable,
    pricing: TieredPricing,
    network: Network,
    limits: SearchLimits,
}

impl ConsolidationSettings {
    /// A problem borrowing these settings.
    pub fn problem(&self) -> ConsolidationProblem<'_> {
        ConsolidationProblem::new(&self.catalog, &self.distances, &self.pricing, &self.network)
            .with_limits(self.limits)
    }

    /// Product catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Distance table.
    pub fn distances(&self) -> &DistanceTable {
        &self.distances
    }

    /// Pricing rule.
    pub fn pricing(&self) -> &TieredPricing {
        &self.pricing
    }

    /// Hub and centers.
    pub fn network(&self) -> &Network {
        &self.network
    }

    /// Search candidate cap.
    pub fn limits(&self) -> SearchLimits {
        self.limits
    }
}
