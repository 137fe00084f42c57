//! Product catalog types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::LocationId;
use crate::error::ConfigurationError;

/// Unit weight of a product and the center that stocks it.
///
/// # Examples
///
/// ```
/// use u_consolidation::models::{CatalogEntry, LocationId};
///
/// let entry = CatalogEntry::new(3.0, LocationId::new("C1"));
/// assert_eq!(entry.weight(), 3.0);
/// assert_eq!(entry.center().as_str(), "C1");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    weight: f64,
    center: LocationId,
}

impl CatalogEntry {
    /// Creates an entry. Validation happens when the entry joins a [`Catalog`].
    pub fn new(weight: f64, center: LocationId) -> Self {
        Self { weight, center }
    }

    /// Weight of a single unit.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Center the product is picked up from.
    pub fn center(&self) -> &LocationId {
        &self.center
    }
}

/// Read-only product catalog keyed by product code.
///
/// Every entry has a positive, finite unit weight.
///
/// # Examples
///
/// ```
/// use u_consolidation::models::{Catalog, CatalogEntry, LocationId};
///
/// let mut catalog = Catalog::new();
/// catalog.insert("A", CatalogEntry::new(3.0, LocationId::new("C1"))).unwrap();
/// assert!(catalog.get("A").is_some());
/// assert!(catalog.get("Z").is_none());
/// assert!(catalog.insert("B", CatalogEntry::new(0.0, LocationId::new("C1"))).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    entries: BTreeMap<String, CatalogEntry>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from `(code, entry)` pairs, rejecting invalid weights.
    pub fn from_entries<I, K>(entries: I) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = (K, CatalogEntry)>,
        K: Into<String>,
    {
        let mut catalog = Self::new();
        for (code, entry) in entries {
            catalog.insert(code, entry)?;
        }
        Ok(catalog)
    }

    /// Adds or replaces a product.
    ///
    /// Fails if the unit weight is not a positive finite number.
    pub fn insert(
        &mut self,
        code: impl Into<String>,
        entry: CatalogEntry,
    ) -> Result<(), ConfigurationError> {
        let code = code.into();
        if !entry.weight.is_finite() || entry.weight <= 0.0 {
            return Err(ConfigurationError::InvalidWeight {
                product: code,
                weight: entry.weight,
            });
        }
        self.entries.insert(code, entry);
        Ok(())
    }

    /// Looks up a product by code.
    pub fn get(&self, code: &str) -> Option<&CatalogEntry> {
        self.entries.get(code)
    }

    /// Iterates over products in code order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CatalogEntry)> {
        self.entries.iter().map(|(code, entry)| (code.as_str(), entry))
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
