//! Per-center weight aggregation.

use std::collections::BTreeMap;

use tracing::debug;

use crate::error::ValidationError;
use crate::models::{Catalog, LocationId, Order};

/// Total weight to pick up at each center for one order.
///
/// Only centers with nonzero demand are present. Iteration is in center-id
/// order.
///
/// # Examples
///
/// ```
/// use u_consolidation::aggregation::CenterWeights;
/// use u_consolidation::models::LocationId;
///
/// let mut weights = CenterWeights::new();
/// weights.add(LocationId::new("C1"), 3.0);
/// weights.add(LocationId::new("C1"), 2.0);
/// weights.add(LocationId::new("C2"), 0.0);
/// assert_eq!(weights.get(&LocationId::new("C1")), Some(5.0));
/// assert_eq!(weights.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CenterWeights {
    weights: BTreeMap<LocationId, f64>,
}

impl CenterWeights {
    /// Creates an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `weight` to `center`'s bucket. Nonpositive weights are ignored.
    pub fn add(&mut self, center: LocationId, weight: f64) {
        if weight > 0.0 {
            *self.weights.entry(center).or_insert(0.0) += weight;
        }
    }

    /// Aggregated weight at `center`, if it has any demand.
    pub fn get(&self, center: &LocationId) -> Option<f64> {
        self.weights.get(center).copied()
    }

    /// Centers with demand, in id order.
    pub fn centers(&self) -> Vec<LocationId> {
        self.weights.keys().cloned().collect()
    }

    /// Sum of all center weights.
    pub fn total(&self) -> f64 {
        self.weights.values().sum()
    }

    /// Number of centers with demand.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Returns `true` if nothing needs picking up.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

/// Reduces an order to the weight waiting at each center.
///
/// Each line with a positive quantity and a catalog entry adds
/// `unit weight × quantity` to the entry's center. Product codes the catalog
/// does not know are skipped: an unrecognized code is not an error.
///
/// Fails with [`ValidationError::WeightOverflow`] when a center's total
/// weight is not finite.
///
/// # Examples
///
/// ```
/// use u_consolidation::aggregation::aggregate_weights;
/// use u_consolidation::models::{Catalog, CatalogEntry, LocationId, Order};
///
/// let catalog = Catalog::from_entries([
///     ("A", CatalogEntry::new(3.0, LocationId::new("C1"))),
///     ("B", CatalogEntry::new(2.0, LocationId::new("C1"))),
///     ("C", CatalogEntry::new(8.0, LocationId::new("C2"))),
/// ])
/// .unwrap();
/// let order = Order::from_lines([("A", 1), ("B", 2), ("C", 0), ("ZZZ", 9)]).unwrap();
///
/// let weights = aggregate_weights(&order, &catalog).unwrap();
/// assert_eq!(weights.get(&LocationId::new("C1")), Some(7.0));
/// assert_eq!(weights.get(&LocationId::new("C2")), None);
/// ```
pub fn aggregate_weights(
    order: &Order,
    catalog: &Catalog,
) -> Result<CenterWeights, ValidationError> {
    let mut weights = CenterWeights::new();
    for (code, quantity) in order.lines() {
        if quantity == 0 {
            continue;
        }
        match catalog.get(code) {
            Some(entry) => weights.add(entry.center().clone(), entry.weight() * quantity as f64),
            None => debug!(product = code, quantity, "ignoring product missing from catalog"),
        }
    }
    if let Some((center, _)) = weights.weights.iter().find(|(_, w)| !w.is_finite()) {
        return Err(ValidationError::WeightOverflow {
            center: center.clone(),
        });
    }
    Ok(weights)
}
