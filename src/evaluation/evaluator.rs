//! Route cost evaluator for hub consolidation.
//!
//! # Cost model
//!
//! For a start center `s` and pickup order `p1, p2, ..., pk`:
//!
//! ```text
//! cost = (d(s, p1) + d(p1, hub)) * price(w(p1))
//!      + sum over i >= 2 of (d(hub, pi) + d(pi, hub)) * price(w(pi))
//! ```
//!
//! `d(s, p1)` is 0 when `s == p1`. Pickups after the first are separate hub
//! round trips; loads are never chained between centers.

use crate::aggregation::CenterWeights;
use crate::distance::DistanceTable;
use crate::error::ConfigurationError;
use crate::models::{LocationId, Route};
use crate::pricing::TieredPricing;

/// Scores (start, pickup order) candidates for one order.
///
/// # Examples
///
/// ```
/// use u_consolidation::aggregation::CenterWeights;
/// use u_consolidation::distance::DistanceTable;
/// use u_consolidation::evaluation::RouteCostEvaluator;
/// use u_consolidation::models::LocationId;
/// use u_consolidation::pricing::TieredPricing;
///
/// let c1 = LocationId::new("C1");
/// let hub = LocationId::new("HUB");
///
/// let mut weights = CenterWeights::new();
/// weights.add(c1.clone(), 3.0);
/// let mut table = DistanceTable::new();
/// table.insert(c1.clone(), hub.clone(), 4.0).unwrap();
/// let pricing = TieredPricing::new(5.0, 10.0, 5.0, 8.0).unwrap();
///
/// let evaluator = RouteCostEvaluator::new(&weights, &table, &pricing, &hub);
/// let cost = evaluator.route_cost(&c1, &[c1.clone()]).unwrap();
/// assert_eq!(cost, 40.0);
/// ```
pub struct RouteCostEvaluator<'a> {
    weights: &'a CenterWeights,
    distances: &'a DistanceTable,
    pricing: &'a TieredPricing,
    hub: &'a LocationId,
}

impl<'a> RouteCostEvaluator<'a> {
    /// Creates an evaluator over one order's center weights.
    pub fn new(
        weights: &'a CenterWeights,
        distances: &'a DistanceTable,
        pricing: &'a TieredPricing,
        hub: &'a LocationId,
    ) -> Self {
        Self {
            weights,
            distances,
            pricing,
            hub,
        }
    }

    /// The center weights this evaluator prices.
    pub fn weights(&self) -> &'a CenterWeights {
        self.weights
    }

    /// Total cost of starting at `start` and serving `pickups` in order.
    ///
    /// Returns 0 for an empty pickup list. Fails if a needed distance is not
    /// configured or a pickup carries no weight for this order.
    pub fn route_cost(
        &self,
        start: &LocationId,
        pickups: &[LocationId],
    ) -> Result<f64, ConfigurationError> {
        let Some((first, rest)) = pickups.split_first() else {
            return Ok(0.0);
        };

        let approach = if start == first {
            0.0
        } else {
            self.distances.get(start, first)?
        };
        let first_leg = approach + self.distances.get(first, self.hub)?;
        let mut total = first_leg * self.rate_at(first)?;

        for pickup in rest {
            let round_trip =
                self.distances.get(self.hub, pickup)? + self.distances.get(pickup, self.hub)?;
            total += round_trip * self.rate_at(pickup)?;
        }

        Ok(total)
    }

    /// Total cost of a [`Route`].
    pub fn evaluate(&self, route: &Route) -> Result<f64, ConfigurationError> {
        self.route_cost(route.start(), route.pickups())
    }

    fn rate_at(&self, center: &LocationId) -> Result<f64, ConfigurationError> {
        self.weights
            .get(center)
            .map(|w| self.pricing.price(w))
            .ok_or_else(|| ConfigurationError::UnknownCenter {
                center: center.clone(),
            })
    }
}
