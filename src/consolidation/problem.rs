//! Order consolidation problem.

use tracing::{debug, instrument};

use crate::aggregation::aggregate_weights;
use crate::distance::DistanceTable;
use crate::error::{ConfigurationError, ConsolidationError};
use crate::evaluation::RouteCostEvaluator;
use crate::models::{Catalog, CostOutcome, Network, Order};
use crate::pricing::TieredPricing;
use crate::search::{RouteSearch, SearchLimits};

/// Read-only configuration for pricing orders against one hub.
///
/// Borrows its inputs, holds no mutable state, and can be shared across
/// threads: every [`minimum_cost`](Self::minimum_cost) call builds its own
/// request-scoped weights.
///
/// # Examples
///
/// ```
/// use u_consolidation::consolidation::ConsolidationProblem;
/// use u_consolidation::distance::DistanceTable;
/// use u_consolidation::models::{Catalog, CatalogEntry, LocationId, Network, Order};
/// use u_consolidation::pricing::TieredPricing;
///
/// let (c1, hub) = (LocationId::new("C1"), LocationId::new("HUB"));
/// let catalog = Catalog::from_entries([("A", CatalogEntry::new(3.0, c1.clone()))]).unwrap();
/// let mut distances = DistanceTable::new();
/// distances.insert(c1.clone(), hub.clone(), 4.0).unwrap();
/// let pricing = TieredPricing::new(5.0, 10.0, 5.0, 8.0).unwrap();
/// let network = Network::new(hub, vec![c1]).unwrap();
///
/// let problem = ConsolidationProblem::new(&catalog, &distances, &pricing, &network);
/// let outcome = problem.minimum_cost(&Order::from_lines([("A", 1)]).unwrap()).unwrap();
/// assert_eq!(outcome.minimum_cost, 40.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ConsolidationProblem<'a> {
    catalog: &'a Catalog,
    distances: &'a DistanceTable,
    pricing: &'a TieredPricing,
    network: &'a Network,
    limits: SearchLimits,
}

impl<'a> ConsolidationProblem<'a> {
    /// Creates a problem with default [`SearchLimits`].
    pub fn new(
        catalog: &'a Catalog,
        distances: &'a DistanceTable,
        pricing: &'a TieredPricing,
        network: &'a Network,
    ) -> Self {
        Self {
            catalog,
            distances,
            pricing,
            network,
            limits: SearchLimits::default(),
        }
    }

    /// Overrides the search candidate cap.
    pub fn with_limits(mut self, limits: SearchLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Computes the cheapest route for `order`.
    ///
    /// An order with no recognized products (or only zero quantities) costs 0
    /// and has no route. A requested product stocked at a center outside the
    /// network fails with [`ConfigurationError::UnknownSourceCenter`].
    #[instrument(skip_all, fields(lines = order.lines().count()))]
    pub fn minimum_cost(&self, order: &Order) -> Result<CostOutcome, ConsolidationError> {
        self.check_sources(order)?;
        let weights = aggregate_weights(order, self.catalog)?;
        if weights.is_empty() {
            debug!("order has nothing to pick up");
            return Ok(CostOutcome::empty());
        }
        debug!(
            centers = weights.len(),
            total_weight = weights.total(),
            "aggregated order weights"
        );

        let evaluator =
            RouteCostEvaluator::new(&weights, self.distances, self.pricing, self.network.hub());
        RouteSearch::new(evaluator, self.network.allowed_starts())
            .with_limits(self.limits)
            .run()
    }

    fn check_sources(&self, order: &Order) -> Result<(), ConfigurationError> {
        for (code, quantity) in order.lines() {
            if quantity == 0 {
                continue;
            }
            if let Some(entry) = self.catalog.get(code) {
                if !self.network.contains_center(entry.center()) {
                    return Err(ConfigurationError::UnknownSourceCenter {
                        product: code.to_string(),
                        center: entry.center().clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Parses a JSON order and computes its cheapest route.
    ///
    /// Malformed or negative quantities fail before any aggregation.
    pub fn minimum_cost_json(&self, order_json: &str) -> Result<CostOutcome, ConsolidationError> {
        let order = Order::from_json_str(order_json)?;
        self.minimum_cost(&order)
    }
}

/// Computes the cheapest consolidation route for `order` with default limits.
///
/// Shorthand for [`ConsolidationProblem::new`] followed by
/// [`ConsolidationProblem::minimum_cost`].
pub fn compute_minimum_cost(
    order: &Order,
    catalog: &Catalog,
    distances: &DistanceTable,
    pricing: &TieredPricing,
    network: &Network,
) -> Result<CostOutcome, ConsolidationError> {
    ConsolidationProblem::new(catalog, distances, pricing, network).minimum_cost(order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ComputationError, ErrorKind};
    use crate::models::{CatalogEntry, LocationId};

    fn id(name: &str) -> LocationId {
        LocationId::new(name)
    }

    struct Setup {
        catalog: Catalog,
        distances: DistanceTable,
        pricing: TieredPricing,
        network: Network,
    }

    impl Setup {
        fn problem(&self) -> ConsolidationProblem<'_> {
            ConsolidationProblem::new(&self.catalog, &self.distances, &self.pricing, &self.network)
        }
    }

    fn setup() -> Setup {
        let catalog = Catalog::from_entries([
            ("A", CatalogEntry::new(3.0, id("C1"))),
            ("B", CatalogEntry::new(2.0, id("C2"))),
        ])
        .expect("valid");
        let mut distances = DistanceTable::new();
        distances.insert_symmetric(id("C1"), id("HUB"), 4.0).expect("valid");
        distances.insert_symmetric(id("C2"), id("HUB"), 6.0).expect("valid");
        distances.insert_symmetric(id("C1"), id("C2"), 3.0).expect("valid");
        Setup {
            catalog,
            distances,
            pricing: TieredPricing::new(5.0, 10.0, 5.0, 8.0).expect("valid"),
            network: Network::new(id("HUB"), vec![id("C1"), id("C2")]).expect("valid"),
        }
    }

    #[test]
    fn test_empty_order() {
        let s = setup();
        let outcome = s.problem().minimum_cost(&Order::new()).expect("ok");
        assert_eq!(outcome.minimum_cost, 0.0);
        assert!(outcome.best_route.is_none());
    }

    #[test]
    fn test_two_centers() {
        let s = setup();
        let order = Order::from_lines([("A", 1), ("B", 1)]).expect("valid");
        let outcome = s.problem().minimum_cost(&order).expect("ok");
        // C1 first: 4 * 10 + 12 * 10 = 160; C2 first: 6 * 10 + 8 * 10 = 140
        assert!((outcome.minimum_cost - 140.0).abs() < 1e-10);
        let route = outcome.best_route.expect("route");
        assert_eq!(route.start(), &id("C2"));
        assert_eq!(route.pickups(), &[id("C2"), id("C1")]);
        assert_eq!(outcome.candidates_evaluated, 4);
    }

    #[test]
    fn test_json_negative_fails_fast() {
        let s = setup();
        let err = s
            .problem()
            .minimum_cost_json(r#"{"A": 1, "B": -1}"#)
            .expect_err("negative");
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_json_order() {
        let s = setup();
        let outcome = s.problem().minimum_cost_json(r#"{"A": 1, "Q": 3}"#).expect("ok");
        assert!((outcome.minimum_cost - 40.0).abs() < 1e-10);
    }

    #[test]
    fn test_limits_applied() {
        let s = setup();
        let order = Order::from_lines([("A", 1), ("B", 1)]).expect("valid");
        let err = s
            .problem()
            .with_limits(SearchLimits::new(3))
            .minimum_cost(&order)
            .expect_err("4 candidates > 3");
        assert!(matches!(
            err,
            ConsolidationError::Computation(ComputationError::SearchSpaceTooLarge { .. })
        ));
    }

    #[test]
    fn test_compute_minimum_cost_matches_problem() {
        let s = setup();
        let order = Order::from_lines([("B", 4)]).expect("valid");
        let direct = compute_minimum_cost(&order, &s.catalog, &s.distances, &s.pricing, &s.network)
            .expect("ok");
        assert_eq!(direct, s.problem().minimum_cost(&order).expect("ok"));
        // B: 8 kg at C2 -> rate 18, d(C2, HUB) = 6
        assert!((direct.minimum_cost - 108.0).abs() < 1e-10);
    }

    #[test]
    fn test_source_center_outside_network() {
        let catalog = Catalog::from_entries([("A", CatalogEntry::new(3.0, id("C9")))])
            .expect("valid");
        let mut distances = DistanceTable::new();
        distances.insert(id("C9"), id("HUB"), 4.0).expect("valid");
        distances.insert(id("C1"), id("C9"), 1.0).expect("valid");
        let pricing = TieredPricing::new(5.0, 10.0, 5.0, 8.0).expect("valid");
        let network = Network::new(id("HUB"), vec![id("C1")]).expect("valid");

        let order = Order::from_lines([("A", 1)]).expect("valid");
        let err = compute_minimum_cost(&order, &catalog, &distances, &pricing, &network)
            .expect_err("C9 is not a network center");
        assert!(matches!(
            err,
            ConsolidationError::Configuration(ConfigurationError::UnknownSourceCenter {
                ref product,
                ref center,
            }) if product == "A" && center == &id("C9")
        ));

        // Not requested, not checked.
        let order = Order::from_lines([("A", 0)]).expect("valid");
        let outcome = compute_minimum_cost(&order, &catalog, &distances, &pricing, &network)
            .expect("nothing to pick up");
        assert_eq!(outcome.minimum_cost, 0.0);
    }

    #[test]
    fn test_overflowing_order_weight_is_validation_error() {
        let catalog = Catalog::from_entries([("A", CatalogEntry::new(1e308, id("C1")))])
            .expect("valid");
        let mut distances = DistanceTable::new();
        distances.insert(id("C1"), id("HUB"), 4.0).expect("valid");
        let pricing = TieredPricing::new(5.0, 10.0, 5.0, 0.0).expect("valid");
        let network = Network::new(id("HUB"), vec![id("C1")]).expect("valid");

        let order = Order::from_lines([("A", 10)]).expect("valid");
        let err = compute_minimum_cost(&order, &catalog, &distances, &pricing, &network)
            .expect_err("weight overflows");
        assert_eq!(err.kind(), ErrorKind::Validation);
    }
}
