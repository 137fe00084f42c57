//! Route and cost outcome types.

use serde::Serialize;

use super::LocationId;

/// A start center plus the order in which pickup centers are served.
///
/// The first pickup is reached from `start` and driven straight to the hub;
/// every later pickup is its own hub round trip.
///
/// # Examples
///
/// ```
/// use u_consolidation::models::{LocationId, Route};
///
/// let route = Route::new(
///     LocationId::new("C1"),
///     vec![LocationId::new("C1"), LocationId::new("C2")],
/// );
/// assert_eq!(route.start().as_str(), "C1");
/// assert_eq!(route.len(), 2);
/// assert_eq!(route.first_pickup().map(|c| c.as_str()), Some("C1"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    start: LocationId,
    pickups: Vec<LocationId>,
}

impl Route {
    /// Creates a route.
    pub fn new(start: LocationId, pickups: Vec<LocationId>) -> Self {
        Self { start, pickups }
    }

    /// Center the vehicle departs from.
    pub fn start(&self) -> &LocationId {
        &self.start
    }

    /// Pickup centers in visiting order.
    pub fn pickups(&self) -> &[LocationId] {
        &self.pickups
    }

    /// The pickup reached directly from the start, if any.
    pub fn first_pickup(&self) -> Option<&LocationId> {
        self.pickups.first()
    }

    /// Number of pickups.
    pub fn len(&self) -> usize {
        self.pickups.len()
    }

    /// Returns `true` if there is nothing to pick up.
    pub fn is_empty(&self) -> bool {
        self.pickups.is_empty()
    }
}

/// Result of a minimum-cost search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostOutcome {
    /// Cheapest total cost found (0 for an order with no pickups).
    pub minimum_cost: f64,
    /// Route achieving `minimum_cost`; `None` when nothing needs picking up.
    pub best_route: Option<Route>,
    /// Number of (start, order) candidates scored.
    pub candidates_evaluated: u64,
}

impl CostOutcome {
    /// Outcome for an order with nothing to pick up.
    pub fn empty() -> Self {
        Self {
            minimum_cost: 0.0,
            best_route: None,
            candidates_evaluated: 0,
        }
    }
}

/// Response body for an outer HTTP layer: `{"minimum_cost": <number>}`.
///
/// # Examples
///
/// ```
/// use u_consolidation::models::{CostOutcome, CostResponse};
///
/// let body = serde_json::to_string(&CostResponse::from(&CostOutcome::empty())).unwrap();
/// assert_eq!(body, r#"{"minimum_cost":0.0}"#);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostResponse {
    /// Cheapest total cost.
    pub minimum_cost: f64,
}

impl From<&CostOutcome> for CostResponse {
    fn from(outcome: &CostOutcome) -> Self {
        Self {
            minimum_cost: outcome.minimum_cost,
        }
    }
}
