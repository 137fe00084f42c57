//! Exhaustive route search.
//!
//! # Algorithm
//!
//! For every allowed start center, and for every permutation of the centers
//! holding weight (visited in lexicographic order), score the candidate with
//! [`RouteCostEvaluator`] and keep the cheapest. A candidate replaces the
//! incumbent only when strictly cheaper, so ties go to the first candidate
//! enumerated.
//!
//! # Complexity
//!
//! O(S × P!) evaluations for S allowed starts and P required centers, each
//! O(P). This is only reasonable while P stays small (about 8 or fewer);
//! [`SearchLimits`] rejects larger spaces up front. Beyond that the search
//! should be replaced by a subset-indexed dynamic program over the required
//! centers (Held-Karp style) instead of raising the cap.
//!
//! # Reference
//!
//! Held, M. & Karp, R.M. (1962). "A dynamic programming approach to
//! sequencing problems", *J. SIAM* 10(1), 196-210.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{CandidateCount, ComputationError, ConsolidationError};
use crate::evaluation::RouteCostEvaluator;
use crate::models::{CostOutcome, LocationId, Route};

/// Upper bound on the number of candidates a search may score.
///
/// # Examples
///
/// ```
/// use u_consolidation::search::SearchLimits;
///
/// assert_eq!(SearchLimits::default().max_candidates, 5_000_000);
/// assert_eq!(SearchLimits::unbounded().max_candidates, u64::MAX);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchLimits {
    /// Largest accepted `starts × pickups!`.
    pub max_candidates: u64,
}

impl SearchLimits {
    /// Default candidate cap.
    pub const DEFAULT_MAX_CANDIDATES: u64 = 5_000_000;

    /// Creates limits with the given cap.
    pub fn new(max_candidates: u64) -> Self {
        Self { max_candidates }
    }

    /// Limits that accept any search space that fits in `u64`.
    pub fn unbounded() -> Self {
        Self::new(u64::MAX)
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_CANDIDATES)
    }
}

/// Brute-force minimum-cost search over start centers and pickup orders.
///
/// # Examples
///
/// ```
/// use u_consolidation::aggregation::CenterWeights;
/// use u_consolidation::distance::DistanceTable;
/// use u_consolidation::evaluation::RouteCostEvaluator;
/// use u_consolidation::models::LocationId;
/// use u_consolidation::pricing::TieredPricing;
/// use u_consolidation::search::RouteSearch;
///
/// let (c1, c2, hub) = (LocationId::new("C1"), LocationId::new("C2"), LocationId::new("HUB"));
///
/// let mut weights = CenterWeights::new();
/// weights.add(c1.clone(), 3.0);
/// let mut table = DistanceTable::new();
/// table.insert(c1.clone(), hub.clone(), 4.0).unwrap();
/// table.insert(c2.clone(), c1.clone(), 3.0).unwrap();
/// let pricing = TieredPricing::new(5.0, 10.0, 5.0, 8.0).unwrap();
///
/// let evaluator = RouteCostEvaluator::new(&weights, &table, &pricing, &hub);
/// let starts = [c2.clone(), c1.clone()];
/// let outcome = RouteSearch::new(evaluator, &starts).run().unwrap();
///
/// assert_eq!(outcome.minimum_cost, 40.0);
/// assert_eq!(outcome.best_route.unwrap().start(), &c1);
/// ```
pub struct RouteSearch<'a> {
    evaluator: RouteCostEvaluator<'a>,
    starts: &'a [LocationId],
    limits: SearchLimits,
}

impl<'a> RouteSearch<'a> {
    /// Creates a search over the given allowed start centers.
    pub fn new(evaluator: RouteCostEvaluator<'a>, starts: &'a [LocationId]) -> Self {
        Self {
            evaluator,
            starts,
            limits: SearchLimits::default(),
        }
    }

    /// Overrides the candidate cap.
    pub fn with_limits(mut self, limits: SearchLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Number of (start, order) candidates the search would score.
    pub fn candidate_count(&self) -> CandidateCount {
        let pickups = self.evaluator.weights().len() as u64;
        (1..=pickups)
            .try_fold(1u64, |acc, k| acc.checked_mul(k))
            .and_then(|perms| perms.checked_mul(self.starts.len() as u64))
            .map_or(CandidateCount::Overflow, CandidateCount::Exact)
    }

    /// Finds the cheapest route.
    ///
    /// Returns a zero-cost outcome without a route when nothing needs
    /// picking up. Fails with the first evaluator error, with
    /// [`ComputationError::SearchSpaceTooLarge`] when the space exceeds the
    /// limits, with [`ComputationError::NonFiniteCost`] when a candidate
    /// prices to infinity or NaN, and with [`ComputationError::NoRoute`] when
    /// there are pickups but no allowed start.
    pub fn run(&self) -> Result<CostOutcome, ConsolidationError> {
        let mut order = self.evaluator.weights().centers();
        if order.is_empty() {
            return Ok(CostOutcome::empty());
        }

        let candidates = self.candidate_count();
        match candidates {
            CandidateCount::Exact(n) if n <= self.limits.max_candidates => {}
            _ => {
                return Err(ComputationError::SearchSpaceTooLarge {
                    candidates,
                    limit: self.limits.max_candidates,
                }
                .into())
            }
        }

        let mut best: Option<(f64, Route)> = None;
        let mut evaluated: u64 = 0;

        // `order` starts sorted, and `next_permutation` leaves it sorted again
        // after the last permutation.
        for start in self.starts {
            loop {
                let cost = self.evaluator.route_cost(start, &order)?;
                evaluated += 1;
                if !cost.is_finite() {
                    return Err(ComputationError::NonFiniteCost {
                        start: start.clone(),
                        cost,
                    }
                    .into());
                }
                if best.as_ref().map_or(true, |(incumbent, _)| cost < *incumbent) {
                    trace!(%start, ?order, cost, "new best route");
                    best = Some((cost, Route::new(start.clone(), order.clone())));
                }
                if !next_permutation(&mut order) {
                    break;
                }
            }
        }

        let (minimum_cost, route) = best.ok_or(ComputationError::NoRoute)?;
        debug!(
            minimum_cost,
            start = %route.start(),
            pickups = route.len(),
            evaluated,
            "route search finished"
        );
        Ok(CostOutcome {
            minimum_cost,
            best_route: Some(route),
            candidates_evaluated: evaluated,
        })
    }
}

/// Rearranges `items` into the next lexicographic permutation.
///
/// Returns `false` (leaving `items` in ascending order) once the last
/// permutation has been passed.
fn next_permutation<T: Ord>(items: &mut [T]) -> bool {
    let n = items.len();
    if n < 2 {
        return false;
    }

    // Longest non-increasing suffix starts at `pivot + 1`.
    let mut i = n - 1;
    while i > 0 && items[i - 1] >= items[i] {
        i -= 1;
    }
    if i == 0 {
        items.reverse();
        return false;
    }
    let pivot = i - 1;

    let mut j = n - 1;
    while items[j] <= items[pivot] {
        j -= 1;
    }
    items.swap(pivot, j);
    items[i..].reverse();
    true
}
