//! Hub and center topology.

use super::LocationId;
use crate::error::ConfigurationError;

/// The consolidation hub, the fixed set of pickup centers, and the centers a
/// route may start from.
///
/// Allowed starts default to every center, in the order the centers were
/// given.
///
/// # Examples
///
/// ```
/// use u_consolidation::models::{LocationId, Network};
///
/// let network = Network::new(
///     LocationId::new("HUB"),
///     vec![LocationId::new("C1"), LocationId::new("C2")],
/// )
/// .unwrap();
/// assert_eq!(network.hub().as_str(), "HUB");
/// assert_eq!(network.allowed_starts().len(), 2);
/// assert!(network.contains_center(&LocationId::new("C1")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Network {
    hub: LocationId,
    centers: Vec<LocationId>,
    allowed_starts: Vec<LocationId>,
}

impl Network {
    /// Creates a network. Repeated centers are kept once.
    ///
    /// Fails if the hub is also listed as a center.
    pub fn new(hub: LocationId, centers: Vec<LocationId>) -> Result<Self, ConfigurationError> {
        if centers.contains(&hub) {
            return Err(ConfigurationError::HubIsCenter { hub });
        }
        let unique = dedup_in_order(centers);
        Ok(Self {
            hub,
            allowed_starts: unique.clone(),
            centers: unique,
        })
    }

    /// Restricts the centers a route may start from.
    ///
    /// Repeated starts are kept once, at their first position. Fails if any
    /// start is not one of this network's centers.
    pub fn with_allowed_starts(
        mut self,
        starts: Vec<LocationId>,
    ) -> Result<Self, ConfigurationError> {
        if let Some(center) = starts.iter().find(|s| !self.contains_center(s)) {
            return Err(ConfigurationError::UnknownStart {
                center: center.clone(),
            });
        }
        self.allowed_starts = dedup_in_order(starts);
        Ok(self)
    }

    /// The single delivery destination.
    pub fn hub(&self) -> &LocationId {
        &self.hub
    }

    /// All pickup centers.
    pub fn centers(&self) -> &[LocationId] {
        &self.centers
    }

    /// Centers a route may start from, in search order.
    pub fn allowed_starts(&self) -> &[LocationId] {
        &self.allowed_starts
    }

    /// Returns `true` if `id` is one of the pickup centers.
    pub fn contains_center(&self, id: &LocationId) -> bool {
        self.centers.contains(id)
    }
}

fn dedup_in_order(ids: Vec<LocationId>) -> Vec<LocationId> {
    let mut unique: Vec<LocationId> = Vec::with_capacity(ids.len());
    for id in ids {
        if !unique.contains(&id) {
            unique.push(id);
        }
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(names: &[&str]) -> Vec<LocationId> {
        names.iter().map(|n| LocationId::new(*n)).collect()
    }

    #[test]
    fn test_hub_cannot_be_center() {
        let err = Network::new(LocationId::new("C1"), ids(&["C1", "C2"])).expect_err("hub");
        assert!(matches!(err, ConfigurationError::HubIsCenter { .. }));
    }

    #[test]
    fn test_duplicate_centers_collapsed() {
        let network = Network::new(LocationId::new("HUB"), ids(&["C2", "C1", "C2"])).expect("valid");
        assert_eq!(network.centers(), ids(&["C2", "C1"]).as_slice());
        assert_eq!(network.allowed_starts(), ids(&["C2", "C1"]).as_slice());
    }

    #[test]
    fn test_with_allowed_starts() {
        let network = Network::new(LocationId::new("HUB"), ids(&["C1", "C2", "C3"]))
            .expect("valid")
            .with_allowed_starts(ids(&["C3"]))
            .expect("known start");
        assert_eq!(network.allowed_starts(), ids(&["C3"]).as_slice());
        assert_eq!(network.centers().len(), 3);
    }

    #[test]
    fn test_unknown_start_rejected() {
        let err = Network::new(LocationId::new("HUB"), ids(&["C1"]))
            .expect("valid")
            .with_allowed_starts(ids(&["C9"]))
            .expect_err("unknown start");
        assert!(matches!(err, ConfigurationError::UnknownStart { .. }));
    }

    #[test]
    fn test_duplicate_starts_collapsed() {
        let network = Network::new(LocationId::new("HUB"), ids(&["C1", "C2", "C3"]))
            .expect("valid")
            .with_allowed_starts(ids(&["C3", "C1", "C3", "C1"]))
            .expect("known starts");
        assert_eq!(network.allowed_starts(), ids(&["C3", "C1"]).as_slice());
    }
}
