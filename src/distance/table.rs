//! Sparse directed distance table.

use std::collections::HashMap;

use crate::error::ConfigurationError;
use crate::models::LocationId;

/// Directed distances between named locations.
///
/// Entries are keyed by ordered `(from, to)` pairs, so `d(a, b)` and `d(b, a)`
/// may differ. A pair with no entry is missing, not zero: looking it up is a
/// configuration error.
///
/// # Examples
///
/// ```
/// use u_consolidation::distance::DistanceTable;
/// use u_consolidation::models::LocationId;
///
/// let c1 = LocationId::new("C1");
/// let hub = LocationId::new("HUB");
///
/// let mut table = DistanceTable::new();
/// table.insert(c1.clone(), hub.clone(), 4.0).unwrap();
/// assert_eq!(table.get(&c1, &hub).unwrap(), 4.0);
/// assert!(table.get(&hub, &c1).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DistanceTable {
    rows: HashMap<LocationId, HashMap<LocationId, f64>>,
}

impl DistanceTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from `(from, to, distance)` triples.
    ///
    /// Fails on an invalid distance or on a pair listed twice.
    pub fn from_entries<I>(entries: I) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = (LocationId, LocationId, f64)>,
    {
        let mut table = Self::new();
        for (from, to, distance) in entries {
            if table.contains(&from, &to) {
                return Err(ConfigurationError::DuplicateDistance { from, to });
            }
            table.insert(from, to, distance)?;
        }
        Ok(table)
    }

    /// Sets the distance from `from` to `to`, replacing any previous value.
    ///
    /// Fails if `distance` is negative or not finite.
    pub fn insert(
        &mut self,
        from: LocationId,
        to: LocationId,
        distance: f64,
    ) -> Result<(), ConfigurationError> {
        if !distance.is_finite() || distance < 0.0 {
            return Err(ConfigurationError::InvalidDistance { from, to, distance });
        }
        self.rows.entry(from).or_default().insert(to, distance);
        Ok(())
    }

    /// Sets the same distance in both directions.
    pub fn insert_symmetric(
        &mut self,
        a: LocationId,
        b: LocationId,
        distance: f64,
    ) -> Result<(), ConfigurationError> {
        self.insert(a.clone(), b.clone(), distance)?;
        self.insert(b, a, distance)
    }

    /// Returns the distance from `from` to `to`.
    pub fn get(&self, from: &LocationId, to: &LocationId) -> Result<f64, ConfigurationError> {
        self.rows
            .get(from)
            .and_then(|row| row.get(to))
            .copied()
            .ok_or_else(|| ConfigurationError::MissingDistance {
                from: from.clone(),
                to: to.clone(),
            })
    }

    /// Returns `true` if a distance is configured for the ordered pair.
    pub fn contains(&self, from: &LocationId, to: &LocationId) -> bool {
        self.rows.get(from).is_some_and(|row| row.contains_key(to))
    }

    /// Number of configured pairs.
    pub fn len(&self) -> usize {
        self.rows.values().map(HashMap::len).sum()
    }

    /// Returns `true` if no pair is configured.
    pub fn is_empty(&self) -> bool {
        self.rows.values().all(HashMap::is_empty)
    }
}
