//! Location identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a distribution center or of the hub.
///
/// Ordering is lexicographic on the identifier, which fixes the order in
/// which centers are aggregated and permuted.
///
/// # Examples
///
/// ```
/// use u_consolidation::models::LocationId;
///
/// let c1 = LocationId::new("C1");
/// assert_eq!(c1.as_str(), "C1");
/// assert_eq!(c1.to_string(), "C1");
/// assert!(LocationId::new("C1") < LocationId::new("C2"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationId(String);

impl LocationId {
    /// Creates an identifier from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LocationId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for LocationId {
    fn from(id: String) -> Self {
        Self(id)
    }
}
