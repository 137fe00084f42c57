//! Error types for order validation, configuration, and route search.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::LocationId;

/// Coarse classification of a [`ConsolidationError`].
///
/// Lets an outer layer (HTTP, CLI) map failures to status codes without
/// matching every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The order itself is malformed.
    Validation,
    /// Catalog, distances, pricing or network are incomplete or invalid.
    Configuration,
    /// The search could not produce a route.
    Computation,
}

/// An order failed basic shape checks.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A product was requested with a negative quantity.
    #[error("product {product} has negative quantity {quantity}")]
    NegativeQuantity {
        /// Product code as it appeared in the order.
        product: String,
        /// Offending quantity.
        quantity: i64,
    },
    /// A quantity is a number but not a nonnegative integer that fits `u64`.
    #[error("product {product} has invalid quantity {value}")]
    InvalidQuantity {
        /// Product code as it appeared in the order.
        product: String,
        /// The number as written in the order.
        value: String,
    },
    /// The aggregated weight at a center is too large to represent.
    #[error("order weight at center {center} is not finite")]
    WeightOverflow {
        /// Center whose bucket overflowed.
        center: LocationId,
    },
    /// The order document is not a map of product codes to integers.
    #[error("order is not a map of product codes to integer quantities")]
    MalformedOrder {
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
}

/// Configuration is missing data the computation needs, or holds values
/// outside their allowed range.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// No distance is configured for a leg the route needs.
    #[error("no distance configured from {from} to {to}")]
    MissingDistance {
        /// Leg origin.
        from: LocationId,
        /// Leg destination.
        to: LocationId,
    },
    /// A route referenced a center that has no aggregated weight.
    #[error("center {center} carries no weight for this order")]
    UnknownCenter {
        /// The unexpected center.
        center: LocationId,
    },
    /// A catalog entry points at a center outside the network.
    #[error("product {product} is stocked at unknown center {center}")]
    UnknownSourceCenter {
        /// Catalog product code.
        product: String,
        /// Center named by the entry.
        center: LocationId,
    },
    /// An allowed start is not one of the network's centers.
    #[error("allowed start {center} is not a configured center")]
    UnknownStart {
        /// The offending start.
        center: LocationId,
    },
    /// A catalog weight is not a positive finite number.
    #[error("product {product} has invalid weight {weight}")]
    InvalidWeight {
        /// Catalog product code.
        product: String,
        /// Rejected weight.
        weight: f64,
    },
    /// A distance is negative or not finite.
    #[error("distance from {from} to {to} is invalid: {distance}")]
    InvalidDistance {
        /// Leg origin.
        from: LocationId,
        /// Leg destination.
        to: LocationId,
        /// Rejected distance.
        distance: f64,
    },
    /// A distance entry names a location that is neither the hub nor a center.
    #[error("distance entry references unknown location {location}")]
    UnknownLocation {
        /// The unrecognized endpoint.
        location: LocationId,
    },
    /// The same ordered pair was configured twice.
    #[error("distance from {from} to {to} is configured more than once")]
    DuplicateDistance {
        /// Leg origin.
        from: LocationId,
        /// Leg destination.
        to: LocationId,
    },
    /// A pricing constant is out of range.
    #[error("pricing field {field} has invalid value {value}")]
    InvalidPricing {
        /// Name of the pricing field.
        field: &'static str,
        /// Rejected value.
        value: f64,
    },
    /// The hub was also listed as a pickup center.
    #[error("hub {hub} cannot also be a center")]
    HubIsCenter {
        /// The hub location.
        hub: LocationId,
    },
    /// The configuration document could not be parsed.
    #[error("failed to parse configuration")]
    Parse {
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// The configuration file could not be read.
    #[error("failed to read configuration at {path}")]
    Read {
        /// Requested file path.
        path: PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
}

/// The search finished without a usable route.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ComputationError {
    /// No candidate route was evaluated.
    #[error("no candidate route could be evaluated")]
    NoRoute,
    /// Exhaustive search would exceed the configured candidate cap.
    #[error("search space of {candidates} candidates exceeds limit {limit}")]
    SearchSpaceTooLarge {
        /// Start centers times pickup permutations.
        candidates: CandidateCount,
        /// Configured cap.
        limit: u64,
    },
    /// A candidate route priced to infinity or NaN.
    #[error("route starting at {start} has non-finite cost {cost}")]
    NonFiniteCost {
        /// Start center of the offending candidate.
        start: LocationId,
        /// The computed cost.
        cost: f64,
    },
}

/// Number of candidates in a search space, which may overflow `u64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateCount {
    /// Exact count.
    Exact(u64),
    /// More than `u64::MAX`.
    Overflow,
}

impl std::fmt::Display for CandidateCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exact(n) => write!(f, "{n}"),
            Self::Overflow => f.write_str("more than u64::MAX"),
        }
    }
}

/// Any failure of a consolidation cost computation.
#[derive(Debug, Error)]
pub enum ConsolidationError {
    /// The order is invalid.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The configuration is incomplete or invalid.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    /// The search could not produce a route.
    #[error(transparent)]
    Computation(#[from] ComputationError),
}

impl ConsolidationError {
    /// Returns the coarse kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::Configuration(_) => ErrorKind::Configuration,
            Self::Computation(_) => ErrorKind::Computation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_mapping() {
        let err = ConsolidationError::from(ComputationError::NoRoute);
        assert_eq!(err.kind(), ErrorKind::Computation);

        let err = ConsolidationError::from(ValidationError::NegativeQuantity {
            product: "A".into(),
            quantity: -1,
        });
        assert_eq!(err.kind(), ErrorKind::Validation);

        let err = ConsolidationError::from(ConfigurationError::MissingDistance {
            from: LocationId::new("C1"),
            to: LocationId::new("HUB"),
        });
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn test_messages() {
        let err = ConfigurationError::MissingDistance {
            from: LocationId::new("C1"),
            to: LocationId::new("HUB"),
        };
        assert_eq!(err.to_string(), "no distance configured from C1 to HUB");

        let err = ComputationError::SearchSpaceTooLarge {
            candidates: CandidateCount::Overflow,
            limit: 10,
        };
        assert_eq!(
            err.to_string(),
            "search space of more than u64::MAX candidates exceeds limit 10"
        );

        let err = ValidationError::WeightOverflow {
            center: LocationId::new("C1"),
        };
        assert_eq!(err.to_string(), "order weight at center C1 is not finite");
    }
}
