//! Weight-tiered rate per unit distance.
//!
//! # Rule
//!
//! ```text
//! price(w) = 0                                                   if w <= 0
//!          = base_rate                                           if 0 < w <= base_tier_limit
//!          = base_rate + ceil((w - base_tier_limit) / tier_size) * tier_increment   otherwise
//! ```
//!
//! With nonnegative constants and a positive `tier_size` the result is a
//! non-decreasing, right-continuous step function of weight.

use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;

/// Tiered pricing constants.
///
/// # Examples
///
/// ```
/// use u_consolidation::pricing::TieredPricing;
///
/// // 10 per distance unit up to 5 kg, then +8 for every started 5 kg.
/// let pricing = TieredPricing::new(5.0, 10.0, 5.0, 8.0).unwrap();
/// assert_eq!(pricing.price(0.0), 0.0);
/// assert_eq!(pricing.price(3.0), 10.0);
/// assert_eq!(pricing.price(5.0), 10.0);
/// assert_eq!(pricing.price(5.5), 18.0);
/// assert_eq!(pricing.price(10.0), 18.0);
/// assert_eq!(pricing.price(10.1), 26.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPricing")]
pub struct TieredPricing {
    base_tier_limit: f64,
    base_rate: f64,
    tier_size: f64,
    tier_increment: f64,
}

#[derive(Deserialize)]
struct RawPricing {
    base_tier_limit: f64,
    base_rate: f64,
    tier_size: f64,
    tier_increment: f64,
}

impl TryFrom<RawPricing> for TieredPricing {
    type Error = ConfigurationError;

    fn try_from(raw: RawPricing) -> Result<Self, Self::Error> {
        Self::new(
            raw.base_tier_limit,
            raw.base_rate,
            raw.tier_size,
            raw.tier_increment,
        )
    }
}

impl TieredPricing {
    /// Creates a pricing rule.
    ///
    /// Fails if any constant is negative or not finite, or if `tier_size` is
    /// not strictly positive.
    pub fn new(
        base_tier_limit: f64,
        base_rate: f64,
        tier_size: f64,
        tier_increment: f64,
    ) -> Result<Self, ConfigurationError> {
        check_nonnegative("base_tier_limit", base_tier_limit)?;
        check_nonnegative("base_rate", base_rate)?;
        check_nonnegative("tier_increment", tier_increment)?;
        if !tier_size.is_finite() || tier_size <= 0.0 {
            return Err(ConfigurationError::InvalidPricing {
                field: "tier_size",
                value: tier_size,
            });
        }
        Ok(Self {
            base_tier_limit,
            base_rate,
            tier_size,
            tier_increment,
        })
    }

    /// Rate per unit distance for carrying `weight`.
    pub fn price(&self, weight: f64) -> f64 {
        if weight <= 0.0 {
            return 0.0;
        }
        if weight <= self.base_tier_limit {
            return self.base_rate;
        }
        let extra_tiers = ((weight - self.base_tier_limit) / self.tier_size).ceil();
        self.base_rate + extra_tiers * self.tier_increment
    }

    /// Upper weight bound of the base tier.
    pub fn base_tier_limit(&self) -> f64 {
        self.base_tier_limit
    }

    /// Rate charged within the base tier.
    pub fn base_rate(&self) -> f64 {
        self.base_rate
    }

    /// Weight span of each tier above the base.
    pub fn tier_size(&self) -> f64 {
        self.tier_size
    }

    /// Rate added per tier above the base.
    pub fn tier_increment(&self) -> f64 {
        self.tier_increment
    }
}

fn check_nonnegative(field: &'static str, value: f64) -> Result<(), ConfigurationError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ConfigurationError::InvalidPricing { field, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TieredPricing {
        TieredPricing::new(5.0, 10.0, 5.0, 8.0).expect("valid")
    }

    #[test]
    fn test_nonpositive_weight_is_free() {
        let p = sample();
        assert_eq!(p.price(0.0), 0.0);
        assert_eq!(p.price(-3.0), 0.0);
    }

    #[test]
    fn test_tier_boundaries_right_continuous() {
        let p = sample();
        assert_eq!(p.price(1e-9), 10.0);
        assert_eq!(p.price(5.0), 10.0);
        assert_eq!(p.price(5.0 + 1e-9), 18.0);
        assert_eq!(p.price(15.0), 26.0);
        assert_eq!(p.price(15.5), 34.0);
    }

    #[test]
    fn test_monotonic_over_grid() {
        let p = sample();
        let mut prev = p.price(0.0);
        for i in 1..=400 {
            let w = f64::from(i) * 0.25;
            let cur = p.price(w);
            assert!(cur >= prev, "price dropped at weight {w}");
            prev = cur;
        }
    }

    #[test]
    fn test_zero_base_tier() {
        let p = TieredPricing::new(0.0, 2.0, 1.0, 1.0).expect("valid");
        assert_eq!(p.price(0.5), 3.0);
        assert_eq!(p.price(2.0), 4.0);
    }

    #[test]
    fn test_invalid_constants() {
        assert!(TieredPricing::new(-1.0, 10.0, 5.0, 8.0).is_err());
        assert!(TieredPricing::new(5.0, f64::NAN, 5.0, 8.0).is_err());
        assert!(TieredPricing::new(5.0, 10.0, 0.0, 8.0).is_err());
        assert!(TieredPricing::new(5.0, 10.0, 5.0, -8.0).is_err());
        let err = TieredPricing::new(5.0, 10.0, -2.0, 8.0).expect_err("invalid");
        assert!(matches!(
            err,
            ConfigurationError::InvalidPricing {
                field: "tier_size",
                ..
            }
        ));
    }

    #[test]
    fn test_deserialize_validates() {
        let p: TieredPricing = serde_json::from_str(
            r#"{"base_tier_limit": 5, "base_rate": 10, "tier_size": 5, "tier_increment": 8}"#,
        )
        .expect("valid");
        assert_eq!(p, sample());

        let bad = serde_json::from_str::<TieredPricing>(
            r#"{"base_tier_limit": 5, "base_rate": 10, "tier_size": 0, "tier_increment": 8}"#,
        );
        assert!(bad.is_err());
    }
}
