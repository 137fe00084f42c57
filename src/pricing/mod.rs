//! Pricing rules mapping shipped weight to a rate per unit distance.

mod tiered;

pub use tiered::TieredPricing;
