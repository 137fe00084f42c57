//! Customer order type.

use std::collections::BTreeMap;

use serde_json::Number;

use crate::error::ValidationError;

/// A validated order: product code to nonnegative quantity.
///
/// Negative quantities are rejected at construction, so every `Order` that
/// exists is safe to aggregate. Product codes are not checked against any
/// catalog; codes the catalog does not know are ignored downstream.
///
/// # Examples
///
/// ```
/// use u_consolidation::models::Order;
///
/// let order = Order::from_json_str(r#"{"A": 1, "B": 0}"#).unwrap();
/// assert_eq!(order.quantity("A"), 1);
/// assert_eq!(order.quantity("missing"), 0);
///
/// assert!(Order::from_json_str(r#"{"A": -1}"#).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Order {
    lines: BTreeMap<String, u64>,
}

impl Order {
    /// Creates an empty order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an order from `(code, quantity)` lines.
    ///
    /// Repeated codes are summed. Fails on the first negative quantity.
    pub fn from_lines<I, K>(lines: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = (K, i64)>,
        K: Into<String>,
    {
        let mut order = Self::new();
        for (code, quantity) in lines {
            let code = code.into();
            let quantity = u64::try_from(quantity).map_err(|_| {
                ValidationError::NegativeQuantity {
                    product: code.clone(),
                    quantity,
                }
            })?;
            order.add(code, quantity);
        }
        Ok(order)
    }

    /// Parses a JSON object of product codes to integer quantities.
    ///
    /// Any integer from 0 to `u64::MAX` is accepted. Negative integers fail
    /// with [`ValidationError::NegativeQuantity`]; fractional or out-of-range
    /// numbers with [`ValidationError::InvalidQuantity`].
    pub fn from_json_str(json: &str) -> Result<Self, ValidationError> {
        let raw: BTreeMap<String, Number> = serde_json::from_str(json)
            .map_err(|source| ValidationError::MalformedOrder { source })?;
        let mut order = Self::new();
        for (code, value) in raw {
            let quantity = match (value.as_u64(), value.as_i64()) {
                (Some(quantity), _) => quantity,
                (None, Some(quantity)) => {
                    return Err(ValidationError::NegativeQuantity {
                        product: code,
                        quantity,
                    })
                }
                (None, None) => {
                    return Err(ValidationError::InvalidQuantity {
                        product: code,
                        value: value.to_string(),
                    })
                }
            };
            order.add(code, quantity);
        }
        Ok(order)
    }

    fn add(&mut self, code: String, quantity: u64) {
        let line = self.lines.entry(code).or_insert(0);
        *line = line.saturating_add(quantity);
    }

    /// Quantity requested for `code` (0 if absent).
    pub fn quantity(&self, code: &str) -> u64 {
        self.lines.get(code).copied().unwrap_or(0)
    }

    /// Iterates over order lines in product-code order.
    pub fn lines(&self) -> impl Iterator<Item = (&str, u64)> {
        self.lines.iter().map(|(code, &qty)| (code.as_str(), qty))
    }

    /// Returns `true` if no product has a positive quantity.
    pub fn is_empty(&self) -> bool {
        self.lines.values().all(|&qty| qty == 0)
    }
}
