use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::money::Money;

/// Catalog item identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkuId(pub Uuid);

impl SkuId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SkuId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for SkuId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// A catalog item owned by the operator.
///
/// Mutated only via `adjust` (operator replace) or `deduct` (fulfillment
/// delta). The two paths are deliberately distinct so the administrative
/// overwrite cannot be confused with the internal delta.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sku {
    pub id: SkuId,
    pub name: String,
    pub category: String,
    pub unit_price: Money,
    /// Stock-on-hand. Overlapping fulfillments can drive this negative; the
    /// engine does not clamp at zero.
    pub stock: i64,
}

impl Sku {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        unit_price: Money,
        stock: i64,
    ) -> Self {
        Self {
            id: SkuId::new(),
            name: name.into(),
            category: category.into(),
            unit_price,
            stock,
        }
    }

    /// Operator replace of stock and price.
    pub fn adjust(&mut self, new_stock: i64, new_price: Money) {
        self.stock = new_stock;
        self.unit_price = new_price;
    }

    /// Fulfillment delta: signed subtraction, no floor.
    pub fn deduct(&mut self, quantity: u32) {
        self.stock -= i64::from(quantity);
    }
}
