use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::catalog::SkuId;
use crate::domain::money::Money;
use crate::domain::partner::PartnerId;
use crate::error::MarketError;

/// Order identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub Uuid);

impl OrderId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for OrderId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for OrderId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Order status lifecycle.
///
/// `Pending -> Fulfilled -> Shipped`, with `Pending -> Cancelled` as the
/// alternate terminal branch. `Shipped` and `Cancelled` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Fulfilled,
    Shipped,
    Cancelled,
}

impl OrderStatus {
    /// Legal edges of the lifecycle.
    pub fn allows(self, next: OrderStatus) -> bool {
        matches!(
            (self, next),
            (OrderStatus::Pending, OrderStatus::Fulfilled)
                | (OrderStatus::Pending, OrderStatus::Cancelled)
                | (OrderStatus::Fulfilled, OrderStatus::Shipped)
        )
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Shipped | OrderStatus::Cancelled)
    }
}

impl core::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let s = match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Fulfilled => "fulfilled",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Cancelled => "cancelled",
        };
        f.write_str(s)
    }
}

/// One SKU/quantity/price tuple within an order.
///
/// `unit_price` is a snapshot taken at placement; later catalog price changes
/// never alter it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub sku_id: SkuId,
    pub quantity: u32,
    pub unit_price: Money,
}

impl LineItem {
    /// Extended amount: quantity × frozen unit price.
    pub fn extended(&self) -> Money {
        self.unit_price.times(self.quantity)
    }
}

/// A requested line, before prices are resolved against the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineRequest {
    pub sku_id: SkuId,
    pub quantity: u32,
}

/// A buyer's order. After creation only `status` mutates; orders are never
/// deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub buyer: String,
    pub partner_id: PartnerId,
    pub lines: Vec<LineItem>,
    /// Sum of line extensions, frozen at placement.
    pub total: Money,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Creates a pending order; the total is computed from the frozen lines.
    pub fn place(buyer: impl Into<String>, partner_id: PartnerId, lines: Vec<LineItem>) -> Self {
        let total = lines
            .iter()
            .fold(Money::ZERO, |acc, line| acc + line.extended());
        Self {
            id: OrderId::new(),
            buyer: buyer.into(),
            partner_id,
            lines,
            total,
            status: OrderStatus::Pending,
            created_at: Utc::now(),
        }
    }

    /// Applies a transition, rejecting edges not in the lifecycle table.
    pub fn transition(&mut self, next: OrderStatus) -> Result<(), MarketError> {
        if !self.status.allows(next) {
            return Err(MarketError::InvalidTransition {
                from: self.status,
                to: next,
            });
        }
        self.status = next;
        Ok(())
    }
}
