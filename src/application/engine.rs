use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::application::assignment::assign;
use crate::domain::catalog::{Sku, SkuId};
use crate::domain::money::Money;
use crate::domain::order::{LineItem, LineRequest, Order, OrderId, OrderStatus};
use crate::domain::partner::{Partner, PartnerId};
use crate::domain::ports::{CatalogStoreBox, OrderStoreBox, PartnerStoreBox};
use crate::error::{MarketError, Result};

/// The main entry point for the order/credit/inventory engine.
///
/// `OrderEngine` owns the storage backends and sequences every mutation as a
/// series of single-document atomic writes. It holds no state across calls
/// except the round-robin assignment cursor. Multi-document effects (order
/// write + credit debit, N stock deductions per fulfillment) are chained
/// without an enclosing transaction: each write is individually durable once
/// acknowledged, and callers get at-least-the-prefix-executed semantics on
/// failure.
pub struct OrderEngine {
    catalog: CatalogStoreBox,
    partners: PartnerStoreBox,
    orders: OrderStoreBox,
    /// Last-assigned partner, shared across the whole buyer population.
    /// Locked only to read at the start of placement and to advance on
    /// success, never across store awaits; admission races stay possible.
    cursor: Mutex<Option<PartnerId>>,
}

impl OrderEngine {
    pub fn new(
        catalog: CatalogStoreBox,
        partners: PartnerStoreBox,
        orders: OrderStoreBox,
    ) -> Self {
        Self {
            catalog,
            partners,
            orders,
            cursor: Mutex::new(None),
        }
    }

    // ---- catalog ledger ----

    /// Adds a SKU to the catalog.
    pub async fn add_sku(
        &self,
        name: &str,
        category: &str,
        unit_price: Money,
        stock: i64,
    ) -> Result<Sku> {
        if !unit_price.is_positive() {
            return Err(MarketError::validation("unit price must be positive"));
        }
        if stock < 0 {
            return Err(MarketError::validation("stock must be non-negative"));
        }
        let sku = Sku::new(name, category, unit_price, stock);
        self.catalog.put(sku.clone()).await?;
        info!(sku = %sku.id, name, "sku added");
        Ok(sku)
    }

    /// Operator replace of a SKU's stock and price. Distinct from the
    /// internal delta path used by fulfillment.
    pub async fn adjust_stock_and_price(
        &self,
        sku_id: SkuId,
        new_stock: i64,
        new_price: Money,
    ) -> Result<Sku> {
        if !new_price.is_positive() {
            return Err(MarketError::validation("unit price must be positive"));
        }
        if new_stock < 0 {
            return Err(MarketError::validation("stock must be non-negative"));
        }
        let mut sku = self
            .catalog
            .get(sku_id)
            .await?
            .ok_or(MarketError::UnknownSku(sku_id))?;
        sku.adjust(new_stock, new_price);
        self.catalog.put(sku.clone()).await?;
        info!(sku = %sku.id, stock = new_stock, price = %new_price, "sku adjusted");
        Ok(sku)
    }

    // ---- partner registry / credit ledger ----

    /// Onboards a fulfillment partner; available credit starts at the ceiling.
    pub async fn onboard_partner(
        &self,
        name: &str,
        contact: &str,
        credit_ceiling: Money,
    ) -> Result<Partner> {
        if credit_ceiling.is_negative() {
            return Err(MarketError::validation("credit ceiling must be non-negative"));
        }
        let partner = Partner::onboard(name, contact, credit_ceiling);
        self.partners.put(partner.clone()).await?;
        info!(partner = %partner.id, name, ceiling = %credit_ceiling, "partner onboarded");
        Ok(partner)
    }

    /// Administrative escape hatch: unconditional overwrite of all partner
    /// terms, including setting available credit above the ceiling. This is
    /// also the manual remedy for credit debited by a later-cancelled order.
    pub async fn update_partner_terms(
        &self,
        partner_id: PartnerId,
        name: &str,
        contact: &str,
        credit_ceiling: Money,
        available: Money,
    ) -> Result<Partner> {
        let mut partner = self
            .partners
            .get(partner_id)
            .await?
            .ok_or(MarketError::UnknownPartner(partner_id))?;
        partner.replace_terms(name, contact, credit_ceiling, available);
        self.partners.put(partner.clone()).await?;
        info!(partner = %partner.id, ceiling = %credit_ceiling, available = %available, "partner terms replaced");
        Ok(partner)
    }

    // ---- order engine ----

    /// Places an order for a buyer.
    ///
    /// Prices are frozen from the current catalog snapshot, the round-robin
    /// policy picks the candidate partner, and admission is checked against
    /// that partner's available credit as read in this call. A rejected
    /// placement leaves every ledger and the assignment cursor unchanged. On
    /// admission the order write and the credit debit are two independent
    /// single-document writes, not atomic as a pair.
    pub async fn place_order(&self, buyer: &str, requests: &[LineRequest]) -> Result<Order> {
        if requests.is_empty() {
            return Err(MarketError::validation("order must have at least one line item"));
        }
        if requests.iter().any(|r| r.quantity == 0) {
            return Err(MarketError::validation("line item quantity must be at least 1"));
        }

        let catalog = self.catalog.list().await?;
        if catalog.is_empty() {
            return Err(MarketError::NoCatalog);
        }
        let partners = self.partners.list().await?;
        if partners.is_empty() {
            return Err(MarketError::NoPartner);
        }

        // Freeze unit prices from the snapshot read above.
        let mut lines = Vec::with_capacity(requests.len());
        for request in requests {
            let sku = catalog
                .iter()
                .find(|s| s.id == request.sku_id)
                .ok_or(MarketError::UnknownSku(request.sku_id))?;
            lines.push(LineItem {
                sku_id: sku.id,
                quantity: request.quantity,
                unit_price: sku.unit_price,
            });
        }
        let total = lines
            .iter()
            .fold(Money::ZERO, |acc, line| acc + line.extended());

        let cursor = *self.cursor.lock().await;
        let (candidate, next_cursor) = assign(&partners, cursor);

        if total > candidate.available {
            let shortfall = total - candidate.available;
            warn!(buyer, partner = %candidate.id, total = %total, shortfall = %shortfall,
                "order rejected: credit exceeded");
            return Err(MarketError::CreditExceeded { shortfall });
        }

        // The candidate's rotation slot is consumed once admission passes.
        *self.cursor.lock().await = Some(next_cursor);

        let order = Order::place(buyer, candidate.id, lines);
        self.orders.put(order.clone()).await?;

        let mut debited = candidate.clone();
        debited.debit(total);
        self.partners.put(debited).await?;

        info!(order = %order.id, buyer, partner = %candidate.id, total = %total, "order admitted");
        Ok(order)
    }

    /// Requests an order status transition.
    ///
    /// Illegal edges are rejected with `InvalidTransition`. The
    /// `Pending -> Fulfilled` edge is the only one with a side effect: each
    /// line item's SKU is re-read immediately before its stock is
    /// decremented, and stock is allowed to go negative. Cancellation does
    /// not restore credit debited at placement.
    pub async fn set_order_status(&self, order_id: OrderId, next: OrderStatus) -> Result<Order> {
        let mut order = self
            .orders
            .get(order_id)
            .await?
            .ok_or(MarketError::UnknownOrder(order_id))?;
        order.transition(next)?;
        self.orders.put(order.clone()).await?;

        if next == OrderStatus::Fulfilled {
            for line in &order.lines {
                // Read the current stock value just before decrementing; a
                // best-effort staleness mitigation, not a guarantee.
                if let Some(mut sku) = self.catalog.get(line.sku_id).await? {
                    sku.deduct(line.quantity);
                    let stock = sku.stock;
                    self.catalog.put(sku).await?;
                    debug!(order = %order.id, sku = %line.sku_id, quantity = line.quantity,
                        stock, "stock deducted");
                }
            }
        }

        info!(order = %order.id, status = %next, "order transitioned");
        Ok(order)
    }

    // ---- reads ----

    pub async fn catalog(&self) -> Result<Vec<Sku>> {
        self.catalog.list().await
    }

    pub async fn partners(&self) -> Result<Vec<Partner>> {
        self.partners.list().await
    }

    pub async fn orders(&self) -> Result<Vec<Order>> {
        self.orders.list().await
    }

    pub async fn orders_for_buyer(&self, buyer: &str) -> Result<Vec<Order>> {
        let mut orders = self.orders.list().await?;
        orders.retain(|o| o.buyer == buyer);
        Ok(orders)
    }

    pub async fn orders_for_partner(&self, partner_id: PartnerId) -> Result<Vec<Order>> {
        let mut orders = self.orders.list().await?;
        orders.retain(|o| o.partner_id == partner_id);
        Ok(orders)
    }

    /// Current assignment cursor (last assignee), mainly for diagnostics.
    pub async fn assignment_cursor(&self) -> Option<PartnerId> {
        *self.cursor.lock().await
    }
}
