use async_trait::async_trait;
use std::time::Duration;
use tokio::sync::watch;

use crate::domain::catalog::{Sku, SkuId};
use crate::domain::order::{Order, OrderId};
use crate::domain::partner::{Partner, PartnerId};
use crate::domain::ports::{CatalogStore, OrderStore, PartnerStore};
use crate::error::{MarketError, Result};

/// Bounded exponential backoff over any store port.
///
/// Each call is attempted up to `max_attempts` times, with the delay doubling
/// between attempts. Exhaustion surfaces as `MarketError::Store`; no
/// compensating action is taken, so callers see at-least-the-prefix-executed
/// semantics for multi-write operations.
pub struct RetryStore<S> {
    inner: S,
    max_attempts: u32,
    base_delay: Duration,
}

impl<S> RetryStore<S> {
    pub fn new(inner: S) -> Self {
        Self::with_policy(inner, 3, Duration::from_millis(25))
    }

    pub fn with_policy(inner: S, max_attempts: u32, base_delay: Duration) -> Self {
        assert!(max_attempts >= 1, "max_attempts must be at least 1");
        Self {
            inner,
            max_attempts,
            base_delay,
        }
    }
}

/// Re-issues `$op` until it succeeds or attempts run out. The operation
/// expression is re-evaluated on every iteration.
macro_rules! with_backoff {
    ($self:ident, $op:expr) => {{
        let mut delay = $self.base_delay;
        let mut attempt = 1u32;
        loop {
            match $op.await {
                Ok(value) => break Ok(value),
                Err(err) if attempt >= $self.max_attempts => {
                    break Err(MarketError::Store(err.to_string()));
                }
                Err(err) => {
                    tracing::warn!(error = %err, attempt, "store call failed, backing off");
                    tokio::time::sleep(delay).await;
                    delay *= 2;
                    attempt += 1;
                }
            }
        }
    }};
}

#[async_trait]
impl<S: CatalogStore> CatalogStore for RetryStore<S> {
    async fn put(&self, sku: Sku) -> Result<()> {
        with_backoff!(self, self.inner.put(sku.clone()))
    }

    async fn get(&self, id: SkuId) -> Result<Option<Sku>> {
        with_backoff!(self, self.inner.get(id))
    }

    async fn list(&self) -> Result<Vec<Sku>> {
        with_backoff!(self, self.inner.list())
    }

    fn subscribe(&self) -> watch::Receiver<Vec<Sku>> {
        self.inner.subscribe()
    }
}

#[async_trait]
impl<S: PartnerStore> PartnerStore for RetryStore<S> {
    async fn put(&self, partner: Partner) -> Result<()> {
        with_backoff!(self, self.inner.put(partner.clone()))
    }

    async fn get(&self, id: PartnerId) -> Result<Option<Partner>> {
        with_backoff!(self, self.inner.get(id))
    }

    async fn list(&self) -> Result<Vec<Partner>> {
        with_backoff!(self, self.inner.list())
    }

    fn subscribe(&self) -> watch::Receiver<Vec<Partner>> {
        self.inner.subscribe()
    }
}

#[async_trait]
impl<S: OrderStore> OrderStore for RetryStore<S> {
    async fn put(&self, order: Order) -> Result<()> {
        with_backoff!(self, self.inner.put(order.clone()))
    }

    async fn get(&self, id: OrderId) -> Result<Option<Order>> {
        with_backoff!(self, self.inner.get(id))
    }

    async fn list(&self) -> Result<Vec<Order>> {
        with_backoff!(self, self.inner.list())
    }

    fn subscribe(&self) -> watch::Receiver<Vec<Order>> {
        self.inner.subscribe()
    }
}
