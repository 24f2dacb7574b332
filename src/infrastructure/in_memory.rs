use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::{RwLock, watch};

use crate::domain::catalog::{Sku, SkuId};
use crate::domain::order::{Order, OrderId};
use crate::domain::partner::{Partner, PartnerId};
use crate::domain::ports::{CatalogStore, OrderStore, PartnerStore};
use crate::error::Result;

/// A thread-safe in-memory catalog store.
///
/// Documents live in an insertion-ordered `Vec` behind `Arc<RwLock<_>>`; a
/// `watch` channel republishes the full collection after every write, which
/// is the snapshot-notification contract views subscribe to.
#[derive(Clone)]
pub struct InMemoryCatalogStore {
    skus: Arc<RwLock<Vec<Sku>>>,
    snapshots: Arc<watch::Sender<Vec<Sku>>>,
}

impl InMemoryCatalogStore {
    pub fn new() -> Self {
        let (snapshots, _) = watch::channel(Vec::new());
        Self {
            skus: Arc::new(RwLock::new(Vec::new())),
            snapshots: Arc::new(snapshots),
        }
    }
}

impl Default for InMemoryCatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogStore for InMemoryCatalogStore {
    async fn put(&self, sku: Sku) -> Result<()> {
        let mut skus = self.skus.write().await;
        match skus.iter_mut().find(|s| s.id == sku.id) {
            Some(slot) => *slot = sku,
            None => skus.push(sku),
        }
        let _ = self.snapshots.send(skus.clone());
        Ok(())
    }

    async fn get(&self, id: SkuId) -> Result<Option<Sku>> {
        let skus = self.skus.read().await;
        Ok(skus.iter().find(|s| s.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Sku>> {
        let skus = self.skus.read().await;
        Ok(skus.clone())
    }

    fn subscribe(&self) -> watch::Receiver<Vec<Sku>> {
        self.snapshots.subscribe()
    }
}

/// A thread-safe in-memory partner store. Listing preserves onboarding order,
/// which is the sequence round-robin assignment cycles.
#[derive(Clone)]
pub struct InMemoryPartnerStore {
    partners: Arc<RwLock<Vec<Partner>>>,
    snapshots: Arc<watch::Sender<Vec<Partner>>>,
}

impl InMemoryPartnerStore {
    pub fn new() -> Self {
        let (snapshots, _) = watch::channel(Vec::new());
        Self {
            partners: Arc::new(RwLock::new(Vec::new())),
            snapshots: Arc::new(snapshots),
        }
    }
}

impl Default for InMemoryPartnerStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PartnerStore for InMemoryPartnerStore {
    async fn put(&self, partner: Partner) -> Result<()> {
        let mut partners = self.partners.write().await;
        match partners.iter_mut().find(|p| p.id == partner.id) {
            Some(slot) => *slot = partner,
            None => partners.push(partner),
        }
        let _ = self.snapshots.send(partners.clone());
        Ok(())
    }

    async fn get(&self, id: PartnerId) -> Result<Option<Partner>> {
        let partners = self.partners.read().await;
        Ok(partners.iter().find(|p| p.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Partner>> {
        let partners = self.partners.read().await;
        Ok(partners.clone())
    }

    fn subscribe(&self) -> watch::Receiver<Vec<Partner>> {
        self.snapshots.subscribe()
    }
}

/// A thread-safe in-memory order store, insertion-ordered by placement.
#[derive(Clone)]
pub struct InMemoryOrderStore {
    orders: Arc<RwLock<Vec<Order>>>,
    snapshots: Arc<watch::Sender<Vec<Order>>>,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        let (snapshots, _) = watch::channel(Vec::new());
        Self {
            orders: Arc::new(RwLock::new(Vec::new())),
            snapshots: Arc::new(snapshots),
        }
    }
}

impl Default for InMemoryOrderStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn put(&self, order: Order) -> Result<()> {
        let mut orders = self.orders.write().await;
        match orders.iter_mut().find(|o| o.id == order.id) {
            Some(slot) => *slot = order,
            None => orders.push(order),
        }
        let _ = self.snapshots.send(orders.clone());
        Ok(())
    }

    async fn get(&self, id: OrderId) -> Result<Option<Order>> {
        let orders = self.orders.read().await;
        Ok(orders.iter().find(|o| o.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Order>> {
        let orders = self.orders.read().await;
        Ok(orders.clone())
    }

    fn subscribe(&self) -> watch::Receiver<Vec<Order>> {
        self.snapshots.subscribe()
    }
}
