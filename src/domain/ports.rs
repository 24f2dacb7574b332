//! Store ports shared by all three collections.
//!
//! - `put` is a full-document atomic replace (insert or overwrite). The store
//!   guarantees isolation between concurrent writes to the *same* document
//!   and nothing across documents.
//! - `get`/`list` return a snapshot that is authoritative as of delivery.
//! - `subscribe` yields the full collection again after every member write;
//!   delivery order across collections is not guaranteed.

use async_trait::async_trait;
use tokio::sync::watch;

use super::catalog::{Sku, SkuId};
use super::order::{Order, OrderId};
use super::partner::{Partner, PartnerId};
use crate::error::Result;

#[async_trait]
pub trait CatalogStore: Send + Sync {
    async fn put(&self, sku: Sku) -> Result<()>;
    async fn get(&self, id: SkuId) -> Result<Option<Sku>>;
    async fn list(&self) -> Result<Vec<Sku>>;
    fn subscribe(&self) -> watch::Receiver<Vec<Sku>>;
}

#[async_trait]
pub trait PartnerStore: Send + Sync {
    async fn put(&self, partner: Partner) -> Result<()>;
    async fn get(&self, id: PartnerId) -> Result<Option<Partner>>;
    /// Partners in onboarding order; round-robin assignment cycles this
    /// sequence as observed.
    async fn list(&self) -> Result<Vec<Partner>>;
    fn subscribe(&self) -> watch::Receiver<Vec<Partner>>;
}

#[async_trait]
pub trait OrderStore: Send + Sync {
    async fn put(&self, order: Order) -> Result<()>;
    async fn get(&self, id: OrderId) -> Result<Option<Order>>;
    async fn list(&self) -> Result<Vec<Order>>;
    fn subscribe(&self) -> watch::Receiver<Vec<Order>>;
}

pub type CatalogStoreBox = Box<dyn CatalogStore>;
pub type PartnerStoreBox = Box<dyn PartnerStore>;
pub type OrderStoreBox = Box<dyn OrderStore>;
