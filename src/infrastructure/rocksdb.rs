use async_trait::async_trait;
use rocksdb::{ColumnFamilyDescriptor, DB, Options};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::watch;

use crate::domain::catalog::{Sku, SkuId};
use crate::domain::order::{Order, OrderId};
use crate::domain::partner::{Partner, PartnerId};
use crate::domain::ports::{CatalogStore, OrderStore, PartnerStore};
use crate::error::{MarketError, Result};

/// Column Family for catalog SKUs.
pub const CF_CATALOG: &str = "catalog";
/// Column Family for fulfillment partners.
pub const CF_PARTNERS: &str = "partners";
/// Column Family for orders.
pub const CF_ORDERS: &str = "orders";

/// A persistent store implementation using RocksDB.
///
/// One Column Family per collection, documents serialized as JSON and keyed
/// by their uuid bytes. Snapshot notification is layered on top: after every
/// write the full collection is re-read and republished on a `watch` channel,
/// matching the in-memory adapter's contract.
///
/// This struct is thread-safe (`Clone` shares the underlying `Arc<DB>` and
/// the channels).
#[derive(Clone)]
pub struct RocksDbStore {
    db: Arc<DB>,
    catalog_snapshots: Arc<watch::Sender<Vec<Sku>>>,
    partner_snapshots: Arc<watch::Sender<Vec<Partner>>>,
    order_snapshots: Arc<watch::Sender<Vec<Order>>>,
}

impl RocksDbStore {
    /// Opens or creates a RocksDB instance at the specified path, ensuring
    /// the three collection column families exist.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let cfs = vec![
            ColumnFamilyDescriptor::new(CF_CATALOG, Options::default()),
            ColumnFamilyDescriptor::new(CF_PARTNERS, Options::default()),
            ColumnFamilyDescriptor::new(CF_ORDERS, Options::default()),
        ];
        let db = DB::open_cf_descriptors(&opts, path, cfs)
            .map_err(|e| MarketError::Store(e.to_string()))?;

        let (catalog_snapshots, _) = watch::channel(Vec::new());
        let (partner_snapshots, _) = watch::channel(Vec::new());
        let (order_snapshots, _) = watch::channel(Vec::new());
        Ok(Self {
            db: Arc::new(db),
            catalog_snapshots: Arc::new(catalog_snapshots),
            partner_snapshots: Arc::new(partner_snapshots),
            order_snapshots: Arc::new(order_snapshots),
        })
    }

    fn put_doc<T: Serialize>(&self, cf_name: &str, key: &[u8], doc: &T) -> Result<()> {
        let cf = self
            .db
            .cf_handle(cf_name)
            .ok_or_else(|| MarketError::Store(format!("{cf_name} column family not found")))?;
        let value =
            serde_json::to_vec(doc).map_err(|e| MarketError::Store(e.to_string()))?;
        self.db
            .put_cf(&cf, key, value)
            .map_err(|e| MarketError::Store(e.to_string()))
    }

    fn get_doc<T: DeserializeOwned>(&self, cf_name: &str, key: &[u8]) -> Result<Option<T>> {
        let cf = self
            .db
            .cf_handle(cf_name)
            .ok_or_else(|| MarketError::Store(format!("{cf_name} column family not found")))?;
        let result = self
            .db
            .get_cf(&cf, key)
            .map_err(|e| MarketError::Store(e.to_string()))?;
        match result {
            Some(bytes) => {
                let doc = serde_json::from_slice(&bytes)
                    .map_err(|e| MarketError::Store(e.to_string()))?;
                Ok(Some(doc))
            }
            None => Ok(None),
        }
    }

    fn list_docs<T: DeserializeOwned>(&self, cf_name: &str) -> Result<Vec<T>> {
        let cf = self
            .db
            .cf_handle(cf_name)
            .ok_or_else(|| MarketError::Store(format!("{cf_name} column family not found")))?;
        let mut docs = Vec::new();
        for item in self.db.iterator_cf(&cf, rocksdb::IteratorMode::Start) {
            let (_key, value) = item.map_err(|e| MarketError::Store(e.to_string()))?;
            let doc =
                serde_json::from_slice(&value).map_err(|e| MarketError::Store(e.to_string()))?;
            docs.push(doc);
        }
        Ok(docs)
    }
}

#[async_trait]
impl CatalogStore for RocksDbStore {
    async fn put(&self, sku: Sku) -> Result<()> {
        self.put_doc(CF_CATALOG, sku.id.0.as_bytes(), &sku)?;
        let _ = self.catalog_snapshots.send(self.list_docs(CF_CATALOG)?);
        Ok(())
    }

    async fn get(&self, id: SkuId) -> Result<Option<Sku>> {
        self.get_doc(CF_CATALOG, id.0.as_bytes())
    }

    async fn list(&self) -> Result<Vec<Sku>> {
        self.list_docs(CF_CATALOG)
    }

    fn subscribe(&self) -> watch::Receiver<Vec<Sku>> {
        self.catalog_snapshots.subscribe()
    }
}

#[async_trait]
impl PartnerStore for RocksDbStore {
    async fn put(&self, partner: Partner) -> Result<()> {
        self.put_doc(CF_PARTNERS, partner.id.0.as_bytes(), &partner)?;
        let _ = self.partner_snapshots.send(PartnerStore::list(self).await?);
        Ok(())
    }

    async fn get(&self, id: PartnerId) -> Result<Option<Partner>> {
        self.get_doc(CF_PARTNERS, id.0.as_bytes())
    }

    /// Partners ordered by onboarding time; key order (random uuids) carries
    /// no meaning here.
    async fn list(&self) -> Result<Vec<Partner>> {
        let mut partners: Vec<Partner> = self.list_docs(CF_PARTNERS)?;
        partners.sort_by(|a, b| {
            a.onboarded_at
                .cmp(&b.onboarded_at)
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(partners)
    }

    fn subscribe(&self) -> watch::Receiver<Vec<Partner>> {
        self.partner_snapshots.subscribe()
    }
}

#[async_trait]
impl OrderStore for RocksDbStore {
    async fn put(&self, order: Order) -> Result<()> {
        self.put_doc(CF_ORDERS, order.id.0.as_bytes(), &order)?;
        let _ = self.order_snapshots.send(OrderStore::list(self).await?);
        Ok(())
    }

    async fn get(&self, id: OrderId) -> Result<Option<Order>> {
        self.get_doc(CF_ORDERS, id.0.as_bytes())
    }

    async fn list(&self) -> Result<Vec<Order>> {
        let mut orders: Vec<Order> = self.list_docs(CF_ORDERS)?;
        orders.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        Ok(orders)
    }

    fn subscribe(&self) -> watch::Receiver<Vec<Order>> {
        self.order_snapshots.subscribe()
    }
}
