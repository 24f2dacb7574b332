use bazaar::application::engine::OrderEngine;
use bazaar::domain::catalog::SkuId;
use bazaar::domain::money::Money;
use bazaar::domain::order::LineRequest;
use bazaar::domain::partner::PartnerId;
use bazaar::infrastructure::in_memory::{
    InMemoryCatalogStore, InMemoryOrderStore, InMemoryPartnerStore,
};
use rust_decimal::Decimal;

pub fn in_memory_engine() -> OrderEngine {
    OrderEngine::new(
        Box::new(InMemoryCatalogStore::new()),
        Box::new(InMemoryPartnerStore::new()),
        Box::new(InMemoryOrderStore::new()),
    )
}

pub async fn add_sku(engine: &OrderEngine, name: &str, price: Decimal, stock: i64) -> SkuId {
    engine
        .add_sku(name, "test", Money::new(price), stock)
        .await
        .expect("add_sku failed")
        .id
}

pub async fn onboard(engine: &OrderEngine, name: &str, ceiling: Decimal) -> PartnerId {
    engine
        .onboard_partner(name, &format!("{name}@example.test"), Money::new(ceiling))
        .await
        .expect("onboard_partner failed")
        .id
}

pub fn line(sku_id: SkuId, quantity: u32) -> Vec<LineRequest> {
    vec![LineRequest { sku_id, quantity }]
}
