use thiserror::Error;

use crate::domain::catalog::SkuId;
use crate::domain::money::Money;
use crate::domain::order::{OrderId, OrderStatus};
use crate::domain::partner::PartnerId;

pub type Result<T> = std::result::Result<T, MarketError>;

/// Error taxonomy for the order/credit/inventory engine.
///
/// Validation and admission errors are decided locally and returned without
/// any partial write. Store errors surface after the transport layer has
/// exhausted its retries; no compensating action is taken.
#[derive(Error, Debug)]
pub enum MarketError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("catalog is empty")]
    NoCatalog,
    #[error("no fulfillment partners onboarded")]
    NoPartner,
    #[error("order total exceeds available credit by {shortfall}")]
    CreditExceeded { shortfall: Money },
    #[error("invalid order transition: {from} -> {to}")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },
    #[error("unknown sku: {0}")]
    UnknownSku(SkuId),
    #[error("unknown partner: {0}")]
    UnknownPartner(PartnerId),
    #[error("unknown order: {0}")]
    UnknownOrder(OrderId),
    #[error("store error: {0}")]
    Store(String),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl MarketError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
