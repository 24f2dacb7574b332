//! bazaar — marketplace order/credit/inventory consistency engine.
//!
//! Three roles (operator, buyer, fulfillment partner) share a catalog, a set
//! of credit-limited partners, and a stream of orders moving through a
//! lifecycle. The engine sequences admission control against partner credit,
//! round-robin assignment, and stock deduction on fulfillment, over a store
//! that guarantees atomicity per document only.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod interfaces;
