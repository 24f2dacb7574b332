//! Pure domain types and the store ports. No infrastructure concerns.

pub mod catalog;
pub mod money;
pub mod order;
pub mod partner;
pub mod ports;
