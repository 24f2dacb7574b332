//! Application layer: the `OrderEngine` orchestrating admission, assignment,
//! and the order lifecycle over the store ports, plus the pure assignment
//! policy and the demo-data bootstrap.

pub mod assignment;
pub mod engine;
pub mod seed;
