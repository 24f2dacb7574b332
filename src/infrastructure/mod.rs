//! Store adapters implementing the domain ports.

pub mod in_memory;
pub mod retry;
#[cfg(feature = "storage-rocksdb")]
pub mod rocksdb;
