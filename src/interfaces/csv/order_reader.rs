use serde::Deserialize;
use std::io::Read;

use crate::error::{MarketError, Result};

/// One order request row: a buyer orders a quantity of a SKU, referenced by
/// its catalog name.
#[derive(Debug, Deserialize, PartialEq, Eq, Clone)]
pub struct OrderRequestRow {
    pub buyer: String,
    pub sku: String,
    pub quantity: u32,
}

/// Reads order requests from a CSV source.
///
/// Wraps `csv::Reader` and provides an iterator over `Result<OrderRequestRow>`,
/// with whitespace trimming and flexible record lengths handled automatically.
pub struct OrderRequestReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> OrderRequestReader<R> {
    /// Creates a reader from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes requests, so
    /// large files stream without loading fully into memory.
    pub fn requests(self) -> impl Iterator<Item = Result<OrderRequestRow>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(MarketError::from))
    }
}
