use crate::error::Result;
use crate::item::{LineItem, Order};
use std::io::Read;

/// Reads an order from a JSON source.
///
/// This reader wraps any `Read` source (e.g., File, Stdin) and deserializes
/// the `{"items": [...]}` document. Range validation of prices and
/// quantities is left to the engine.
pub struct OrderReader<R: Read> {
    source: R,
}

impl<R: Read> OrderReader<R> {
    pub fn new(source: R) -> Self {
        Self { source }
    }

    /// Deserializes the order and returns its line items.
    pub fn items(self) -> Result<Vec<LineItem>> {
        let order: Order = serde_json::from_reader(self.source)?;
        Ok(order.items)
    }
}
