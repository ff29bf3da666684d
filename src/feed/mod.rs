//! Price feed module
//!
//! One-shot price lookups against the external market-data source,
//! serialized through a process-wide request pacer.

mod http;
mod pacer;
mod types;

pub use http::{HttpPriceSource, SourceConfig};
pub use pacer::RequestPacer;
pub use types::{FetchError, PriceQuote};

use crate::registry::SymbolEntry;
use async_trait::async_trait;

/// Trait for price source implementations
#[async_trait]
pub trait PriceSource: Send + Sync {
    /// Fetch the current price for one symbol
    ///
    /// Never retries internally; retry policy belongs to the caller.
    async fn fetch(&self, entry: &SymbolEntry) -> Result<PriceQuote, FetchError>;
}
