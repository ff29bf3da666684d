//! Refresh scheduler
//!
//! Walks the symbol registry on a fixed period and refreshes the price
//! cache through the fetcher. Sweeps never overlap: the wait for the next
//! sweep starts when the previous one finishes, so a sweep stretched out by
//! request pacing simply pushes the next one back.

use crate::cache::PriceCache;
use crate::feed::PriceSource;
use crate::registry::SymbolRegistry;
use std::sync::Arc;
use std::time::Duration;

/// Outcome of one full sweep over the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepStats {
    pub refreshed: usize,
    pub failed: usize,
}

/// Periodically refreshes the price cache via the fetcher
pub struct RefreshScheduler {
    registry: SymbolRegistry,
    cache: Arc<PriceCache>,
    source: Arc<dyn PriceSource>,
}

impl RefreshScheduler {
    pub fn new(
        registry: SymbolRegistry,
        cache: Arc<PriceCache>,
        source: Arc<dyn PriceSource>,
    ) -> Self {
        Self {
            registry,
            cache,
            source,
        }
    }

    /// One full pass over the registry, in order
    ///
    /// A failed symbol is logged and skipped; it gets another attempt on the
    /// next sweep. Failures never abort the rest of the pass.
    pub async fn sweep(&self) -> SweepStats {
        let mut stats = SweepStats {
            refreshed: 0,
            failed: 0,
        };

        for entry in self.registry.entries() {
            match self.source.fetch(entry).await {
                Ok(quote) => {
                    tracing::debug!(ticker = %entry.ticker, price = %quote.price, "Price refreshed");
                    self.cache.put(&quote).await;
                    stats.refreshed += 1;
                }
                Err(e) => {
                    tracing::warn!(ticker = %entry.ticker, error = %e, "Price fetch failed");
                    self.cache.record_failure(&entry.ticker).await;
                    stats.failed += 1;
                }
            }
        }

        stats
    }

    /// Run the refresh loop forever
    pub async fn run(self, refresh_interval: Duration) {
        loop {
            let stats = self.sweep().await;
            tracing::info!(
                refreshed = stats.refreshed,
                failed = stats.failed,
                "Refresh sweep complete"
            );
            tokio::time::sleep(refresh_interval).await;
        }
    }
}
