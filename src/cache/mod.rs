//! Price cache
//!
//! Process-wide store of the last-known price per tracked symbol. Written
//! only by the refresh scheduler, read by the rotation driver. Keys are
//! fixed at startup to exactly the registry tickers.

use crate::feed::PriceQuote;
use crate::registry::SymbolRegistry;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Last-known state for one symbol
///
/// `valid == false` means no successful fetch yet. A later failed fetch
/// never invalidates a prior valid observation; only the attempt marker
/// moves.
#[derive(Debug, Clone)]
pub struct Observation {
    pub price: Decimal,
    pub change_24h: Option<Decimal>,
    pub observed_at: Option<DateTime<Utc>>,
    pub valid: bool,
}

impl Observation {
    fn empty() -> Self {
        Self {
            price: Decimal::ZERO,
            change_24h: None,
            observed_at: None,
            valid: false,
        }
    }
}

#[derive(Debug, Clone)]
struct Slot {
    observation: Observation,
    last_attempt: Option<DateTime<Utc>>,
}

/// Map of ticker to last-known observation, fixed cardinality
pub struct PriceCache {
    slots: Arc<RwLock<HashMap<String, Slot>>>,
}

impl PriceCache {
    /// Create the cache with one empty slot per registered symbol
    pub fn new(registry: &SymbolRegistry) -> Self {
        let slots = registry
            .entries()
            .iter()
            .map(|e| {
                (
                    e.ticker.clone(),
                    Slot {
                        observation: Observation::empty(),
                        last_attempt: None,
                    },
                )
            })
            .collect();

        Self {
            slots: Arc::new(RwLock::new(slots)),
        }
    }

    /// Last-known observation for a ticker
    ///
    /// Returns an empty invalid observation for unregistered tickers so
    /// callers never block on a fetch.
    pub async fn get(&self, ticker: &str) -> Observation {
        let slots = self.slots.read().await;
        slots
            .get(ticker)
            .map(|s| s.observation.clone())
            .unwrap_or_else(Observation::empty)
    }

    /// Timestamp of the most recent fetch attempt, successful or not
    pub async fn last_attempt(&self, ticker: &str) -> Option<DateTime<Utc>> {
        let slots = self.slots.read().await;
        slots.get(ticker).and_then(|s| s.last_attempt)
    }

    /// Store a successful fetch result
    ///
    /// Writes for unregistered tickers are dropped; the key set never grows.
    pub async fn put(&self, quote: &PriceQuote) {
        let mut slots = self.slots.write().await;
        match slots.get_mut(&quote.ticker) {
            Some(slot) => {
                slot.observation = Observation {
                    price: quote.price,
                    change_24h: quote.change_24h,
                    observed_at: Some(quote.fetched_at),
                    valid: true,
                };
                slot.last_attempt = Some(quote.fetched_at);
            }
            None => {
                tracing::debug!(ticker = %quote.ticker, "Dropping quote for unregistered ticker");
            }
        }
    }

    /// Record a failed fetch attempt
    ///
    /// Moves the attempt marker only; the stored observation is untouched.
    pub async fn record_failure(&self, ticker: &str) {
        let mut slots = self.slots.write().await;
        if let Some(slot) = slots.get_mut(ticker) {
            slot.last_attempt = Some(Utc::now());
        }
    }

    /// Number of cached symbols (fixed for the process lifetime)
    pub async fn len(&self) -> usize {
        self.slots.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.slots.read().await.is_empty()
    }
}
