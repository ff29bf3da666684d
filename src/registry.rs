//! Symbol registry
//!
//! The fixed, ordered list of tracked assets. Built once from config at
//! startup; rotation order is registry order.

use serde::{Deserialize, Serialize};

/// Asset class of a tracked symbol
///
/// Determines which upstream endpoint the fetcher queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetClass {
    Crypto,
    Stock,
}

/// A single tracked asset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolEntry {
    /// Ticker symbol (e.g., "BTC", "AAPL")
    pub ticker: String,
    /// Asset class
    pub class: AssetClass,
}

impl SymbolEntry {
    pub fn new(ticker: impl Into<String>, class: AssetClass) -> Self {
        Self {
            ticker: ticker.into(),
            class,
        }
    }
}

/// Ordered, immutable list of tracked symbols
///
/// Crypto entries come first, then stocks, each preserving config order.
#[derive(Debug, Clone)]
pub struct SymbolRegistry {
    entries: Vec<SymbolEntry>,
}

impl SymbolRegistry {
    /// Build the registry from the configured symbol lists
    pub fn new(crypto: &[String], stocks: &[String]) -> Self {
        let entries = crypto
            .iter()
            .map(|t| SymbolEntry::new(t.to_uppercase(), AssetClass::Crypto))
            .chain(
                stocks
                    .iter()
                    .map(|t| SymbolEntry::new(t.to_uppercase(), AssetClass::Stock)),
            )
            .collect();

        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[SymbolEntry] {
        &self.entries
    }

    /// Entry at the given rotation index
    pub fn get(&self, index: usize) -> Option<&SymbolEntry> {
        self.entries.get(index)
    }
}
