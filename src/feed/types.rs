//! Price feed types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single successful price lookup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceQuote {
    /// Ticker symbol (e.g., "BTC", "AAPL")
    pub ticker: String,
    /// Price in USD
    pub price: Decimal,
    /// 24-hour change percentage, when the source provides one
    pub change_24h: Option<Decimal>,
    /// Local timestamp when the quote was fetched
    pub fetched_at: DateTime<Utc>,
}

/// Price fetch errors
///
/// All failure modes of one lookup; none of them abort a refresh sweep.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network-level failure (connect, timeout, body read)
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// Non-2xx response from the price source
    #[error("price source returned {0}")]
    Status(reqwest::StatusCode),
    /// Response body did not contain a usable price
    #[error("malformed payload: {0}")]
    MalformedPayload(String),
    /// Ticker not supported by the price source
    #[error("symbol not supported by price source: {0}")]
    UnknownSymbol(String),
    /// Stock quote requested without an API key
    #[error("no API key configured for stock quotes")]
    MissingCredential,
}
