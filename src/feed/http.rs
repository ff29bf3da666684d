//! HTTP price source
//!
//! Crypto prices come from the CoinGecko exchange-rate endpoint (no
//! credential), stock quotes from the Finnhub quote endpoint (credential
//! required). Both return a JSON payload with a numeric price field.

use super::pacer::RequestPacer;
use super::types::{FetchError, PriceQuote};
use super::PriceSource;
use crate::registry::{AssetClass, SymbolEntry};
use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

/// CoinGecko API base URL
pub const COINGECKO_API_URL: &str = "https://api.coingecko.com/api/v3";

/// Finnhub API base URL
pub const FINNHUB_API_URL: &str = "https://finnhub.io/api/v1";

/// Ticker to CoinGecko coin-id translation for common coins
const COIN_IDS: &[(&str, &str)] = &[
    ("BTC", "bitcoin"),
    ("ETH", "ethereum"),
    ("SOL", "solana"),
    ("DOGE", "dogecoin"),
    ("ADA", "cardano"),
    ("XRP", "ripple"),
    ("LTC", "litecoin"),
    ("DOT", "polkadot"),
    ("AVAX", "avalanche-2"),
    ("LINK", "chainlink"),
];

/// Configuration for the HTTP price source
#[derive(Debug, Clone)]
pub struct SourceConfig {
    /// Base URL for the crypto exchange-rate endpoint
    pub coingecko_url: String,
    /// Base URL for the stock quote endpoint
    pub finnhub_url: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// Stock-quote API key; required only when stock symbols are tracked
    pub api_key: Option<String>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            coingecko_url: COINGECKO_API_URL.to_string(),
            finnhub_url: FINNHUB_API_URL.to_string(),
            timeout: Duration::from_secs(10),
            api_key: None,
        }
    }
}

/// HTTP client for the external price source
pub struct HttpPriceSource {
    config: SourceConfig,
    client: Client,
    pacer: Arc<RequestPacer>,
}

impl HttpPriceSource {
    /// Create a new source with the given config and shared request pacer
    pub fn new(config: SourceConfig, pacer: Arc<RequestPacer>) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            config,
            client,
            pacer,
        }
    }

    async fn fetch_crypto(&self, ticker: &str) -> Result<PriceQuote, FetchError> {
        let coin_id =
            coin_id(ticker).ok_or_else(|| FetchError::UnknownSymbol(ticker.to_string()))?;

        let url = format!("{}/simple/price", self.config.coingecko_url);
        tracing::debug!(ticker, coin_id, "Fetching crypto price");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("ids", coin_id),
                ("vs_currencies", "usd"),
                ("include_24hr_change", "true"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }

        let body = response.text().await?;
        parse_crypto_payload(&body, coin_id, ticker)
    }

    async fn fetch_stock(&self, ticker: &str) -> Result<PriceQuote, FetchError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(FetchError::MissingCredential)?;

        let url = format!("{}/quote", self.config.finnhub_url);
        tracing::debug!(ticker, "Fetching stock quote");

        let response = self
            .client
            .get(&url)
            .query(&[("symbol", ticker), ("token", api_key)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }

        let body = response.text().await?;
        parse_stock_payload(&body, ticker)
    }
}

#[async_trait]
impl PriceSource for HttpPriceSource {
    async fn fetch(&self, entry: &SymbolEntry) -> Result<PriceQuote, FetchError> {
        self.pacer.acquire().await;

        match entry.class {
            AssetClass::Crypto => self.fetch_crypto(&entry.ticker).await,
            AssetClass::Stock => self.fetch_stock(&entry.ticker).await,
        }
    }
}

/// Look up the CoinGecko coin id for a ticker
fn coin_id(ticker: &str) -> Option<&'static str> {
    COIN_IDS
        .iter()
        .find(|(t, _)| *t == ticker)
        .map(|(_, id)| *id)
}

/// Per-coin entry in a CoinGecko simple/price response
#[derive(Debug, Deserialize)]
struct CoinGeckoPrice {
    usd: Option<Decimal>,
    usd_24h_change: Option<Decimal>,
}

/// Parse a CoinGecko simple/price payload
///
/// Shape: `{"bitcoin": {"usd": 42500.5, "usd_24h_change": 1.23}}`
fn parse_crypto_payload(body: &str, coin_id: &str, ticker: &str) -> Result<PriceQuote, FetchError> {
    let prices: HashMap<String, CoinGeckoPrice> =
        serde_json::from_str(body).map_err(|e| FetchError::MalformedPayload(e.to_string()))?;

    let entry = prices
        .get(coin_id)
        .ok_or_else(|| FetchError::MalformedPayload(format!("no entry for {}", coin_id)))?;

    let price = entry
        .usd
        .ok_or_else(|| FetchError::MalformedPayload(format!("no usd price for {}", coin_id)))?;

    Ok(PriceQuote {
        ticker: ticker.to_string(),
        price,
        change_24h: entry.usd_24h_change,
        fetched_at: Utc::now(),
    })
}

/// Finnhub quote response
#[derive(Debug, Deserialize)]
struct FinnhubQuote {
    /// Current price
    c: Option<Decimal>,
    /// Open price of the day
    o: Option<Decimal>,
}

/// Parse a Finnhub quote payload
///
/// Shape: `{"c": 189.5, "o": 185.2, ...}`. Finnhub answers unknown symbols
/// with a zeroed quote rather than an error status.
fn parse_stock_payload(body: &str, ticker: &str) -> Result<PriceQuote, FetchError> {
    let quote: FinnhubQuote =
        serde_json::from_str(body).map_err(|e| FetchError::MalformedPayload(e.to_string()))?;

    let price = quote
        .c
        .ok_or_else(|| FetchError::MalformedPayload(format!("no current price for {}", ticker)))?;

    if price.is_zero() {
        return Err(FetchError::UnknownSymbol(ticker.to_string()));
    }

    let change_24h = quote
        .o
        .filter(|o| !o.is_zero())
        .map(|o| (price / o - dec!(1)) * dec!(100));

    Ok(PriceQuote {
        ticker: ticker.to_string(),
        price,
        change_24h,
        fetched_at: Utc::now(),
    })
}
