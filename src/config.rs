//! Configuration types for led-ticker

use serde::Deserialize;

/// Environment variable holding the stock-quote API key
pub const API_KEY_ENV: &str = "FINNHUB_API_KEY";

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub registry: RegistryConfig,
    #[serde(default)]
    pub feed: FeedConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Tracked symbol lists
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RegistryConfig {
    /// Crypto tickers (e.g., ["BTC", "ETH"])
    #[serde(default)]
    pub crypto: Vec<String>,
    /// Stock tickers (e.g., ["AAPL"])
    #[serde(default)]
    pub stocks: Vec<String>,
}

/// Price feed configuration
#[derive(Debug, Clone, Deserialize)]
pub struct FeedConfig {
    /// Seconds between refresh sweeps
    #[serde(default = "default_refresh_interval_secs")]
    pub refresh_interval_secs: u64,

    /// Minimum spacing between outbound requests (milliseconds)
    #[serde(default = "default_min_request_spacing_ms")]
    pub min_request_spacing_ms: u64,

    /// Stock-quote API key; the FINNHUB_API_KEY environment variable
    /// takes precedence when set
    #[serde(default)]
    pub api_key: Option<String>,
}

fn default_refresh_interval_secs() -> u64 {
    300
}
fn default_min_request_spacing_ms() -> u64 {
    1200
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            refresh_interval_secs: 300,
            min_request_spacing_ms: 1200,
            api_key: None,
        }
    }
}

/// Display rotation configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    /// Seconds each symbol stays on the panel
    #[serde(default = "default_rotation_interval_secs")]
    pub rotation_interval_secs: u64,
}

fn default_rotation_interval_secs() -> u64 {
    3
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            rotation_interval_secs: 3,
        }
    }
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Resolve the stock-quote API key, environment first
    pub fn api_key(&self) -> Option<String> {
        std::env::var(API_KEY_ENV)
            .ok()
            .filter(|k| !k.is_empty())
            .or_else(|| self.feed.api_key.clone())
    }

    /// Validate the configuration before any loop or network call starts
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.registry.crypto.is_empty() && self.registry.stocks.is_empty() {
            anyhow::bail!("No symbols configured: both [registry] crypto and stocks are empty");
        }
        if !self.registry.stocks.is_empty() && self.api_key().is_none() {
            anyhow::bail!(
                "Stock symbols configured but no API key found; set {} or [feed] api_key",
                API_KEY_ENV
            );
        }
        if self.feed.refresh_interval_secs == 0 {
            anyhow::bail!("[feed] refresh_interval_secs must be greater than zero");
        }
        if self.feed.min_request_spacing_ms == 0 {
            anyhow::bail!("[feed] min_request_spacing_ms must be greater than zero");
        }
        if self.display.rotation_interval_secs == 0 {
            anyhow::bail!("[display] rotation_interval_secs must be greater than zero");
        }
        Ok(())
    }
}
