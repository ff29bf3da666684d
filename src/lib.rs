//! led-ticker: LED matrix price ticker for crypto and stock symbols
//!
//! This library provides the core components for:
//! - Fixed symbol registry (crypto + stock)
//! - Rate-limited price fetching from CoinGecko and Finnhub
//! - In-memory price cache preserving stale-but-valid prices
//! - Periodic refresh sweeps tolerant of per-symbol failures
//! - Display rotation decoupled from fetch timing
//! - Frame composition for a fixed-resolution matrix panel

pub mod cache;
pub mod cli;
pub mod config;
pub mod display;
pub mod feed;
pub mod registry;
pub mod rotation;
pub mod scheduler;
pub mod telemetry;
