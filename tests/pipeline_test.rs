//! End-to-end tests for the refresh/rotation pipeline
//!
//! Exercises the scheduler and rotation driver together against mock
//! implementations of the price source and panel.

use async_trait::async_trait;
use chrono::Utc;
use led_ticker::cache::PriceCache;
use led_ticker::display::{Frame, Panel, PLACEHOLDER};
use led_ticker::feed::{FetchError, PriceQuote, PriceSource};
use led_ticker::registry::{SymbolEntry, SymbolRegistry};
use led_ticker::rotation::RotationDriver;
use led_ticker::scheduler::RefreshScheduler;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

struct MockSource {
    prices: HashMap<String, Decimal>,
}

impl MockSource {
    fn new(prices: &[(&str, Decimal)]) -> Self {
        Self {
            prices: prices.iter().map(|(t, p)| (t.to_string(), *p)).collect(),
        }
    }
}

#[async_trait]
impl PriceSource for MockSource {
    async fn fetch(&self, entry: &SymbolEntry) -> Result<PriceQuote, FetchError> {
        let price = self
            .prices
            .get(&entry.ticker)
            .copied()
            .ok_or_else(|| FetchError::UnknownSymbol(entry.ticker.clone()))?;

        Ok(PriceQuote {
            ticker: entry.ticker.clone(),
            price,
            change_24h: None,
            fetched_at: Utc::now(),
        })
    }
}

/// Source where every fetch fails, for the independence property
struct BrokenSource;

#[async_trait]
impl PriceSource for BrokenSource {
    async fn fetch(&self, entry: &SymbolEntry) -> Result<PriceQuote, FetchError> {
        Err(FetchError::MalformedPayload(format!(
            "broken source for {}",
            entry.ticker
        )))
    }
}

struct RecordingPanel {
    frames: Mutex<Vec<Frame>>,
}

impl RecordingPanel {
    fn new() -> Self {
        Self {
            frames: Mutex::new(Vec::new()),
        }
    }

    fn tickers(&self) -> Vec<String> {
        self.frames
            .lock()
            .unwrap()
            .iter()
            .map(|f| f.ticker.clone())
            .collect()
    }
}

impl Panel for RecordingPanel {
    fn write_frame(&self, frame: &Frame) {
        self.frames.lock().unwrap().push(frame.clone());
    }
}

fn registry() -> SymbolRegistry {
    SymbolRegistry::new(&["BTC".to_string()], &["AAPL".to_string()])
}

#[tokio::test]
async fn test_sweep_then_rotation_shows_fetched_prices() {
    let registry = registry();
    let cache = Arc::new(PriceCache::new(&registry));
    let source = Arc::new(MockSource::new(&[
        ("BTC", dec!(42500.5)),
        ("AAPL", dec!(189.5)),
    ]));

    let scheduler = RefreshScheduler::new(registry.clone(), Arc::clone(&cache), source);
    let stats = scheduler.sweep().await;
    assert_eq!(stats.refreshed, 2);

    let panel = Arc::new(RecordingPanel::new());
    let mut rotation = RotationDriver::new(registry, cache, Arc::clone(&panel) as Arc<dyn Panel>);
    for _ in 0..4 {
        rotation.tick().await;
    }

    assert_eq!(panel.tickers(), vec!["BTC", "AAPL", "BTC", "AAPL"]);
    let frames = panel.frames.lock().unwrap();
    assert_eq!(frames[0].price_text, "$42,500.50");
    assert_eq!(frames[1].price_text, "$189.50");
}

#[tokio::test]
async fn test_failed_sweep_keeps_previous_prices_on_display() {
    let registry = registry();
    let cache = Arc::new(PriceCache::new(&registry));

    // First sweep succeeds
    let good = Arc::new(MockSource::new(&[
        ("BTC", dec!(42500.5)),
        ("AAPL", dec!(189.5)),
    ]));
    RefreshScheduler::new(registry.clone(), Arc::clone(&cache), good)
        .sweep()
        .await;

    // Second sweep fails everywhere
    let stats = RefreshScheduler::new(registry.clone(), Arc::clone(&cache), Arc::new(BrokenSource))
        .sweep()
        .await;
    assert_eq!(stats.failed, 2);

    // The display still shows the last good prices
    let panel = Arc::new(RecordingPanel::new());
    let mut rotation = RotationDriver::new(registry, cache, Arc::clone(&panel) as Arc<dyn Panel>);
    rotation.tick().await;
    rotation.tick().await;

    let frames = panel.frames.lock().unwrap();
    assert_eq!(frames[0].price_text, "$42,500.50");
    assert_eq!(frames[1].price_text, "$189.50");
}

#[tokio::test]
async fn test_rotation_keeps_ticking_while_all_fetches_fail() {
    let registry = registry();
    let cache = Arc::new(PriceCache::new(&registry));
    let panel = Arc::new(RecordingPanel::new());

    let scheduler = RefreshScheduler::new(registry.clone(), Arc::clone(&cache), Arc::new(BrokenSource));
    let rotation = RotationDriver::new(registry, Arc::clone(&cache), Arc::clone(&panel) as Arc<dyn Panel>);

    let refresh_task = tokio::spawn(scheduler.run(Duration::from_millis(20)));
    let rotate_task = tokio::spawn(rotation.run(Duration::from_millis(10)));

    tokio::time::sleep(Duration::from_millis(120)).await;
    refresh_task.abort();
    rotate_task.abort();

    // Rotation advanced on schedule despite every fetch failing
    let tickers = panel.tickers();
    assert!(tickers.len() >= 5, "expected >= 5 frames, got {}", tickers.len());
    for (i, ticker) in tickers.iter().enumerate() {
        let expected = if i % 2 == 0 { "BTC" } else { "AAPL" };
        assert_eq!(ticker, expected);
    }

    // All frames are placeholders; never a hard error state
    let frames = panel.frames.lock().unwrap();
    assert!(frames.iter().all(|f| f.price_text == PLACEHOLDER));
}

#[tokio::test]
async fn test_rotation_cycle_visits_every_symbol_once() {
    let registry = SymbolRegistry::new(
        &["BTC".to_string(), "ETH".to_string(), "SOL".to_string()],
        &["AAPL".to_string()],
    );
    let cache = Arc::new(PriceCache::new(&registry));
    let panel = Arc::new(RecordingPanel::new());

    let mut rotation = RotationDriver::new(registry.clone(), cache, Arc::clone(&panel) as Arc<dyn Panel>);
    for _ in 0..registry.len() * 2 {
        rotation.tick().await;
    }

    let tickers = panel.tickers();
    let cycle: Vec<_> = registry
        .entries()
        .iter()
        .map(|e| e.ticker.clone())
        .collect();
    assert_eq!(&tickers[..4], cycle.as_slice());
    assert_eq!(&tickers[4..], cycle.as_slice());
}
