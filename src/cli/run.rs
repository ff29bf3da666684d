//! Run command implementation

use crate::cache::PriceCache;
use crate::config::Config;
use crate::display::{ConsolePanel, Panel};
use crate::feed::{HttpPriceSource, PriceSource, RequestPacer, SourceConfig};
use crate::registry::SymbolRegistry;
use crate::rotation::RotationDriver;
use crate::scheduler::RefreshScheduler;
use clap::Args;
use std::sync::Arc;
use std::time::Duration;

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl RunArgs {
    /// Build the components and run both loops until killed
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        config.validate()?;

        let registry = SymbolRegistry::new(&config.registry.crypto, &config.registry.stocks);
        let cache = Arc::new(PriceCache::new(&registry));

        let pacer = Arc::new(RequestPacer::new(Duration::from_millis(
            config.feed.min_request_spacing_ms,
        )));
        let source_config = SourceConfig {
            api_key: config.api_key(),
            ..SourceConfig::default()
        };
        let source: Arc<dyn PriceSource> = Arc::new(HttpPriceSource::new(source_config, pacer));
        let panel: Arc<dyn Panel> = Arc::new(ConsolePanel::new());

        let scheduler = RefreshScheduler::new(registry.clone(), Arc::clone(&cache), source);
        let rotation = RotationDriver::new(registry.clone(), cache, panel);

        tracing::info!(
            symbols = registry.len(),
            refresh_interval_secs = config.feed.refresh_interval_secs,
            rotation_interval_secs = config.display.rotation_interval_secs,
            "Starting ticker loops"
        );

        let refresh = tokio::spawn(
            scheduler.run(Duration::from_secs(config.feed.refresh_interval_secs)),
        );
        let rotate = tokio::spawn(
            rotation.run(Duration::from_secs(config.display.rotation_interval_secs)),
        );

        // Both loops run for the process lifetime; a join here only returns
        // if a task panics.
        tokio::try_join!(refresh, rotate)?;
        Ok(())
    }
}
