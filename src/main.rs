use clap::Parser;
use led_ticker::cli::{Cli, Commands};
use led_ticker::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(&cli.config).unwrap_or_else(|e| {
        eprintln!("Warning: Could not load config from {}: {}", cli.config, e);
        eprintln!("Using default configuration");
        Config::default()
    });

    // Initialize telemetry
    let _guard = led_ticker::telemetry::init_telemetry(&config.telemetry)?;

    match cli.command {
        Commands::Run(args) => {
            tracing::info!("Starting led-ticker");
            args.execute(&config).await?;
        }
        Commands::Config => {
            println!("Current configuration:");
            println!("  Crypto symbols: {:?}", config.registry.crypto);
            println!("  Stock symbols: {:?}", config.registry.stocks);
            println!(
                "  Refresh interval: {}s (request spacing {}ms)",
                config.feed.refresh_interval_secs, config.feed.min_request_spacing_ms
            );
            println!(
                "  Rotation interval: {}s",
                config.display.rotation_interval_secs
            );
            println!(
                "  API key: {}",
                if config.api_key().is_some() {
                    "set"
                } else {
                    "not set"
                }
            );
        }
    }

    Ok(())
}
