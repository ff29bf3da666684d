//! CLI interface for led-ticker
//!
//! Provides subcommands for:
//! - `run`: Start the ticker loops
//! - `config`: Show resolved configuration

mod run;

pub use run::RunArgs;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "led-ticker")]
#[command(about = "LED matrix price ticker for crypto and stock symbols")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the refresh and rotation loops
    Run(RunArgs),
    /// Show resolved configuration
    Config,
}
