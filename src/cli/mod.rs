//! CLI interface for ladder-book
//!
//! Provides subcommands for:
//! - `process`: Run a command file through a fresh order book
//! - `config`: Show the effective configuration

mod process;

pub use process::{process_files, ProcessArgs, SummaryFormat};

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "ladder-book")]
#[command(about = "Single-instrument limit order book driven by a command file")]
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
    /// Run a command file and write query results
    Process(ProcessArgs),
    /// Show configuration
    Config,
}
