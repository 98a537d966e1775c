use clap::Parser;
use ladder_book::cli::{Cli, Commands};
use ladder_book::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = match Config::load(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: Could not load config from {}: {}", cli.config, e);
            eprintln!("Using default configuration");
            Config::embedded()?
        }
    };

    // Initialize telemetry
    let telemetry = ladder_book::telemetry::init_telemetry(&config.telemetry)?;

    let outcome = match cli.command {
        Commands::Process(args) => {
            tracing::info!("Processing command file");
            args.execute(&config).await
        }
        Commands::Config => {
            print!("{}", toml::to_string_pretty(&config)?);
            Ok(())
        }
    };

    telemetry.write_metrics_snapshot()?;
    outcome
}
