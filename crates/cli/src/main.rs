use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::SecondsFormat;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use faretally_core::{
    load_config, load_tickets, run_batch, standard_batch, BatchReport, Config, StatsEngine,
};

#[derive(Parser, Debug)]
#[command(name = "faretally")]
#[command(version, about = "Aggregate statistics over a ticket sales CSV", long_about = None)]
struct Cli {
    /// Path of the ticket CSV file to process
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Destination country to report on
    #[arg(short, long)]
    destination: Option<String>,

    /// Baseline total for the percentage share
    #[arg(short, long)]
    total: Option<i64>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the batch report as JSON instead of plain lines
    #[arg(long)]
    json: bool,
}

impl Cli {
    /// Resolve the effective configuration: defaults, then file and
    /// environment, then flags.
    fn resolve_config(&self) -> Result<Config> {
        let mut config =
            load_config(self.config.as_deref()).context("Failed to load configuration")?;

        if let Some(input) = &self.input {
            config.input = input.clone();
        }
        if let Some(destination) = &self.destination {
            config.destination = destination.clone();
        }
        if let Some(total) = self.total {
            config.total = total;
        }

        Ok(config)
    }
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    // Load the whole dataset before any query starts; a load failure is
    // fatal and nothing runs.
    info!("Loading tickets from {:?}", config.input);
    let tickets = load_tickets(&config.input)
        .with_context(|| format!("Tickets cannot be loaded from {:?}", config.input))?;
    info!("Loaded {} ticket records", tickets.len());

    let engine = Arc::new(StatsEngine::new(tickets));
    let report = run_batch(engine, standard_batch(&config)).await;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    // Query failures are reported, not fatal; the batch itself succeeded.
    Ok(())
}

fn print_report(report: &BatchReport) {
    for outcome in &report.outcomes {
        if let Some(message) = outcome.message() {
            println!("{message}");
        }
    }
    if report.error_count() > 0 {
        println!(
            "{} of {} queries failed, see log for details",
            report.error_count(),
            report.outcomes.len()
        );
    }
    println!(
        "start   -> {}",
        report.started_at.to_rfc3339_opts(SecondsFormat::Millis, true)
    );
    println!(
        "end     -> {}",
        report.finished_at.to_rfc3339_opts(SecondsFormat::Millis, true)
    );
    println!("elapsed -> {:?}", report.elapsed);
}
