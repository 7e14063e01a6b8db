//! TeamPulse CLI - run the insights engine over a JSON snapshot.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, Level};

use teampulse_insights::{InsightsEngine, ReportConfig};
use teampulse_storage::MemoryStore;

#[derive(Parser)]
#[command(name = "teampulse")]
#[command(about = "Operational insights over task, time, lead, and project records", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the full insights report from a snapshot file
    Report {
        /// Path to a JSON snapshot of the record collections
        snapshot: PathBuf,
        /// Review-stall threshold in days
        #[arg(long, default_value = "3")]
        stall_days: i64,
        /// Workload look-ahead window in days
        #[arg(long, default_value = "14")]
        window_days: i64,
        /// Forecast horizon in months
        #[arg(long, default_value = "3")]
        horizon_months: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Report {
            snapshot,
            stall_days,
            window_days,
            horizon_months,
        } => {
            let json = std::fs::read_to_string(&snapshot)
                .with_context(|| format!("reading snapshot {}", snapshot.display()))?;
            let store = MemoryStore::from_json(&json).context("parsing snapshot")?;
            info!(snapshot = %snapshot.display(), "computing insights report");

            let engine = InsightsEngine::with_config(
                Arc::new(store),
                ReportConfig {
                    stall_days,
                    window_days,
                    horizon_months,
                },
            );
            let report = engine.report().await?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}
