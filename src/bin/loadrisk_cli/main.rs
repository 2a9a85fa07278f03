// ABOUTME: Loadrisk CLI - runs the injury-risk engine over JSON files
// ABOUTME: Ingests daily inputs into an in-memory store and computes weekly load statistics
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
//!
//! Usage:
//! ```bash
//! # Ingest one day (or a JSON array of days, in order) and print the outcome
//! loadrisk-cli ingest --input day.json --athlete-id 6f1c...
//!
//! # Continue from a previously exported record
//! loadrisk-cli ingest --input day.json --prior risk.json
//!
//! # Load-management signals for a weekly series (most recent week first)
//! loadrisk-cli stats --series weeks.json
//! ```

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use loadrisk_engine::logging::{LogFormat, LoggingConfig};
use loadrisk_intelligence::InjuryRiskConfig;
use std::path::PathBuf;
use uuid::Uuid;

#[derive(Parser)]
#[command(
    name = "loadrisk-cli",
    about = "Biomechanical load and injury-risk engine CLI",
    long_about = "Runs the injury-risk engine over JSON inputs. Thresholds come from LOADRISK_* environment variables."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Merge daily inputs into an athlete's injury-risk records
    Ingest {
        /// JSON file holding one daily input or an array of them
        #[arg(long)]
        input: PathBuf,

        /// Athlete identifier (random when omitted and no prior record is given)
        #[arg(long)]
        athlete_id: Option<Uuid>,

        /// JSON file with the athlete's previous injury-risk record
        #[arg(long)]
        prior: Option<PathBuf>,
    },

    /// Compute load-management signals from a weekly load series
    Stats {
        /// JSON file holding the weekly series, most recent week first
        #[arg(long)]
        series: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    LoggingConfig {
        level: if cli.verbose { "debug" } else { "warn" }.into(),
        format: LogFormat::Compact,
        ..LoggingConfig::default()
    }
    .init()?;

    let config = InjuryRiskConfig::load()?;

    let output = match cli.command {
        Command::Ingest {
            input,
            athlete_id,
            prior,
        } => commands::ingest(config, &input, athlete_id, prior.as_deref()).await?,
        Command::Stats { series } => commands::stats(config, &series).await?,
    };
    println!("{output}");
    Ok(())
}
