// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod commands;

use clap::Parser;
use commands::{Command, run};
use std::path::PathBuf;
use steelcalc::{DiscountRepository, PricingStore, RuleRepository};
use steelcalc_persistence::{JsonFileRepository, Persistence};
use tracing::info;

/// Steel Calc - weight and price calculator for steel products
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long, global = true, conflicts_with = "json_dir")]
    database: Option<PathBuf>,

    /// Directory holding the rule and discount collections as JSON files
    #[arg(long, global = true)]
    json_dir: Option<PathBuf>,

    /// Material density in kg/m³ used for quotes
    #[arg(long, global = true)]
    density: Option<String>,

    #[command(subcommand)]
    command: Command,
}

fn execute<R>(
    mut store: PricingStore<R>,
    args: &Args,
) -> Result<String, Box<dyn std::error::Error>>
where
    R: RuleRepository + DiscountRepository,
{
    let response: serde_json::Value = run(&mut store, &args.command, args.density.as_deref())?;
    Ok(serde_json::to_string_pretty(&response)?)
}

fn dispatch(args: &Args) -> Result<String, Box<dyn std::error::Error>> {
    if let Some(dir) = &args.json_dir {
        info!("Using JSON collections in: {}", dir.display());
        return execute(PricingStore::new(JsonFileRepository::new(dir)), args);
    }

    let persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path.display());
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };
    execute(PricingStore::new(persistence), args)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let output: String = dispatch(&args)?;
    println!("{output}");

    Ok(())
}
