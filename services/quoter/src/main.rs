//! Connector quoter entry point
//!
//! Loads the layered configuration and a pool snapshot, then answers one
//! fee, reserves, or quote request and exits.

mod commands;

use amm::QuoteEngine;
use anyhow::Result;
use clap::{Parser, Subcommand};
use config::{load_config, load_snapshot, LogFormat, LoggingConfig};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use types::{Asset, Symbol};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Environment overlay (config/environments/<name>.toml)
    #[arg(short, long)]
    environment: Option<String>,

    /// Pool snapshot JSON, overriding `store.snapshot`
    #[arg(long)]
    pools: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fee for a conversion, in hundredths of a percent
    Fee {
        /// Input symbol, e.g. 4,ABC
        sym_in: Symbol,
        /// Output symbol
        sym_out: Symbol,
    },
    /// Oriented reserves for a conversion
    Reserves { sym_in: Symbol, sym_out: Symbol },
    /// Output amount with per-hop breakdown
    Quote {
        /// Input amount, e.g. "10.0000 ABC"
        amount: Asset,
        /// Output symbol
        sym_out: Symbol,
        /// Print the quote as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Stderr subscriber used while the configuration that selects the real one
/// is still loading
fn bootstrap_subscriber() -> impl tracing::Subscriber + Send + Sync {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .finish()
}

fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let registry = tracing_subscriber::registry().with(filter);

    // Logs go to stderr so stdout carries only command output
    match logging.format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = tracing::subscriber::with_default(bootstrap_subscriber(), || {
        load_config(Some(&args.config), args.environment.as_deref())
    })?;
    init_tracing(&config.logging);

    info!("Starting quoter");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let snapshot = args.pools.unwrap_or_else(|| config.store.snapshot.clone());
    let store = load_snapshot(&snapshot, config.engine.pool_account)?;
    let engine = QuoteEngine::new(config.engine, store);

    let output = match args.command {
        Command::Fee { sym_in, sym_out } => commands::fee(&engine, sym_in, sym_out),
        Command::Reserves { sym_in, sym_out } => commands::reserves(&engine, sym_in, sym_out)?,
        Command::Quote {
            amount,
            sym_out,
            json,
        } => commands::quote(&engine, amount, sym_out, json)?,
    };

    println!("{}", output);
    Ok(())
}
