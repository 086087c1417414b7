//! # Quoter Configuration
//!
//! Layered configuration for the connector quoter and loading of the pool
//! snapshot it quotes against.
//!
//! ## Features
//!
//! - **Layered Loading**: base TOML file, optional environment overlay, then
//!   `QUOTER__`-prefixed environment variables
//! - **Typed Engine Settings**: base symbol, pool account and variant are
//!   validated while deserializing
//! - **Pool Snapshots**: JSON arrays of pool records loaded into a
//!   [`amm::MemoryPoolStore`]
//!
//! ## Usage
//!
//! ```rust,no_run
//! use config::{load_config, load_snapshot};
//! use amm::QuoteEngine;
//!
//! let config = load_config(None, Some("staging"))?;
//! let store = load_snapshot(&config.store.snapshot, config.engine.pool_account)?;
//! let engine = QuoteEngine::new(config.engine, store);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod quoter_config;
pub mod snapshot;

pub use quoter_config::{
    load_config, LogFormat, LoggingConfig, QuoterConfig, StoreConfig, DEFAULT_CONFIG_PATH,
    ENV_PREFIX,
};
pub use snapshot::{load_snapshot, parse_snapshot};
