//! Quoter Configuration Module
//!
//! Provides configuration loading for the quoter service.
//! Supports loading from TOML files with environment-specific overrides.

use amm::EngineConfig;
use anyhow::{Context, Result};
use config_crate::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Config file used when none is given on the command line
pub const DEFAULT_CONFIG_PATH: &str = "config/quoter.toml";

/// Prefix for environment variable overrides (`QUOTER__ENGINE__VARIANT`)
pub const ENV_PREFIX: &str = "QUOTER";

/// Main quoter configuration structure
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct QuoterConfig {
    /// Engine settings: base asset, pool account, variant
    pub engine: EngineConfig,

    /// Log output settings
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Pool snapshot location
    #[serde(default)]
    pub store: StoreConfig,
}

/// Log output settings
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is unset
    pub level: String,
    pub format: LogFormat,
}

/// Log line format
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Pretty => write!(f, "pretty"),
            LogFormat::Json => write!(f, "json"),
        }
    }
}

/// Pool snapshot settings
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// JSON array of pool records; may contain `~` and `${VAR:-default}`
    pub snapshot: PathBuf,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            snapshot: PathBuf::from("./data/pools.json"),
        }
    }
}

impl QuoterConfig {
    /// Load configuration from files with environment overrides
    ///
    /// The environment overlay is read from `environments/<name>.toml` next
    /// to the base file.
    pub fn load(base_path: Option<&Path>, environment: Option<&str>) -> Result<Self> {
        let base = base_path.unwrap_or(Path::new(DEFAULT_CONFIG_PATH));
        debug!("Loading base config: {:?}", base);

        let mut builder = Config::builder().add_source(File::from(base).required(true));

        // Add environment-specific overrides if specified
        if let Some(env) = environment {
            let env_file = base
                .parent()
                .unwrap_or(Path::new("."))
                .join("environments")
                .join(format!("{}.toml", env));

            if env_file.exists() {
                info!("Loading environment config: {:?}", env_file);
                builder = builder.add_source(File::from(env_file));
            } else {
                warn!("Environment config not found: {:?}", env_file);
            }
        }

        // Override with environment variables (QUOTER__ prefix)
        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().context("Failed to build configuration")?;

        config
            .try_deserialize()
            .with_context(|| format!("Failed to deserialize configuration from {:?}", base))
    }

    /// Expand `~` and environment variables in path values
    pub fn expand_env_vars(&mut self) -> Result<()> {
        let raw = self.store.snapshot.to_string_lossy();
        let expanded = shellexpand::full(&raw)
            .context("Failed to expand snapshot path")?
            .into_owned();

        self.store.snapshot = PathBuf::from(expanded);
        Ok(())
    }
}

/// Convenience function to load configuration and expand paths
pub fn load_config(base_path: Option<&Path>, environment: Option<&str>) -> Result<QuoterConfig> {
    let mut config = QuoterConfig::load(base_path, environment)?;
    config.expand_env_vars()?;
    info!(
        base = %config.engine.base,
        pool_account = %config.engine.pool_account,
        variant = %config.engine.variant,
        "configuration loaded"
    );
    Ok(config)
}
