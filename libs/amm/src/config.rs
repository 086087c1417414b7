//! Engine configuration
//!
//! The base asset and the pool table's account are explicit values handed to
//! the engine, so it can be pointed at synthetic stores in tests.

use serde::{Deserialize, Serialize};
use std::fmt;
use types::{AccountName, ExtendedSymbol, Symbol};

/// Reserve and fee strategy
///
/// Both designs are kept side by side; they agree on routing and on the
/// pricing formula and differ in how reserves and fees are derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Reads both balances as stored, checks the 50/50 weight, charges 20
    /// for base-adjacent pairs and 40 otherwise
    #[default]
    General,
    /// Assumes symmetry: base-side reserve is twice the connector balance,
    /// no weight check, flat 20 fee
    Simplified,
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::General => write!(f, "general"),
            Variant::Simplified => write!(f, "simplified"),
        }
    }
}

/// Immutable engine settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Asset every pool is paired against
    pub base: ExtendedSymbol,
    /// Account owning the pool table
    pub pool_account: AccountName,
    #[serde(default)]
    pub variant: Variant,
    /// Reject pools whose `enabled` flag is off
    #[serde(default)]
    pub require_enabled: bool,
}

impl EngineConfig {
    pub fn new(base: ExtendedSymbol, pool_account: AccountName, variant: Variant) -> Self {
        Self {
            base,
            pool_account,
            variant,
            require_enabled: false,
        }
    }

    pub fn with_require_enabled(mut self, require_enabled: bool) -> Self {
        self.require_enabled = require_enabled;
        self
    }

    pub fn base_symbol(&self) -> Symbol {
        self.base.symbol
    }

    pub fn is_base(&self, symbol: Symbol) -> bool {
        symbol == self.base.symbol
    }
}
