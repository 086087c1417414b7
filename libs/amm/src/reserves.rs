//! Pool reserve lookup
//!
//! Translates a traded-asset symbol into its pool's reserves. The pool table
//! is keyed by the raw symbol code under the configured pool account; the
//! base asset has no record of its own.
//!
//! The two variants read a record differently:
//!
//! | Variant | Base-side reserve | Traded-side reserve | Weight check |
//! |---------|-------------------|---------------------|--------------|
//! | General | `connector_balance` | `outstanding_balance` | must be 50 |
//! | Simplified | `2 × connector_balance` | `outstanding_balance` | none |

use crate::config::{EngineConfig, Variant};
use crate::error::{QuoteError, Result};
use crate::pool_record::PoolRecord;
use crate::pricing::ConstantProductMath;
use crate::store::PoolStore;
use tracing::{debug, warn};
use types::{Asset, Symbol};

/// Both sides of one pool as the active variant sees them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolSides {
    pub base: Asset,
    pub traded: Asset,
}

/// Reserves oriented for a conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reserves {
    pub reserve_in: Asset,
    pub reserve_out: Asset,
}

impl Reserves {
    pub fn swapped(self) -> Self {
        Self {
            reserve_in: self.reserve_out,
            reserve_out: self.reserve_in,
        }
    }
}

impl From<Reserves> for (Asset, Asset) {
    fn from(reserves: Reserves) -> Self {
        (reserves.reserve_in, reserves.reserve_out)
    }
}

/// Read-only view of the pool table for one engine configuration
pub struct ReserveLookup<'a, S: ?Sized> {
    store: &'a S,
    config: &'a EngineConfig,
}

impl<'a, S: PoolStore + ?Sized> ReserveLookup<'a, S> {
    pub fn new(store: &'a S, config: &'a EngineConfig) -> Self {
        Self { store, config }
    }

    /// Fetch the pool record for a traded asset
    pub fn pool(&self, symbol: Symbol) -> Result<PoolRecord> {
        let key = symbol.code().raw();
        let record = self
            .store
            .find_pool(self.config.pool_account, key)
            .ok_or_else(|| {
                debug!(%symbol, key, account = %self.config.pool_account, "no pool record");
                QuoteError::InvalidSymbol(symbol)
            })?;

        // Lookup is by code only; both sides must match in precision too
        let traded = record.outstanding_balance.symbol();
        if traded != symbol {
            warn!(%symbol, %traded, pair = %record.pair, "pool holds a different traded symbol");
            return Err(QuoteError::SymbolMismatch {
                expected: symbol,
                found: traded,
            });
        }
        let connector = record.connector_balance.symbol();
        if !self.config.is_base(connector) {
            warn!(%symbol, %connector, pair = %record.pair, "pool connector is not the base asset");
            return Err(QuoteError::SymbolMismatch {
                expected: self.config.base_symbol(),
                found: connector,
            });
        }

        if self.config.require_enabled && !record.enabled {
            warn!(%symbol, pair = %record.pair, "pool is disabled");
            return Err(QuoteError::PoolDisabled(symbol));
        }

        Ok(record)
    }

    /// Base-side and traded-side reserves of the pool for `symbol`
    pub fn sides(&self, symbol: Symbol) -> Result<PoolSides> {
        let record = self.pool(symbol)?;

        match self.config.variant {
            Variant::General => {
                if !record.is_symmetric() {
                    warn!(%symbol, weight = record.connector_weight, "unsupported connector weight");
                    return Err(QuoteError::UnsupportedWeight {
                        symbol,
                        weight: record.connector_weight,
                    });
                }
                Ok(PoolSides {
                    base: record.connector_balance,
                    traded: record.outstanding_balance,
                })
            }
            Variant::Simplified => {
                let connector = record.connector_balance;
                let doubled = Asset::from_wide(connector.amount() as i128 * 2, connector.symbol())?;
                Ok(PoolSides {
                    base: doubled,
                    traded: record.outstanding_balance,
                })
            }
        }
    }

    /// Reserves for converting `sym_in` into `sym_out`
    pub fn reserves(&self, sym_in: Symbol, sym_out: Symbol) -> Result<Reserves> {
        if sym_in == sym_out {
            return Err(QuoteError::InvalidPair { sym_in, sym_out });
        }

        if self.config.is_base(sym_in) {
            let sides = self.sides(sym_out)?;
            return Ok(Reserves {
                reserve_in: sides.base,
                reserve_out: sides.traded,
            });
        }
        if self.config.is_base(sym_out) {
            let sides = self.sides(sym_in)?;
            return Ok(Reserves {
                reserve_in: sides.traded,
                reserve_out: sides.base,
            });
        }

        match self.config.variant {
            Variant::General => self.cross_reserves(sym_in, sym_out),
            Variant::Simplified => Err(QuoteError::InvalidPair { sym_in, sym_out }),
        }
    }

    /// Synthetic reserves for a pair that shares no pool: `sym_out`'s traded
    /// reserve rescaled to `sym_in`'s base reserve
    fn cross_reserves(&self, sym_in: Symbol, sym_out: Symbol) -> Result<Reserves> {
        let from = self.sides(sym_in)?;
        let to = self.sides(sym_out)?;

        let scaled = ConstantProductMath::mul_div(
            to.traded.amount(),
            from.base.amount(),
            to.base.amount(),
        )
        .ok_or(QuoteError::EmptyReserve(sym_out))?;

        let reserve_out = Asset::from_wide(scaled, to.traded.symbol())
            .map_err(|_| QuoteError::Overflow("cross reserve exceeds asset range"))?;

        Ok(Reserves {
            reserve_in: from.traded,
            reserve_out,
        })
    }
}
