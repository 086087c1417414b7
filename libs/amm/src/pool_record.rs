//! Pool record as stored in the ledger's pair table

use serde::{Deserialize, Serialize};
use types::{Asset, SymbolCode};

/// Connector weight of a symmetric (50/50) pool
pub const SYMMETRIC_WEIGHT: u64 = 50;

/// One pool per traded asset, implicitly paired against the base asset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoolRecord {
    /// Informational label
    pub pair: String,
    /// Base-asset side of the pool
    pub connector_balance: Asset,
    /// Traded-asset side of the pool (its supply against the pool)
    pub outstanding_balance: Asset,
    /// Bonding-curve weight in percent
    pub connector_weight: u64,
    pub enabled: bool,
    pub reinvest_fees: bool,
    /// Advisory spot price, never read by the pricing formulas
    pub price: f32,
    pub admin_fee_balance: Asset,
}

impl PoolRecord {
    /// Table key: raw code of the traded asset's symbol
    pub fn primary_key(&self) -> u64 {
        self.traded_code().raw()
    }

    pub fn traded_code(&self) -> SymbolCode {
        self.outstanding_balance.symbol().code()
    }

    pub fn is_symmetric(&self) -> bool {
        self.connector_weight == SYMMETRIC_WEIGHT
    }
}
