//! Quote failure taxonomy
//!
//! Every failure aborts the whole request. The engine never writes, so there
//! is nothing to roll back and nothing worth retrying without a store change.

use thiserror::Error;
use types::{AssetError, Symbol};

/// Errors returned by every public quote operation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuoteError {
    /// Input and output symbols are identical, or a direct lookup was asked
    /// for a pair without the base asset in the simplified variant
    #[error("Invalid pair: {sym_in} -> {sym_out}")]
    InvalidPair { sym_in: Symbol, sym_out: Symbol },

    /// No pool record exists for the symbol
    #[error("Invalid symbol: no pool record for {0}")]
    InvalidSymbol(Symbol),

    /// Pool record holds a balance in a different symbol than the request
    /// or the configured base, e.g. same code at another precision
    #[error("Symbol mismatch: expected {expected}, pool holds {found}")]
    SymbolMismatch { expected: Symbol, found: Symbol },

    /// Pool weighting other than 50/50
    #[error("Unsupported connector weight {weight} for {symbol}: only 50/50 pools supported")]
    UnsupportedWeight { symbol: Symbol, weight: u64 },

    /// Router produced a hop that cannot exist
    #[error("Unreachable: hop {sym_in} -> {sym_out} does not touch the base asset")]
    Unreachable { sym_in: Symbol, sym_out: Symbol },

    /// Negative quantity passed as input or found as a reserve
    #[error("Negative amount: {0}")]
    NegativeAmount(i64),

    /// Fee larger than 100%
    #[error("Invalid fee: {0} exceeds 10000 hundredths of a percent")]
    InvalidFee(u32),

    /// Zero reserve used as a divisor
    #[error("Empty reserve for {0}")]
    EmptyReserve(Symbol),

    /// Result does not fit an asset amount
    #[error("Overflow: {0}")]
    Overflow(&'static str),

    /// Pool is disabled and the engine was configured to honour the flag
    #[error("Pool for {0} is disabled")]
    PoolDisabled(Symbol),

    #[error(transparent)]
    Asset(#[from] AssetError),
}

pub type Result<T> = std::result::Result<T, QuoteError>;
