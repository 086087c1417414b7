//! Error types for ledger value parsing and checked asset arithmetic
//!
//! Symbol codes, account names, and assets are validated at construction so
//! that a value which exists is always encodable to the ledger's raw form.

use thiserror::Error;

/// Errors that can occur while building a symbol code or symbol
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SymbolError {
    /// Symbol code has no characters
    #[error("Symbol code cannot be empty")]
    EmptyCode,

    /// Symbol code is longer than the packed representation allows
    #[error("Symbol code '{code}' exceeds {max} characters")]
    CodeTooLong { code: String, max: usize },

    /// Symbol code contains a character outside `A`-`Z`
    #[error("Symbol code '{code}' contains invalid character '{found}'")]
    InvalidCharacter { code: String, found: char },

    /// Precision is larger than the ledger accepts
    #[error("Symbol precision {precision} exceeds maximum {max}")]
    PrecisionTooLarge { precision: u8, max: u8 },

    /// Text is not in `<precision>,<CODE>` form
    #[error("Invalid symbol format: '{0}' - expected '<precision>,<CODE>'")]
    InvalidFormat(String),
}

/// Errors that can occur during asset parsing and arithmetic
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AssetError {
    /// Amount magnitude exceeds the ledger's asset range
    #[error("Asset amount {amount} is outside the representable range")]
    OutOfRange { amount: i128 },

    /// Arithmetic between assets of different symbols
    #[error("Symbol mismatch: {left} vs {right}")]
    SymbolMismatch { left: String, right: String },

    /// Text is not in `<amount> <CODE>` form
    #[error("Invalid asset string: '{input}' - expected '<amount> <CODE>'")]
    InvalidFormat { input: String },

    /// Embedded symbol failed validation
    #[error(transparent)]
    Symbol(#[from] SymbolError),
}

/// Errors that can occur while encoding an account name
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NameError {
    /// Name longer than 13 characters
    #[error("Account name '{name}' is longer than 13 characters")]
    TooLong { name: String },

    /// Character outside `.12345a-z`
    #[error("Account name '{name}' contains invalid character '{found}'")]
    InvalidCharacter { name: String, found: char },

    /// Thirteenth character only has four bits available
    #[error("Thirteenth character of account name '{name}' must be one of '.12345abcdefghij'")]
    InvalidThirteenthCharacter { name: String },
}
