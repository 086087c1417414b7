//! # Ledger Value Types
//!
//! Value types for reading pool records from a ledger key-value table and for
//! expressing quote requests against them.
//!
//! ## Design Philosophy
//!
//! - **Exact Key Derivation**: symbol codes and account names pack to the same
//!   raw `u64` the ledger uses, so table lookups line up
//! - **No Precision Loss**: asset amounts are scaled integers, never floats
//! - **Validated Construction**: a value that exists is always encodable
//!
//! ## Quick Start
//!
//! ```rust
//! use types::{AccountName, Asset, Symbol};
//!
//! let base: Symbol = "4,BASE".parse().unwrap();
//! let account: AccountName = "dexrelays".parse().unwrap();
//! let amount: Asset = "10.0000 ABC".parse().unwrap();
//!
//! assert_eq!(amount.amount(), 100_000);
//! assert_eq!(account.to_string(), "dexrelays");
//! assert_ne!(amount.symbol(), base);
//! ```

pub mod common;

pub use common::asset::{Asset, MAX_AMOUNT};
pub use common::errors::{AssetError, NameError, SymbolError};
pub use common::name::AccountName;
pub use common::symbol::{ExtendedSymbol, Symbol, SymbolCode, MAX_CODE_LEN, MAX_PRECISION};
