//! # Connector Quote Engine
//!
//! ## Purpose
//!
//! Estimates the output of a swap against connector pools before a trade is
//! submitted. Every pool pairs one traded asset with a single base asset;
//! conversions between two traded assets transit the base in two hops.
//!
//! ## Integration Points
//!
//! - **Input Sources**: pool records read through a [`PoolStore`] (a live
//!   ledger reader in production, [`MemoryPoolStore`] in tests)
//! - **Output Destinations**: contracts and services that need a quote before
//!   building a trade
//! - **Configuration**: [`EngineConfig`] names the base asset, the pool table
//!   account, and the [`Variant`]
//! - **Precision**: integer arithmetic end to end, one truncating division
//!   per hop
//!
//! ## Architecture Role
//!
//! ```text
//! get_amount_out(asset, symbol)
//!        │
//!        ▼
//!   [Route::plan] ── Direct ──────────────┐
//!        │                                │
//!        └─ ThroughBase: X → base → Y     │
//!                      │                  │
//!                      ▼                  ▼
//!        per hop: [FeeModel] + [ReserveLookup] → [ConstantProductMath]
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use amm::{EngineConfig, MemoryPoolStore, PoolRecord, QuoteEngine, Variant};
//! use types::{Asset, ExtendedSymbol, Symbol};
//!
//! let base: Symbol = "4,BASE".parse().unwrap();
//! let config = EngineConfig::new(
//!     ExtendedSymbol::new(base, "basetoken".parse().unwrap()),
//!     "dexrelays".parse().unwrap(),
//!     Variant::General,
//! );
//!
//! let record = PoolRecord {
//!     pair: "ABCBASE".into(),
//!     connector_balance: "100.0000 BASE".parse().unwrap(),
//!     outstanding_balance: "200.0000 ABC".parse().unwrap(),
//!     connector_weight: 50,
//!     enabled: true,
//!     reinvest_fees: true,
//!     price: 2.0,
//!     admin_fee_balance: "0.0000 BASE".parse().unwrap(),
//! };
//! let store = MemoryPoolStore::with_records(config.pool_account, [record]);
//! let engine = QuoteEngine::new(config, store);
//!
//! let out = engine
//!     .get_amount_out("1.0000 BASE".parse().unwrap(), "4,ABC".parse().unwrap())
//!     .unwrap();
//! assert_eq!(out, "1.9762 ABC".parse::<Asset>().unwrap());
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod fees;
pub mod pool_record;
pub mod pricing;
pub mod reserves;
pub mod router;
pub mod store;

pub use config::{EngineConfig, Variant};
pub use engine::{HopQuote, Quote, QuoteEngine};
pub use error::{QuoteError, Result};
pub use fees::{FeeModel, CROSS_FEE, DIRECT_FEE};
pub use pool_record::{PoolRecord, SYMMETRIC_WEIGHT};
pub use pricing::{ConstantProductMath, FEE_DENOMINATOR};
pub use reserves::{PoolSides, ReserveLookup, Reserves};
pub use router::{Hop, Route};
pub use store::{MemoryPoolStore, PoolStore};

/// Common types for quote requests
pub use types::{AccountName, Asset, ExtendedSymbol, Symbol, SymbolCode};
