//! Ledger value types shared by the quote engine and its hosts

pub mod asset;
pub mod errors;
pub mod name;
pub mod symbol;
