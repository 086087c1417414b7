//! Pool snapshot loading
//!
//! A snapshot is a JSON array of pool records as read from the ledger table,
//! e.g.
//!
//! ```json
//! [
//!   {
//!     "pair": "ABCBASE",
//!     "connector_balance": "1000.0000 BASE",
//!     "outstanding_balance": "2000.0000 ABC",
//!     "connector_weight": 50,
//!     "enabled": true,
//!     "reinvest_fees": true,
//!     "price": 2.0,
//!     "admin_fee_balance": "0.0000 BASE"
//!   }
//! ]
//! ```

use amm::{MemoryPoolStore, PoolRecord};
use anyhow::{bail, Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{debug, info};
use types::AccountName;

/// Read a snapshot file into a store under `account`
pub fn load_snapshot(path: &Path, account: AccountName) -> Result<MemoryPoolStore> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read pool snapshot {:?}", path))?;

    let store = parse_snapshot(&content, account)
        .with_context(|| format!("Invalid pool snapshot {:?}", path))?;

    info!(path = ?path, pools = store.len(), %account, "pool snapshot loaded");
    Ok(store)
}

/// Parse snapshot JSON, rejecting two records for the same traded asset
pub fn parse_snapshot(content: &str, account: AccountName) -> Result<MemoryPoolStore> {
    let records: Vec<PoolRecord> =
        serde_json::from_str(content).context("Failed to parse pool records")?;

    let mut seen = HashSet::with_capacity(records.len());
    let mut store = MemoryPoolStore::new();
    for record in records {
        if !seen.insert(record.primary_key()) {
            bail!("duplicate pool for {}", record.outstanding_balance.symbol());
        }
        debug!(pair = %record.pair, key = record.primary_key(), "pool record");
        store.insert(account, record);
    }

    Ok(store)
}
