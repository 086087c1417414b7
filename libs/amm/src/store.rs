//! Pool record lookup capability
//!
//! The ledger table is external. The engine only needs "fetch the record
//! stored under this account and key", which [`PoolStore`] captures so hosts
//! can plug in a live ledger reader and tests can use [`MemoryPoolStore`].

use crate::pool_record::PoolRecord;
use std::collections::HashMap;
use std::sync::Arc;
use types::AccountName;

/// Read-only access to pool records
pub trait PoolStore {
    /// Snapshot of the record under `account` with table key `key`, if any
    fn find_pool(&self, account: AccountName, key: u64) -> Option<PoolRecord>;
}

impl<S: PoolStore + ?Sized> PoolStore for &S {
    fn find_pool(&self, account: AccountName, key: u64) -> Option<PoolRecord> {
        (**self).find_pool(account, key)
    }
}

impl<S: PoolStore + ?Sized> PoolStore for Arc<S> {
    fn find_pool(&self, account: AccountName, key: u64) -> Option<PoolRecord> {
        (**self).find_pool(account, key)
    }
}

/// In-memory pool table keyed by `(account, primary key)`
#[derive(Debug, Clone, Default)]
pub struct MemoryPoolStore {
    records: HashMap<(AccountName, u64), PoolRecord>,
}

impl MemoryPoolStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store holding `records` under one account
    pub fn with_records(account: AccountName, records: impl IntoIterator<Item = PoolRecord>) -> Self {
        let mut store = Self::new();
        for record in records {
            store.insert(account, record);
        }
        store
    }

    /// Insert or replace the record for its traded asset, returning the old one
    pub fn insert(&mut self, account: AccountName, record: PoolRecord) -> Option<PoolRecord> {
        self.records.insert((account, record.primary_key()), record)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl PoolStore for MemoryPoolStore {
    fn find_pool(&self, account: AccountName, key: u64) -> Option<PoolRecord> {
        self.records.get(&(account, key)).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::{Asset, SymbolCode};

    fn record(code: &str) -> PoolRecord {
        PoolRecord {
            pair: format!("{code}BASE"),
            connector_balance: "100.0000 BASE".parse().unwrap(),
            outstanding_balance: format!("200.0000 {code}").parse().unwrap(),
            connector_weight: 50,
            enabled: true,
            reinvest_fees: true,
            price: 0.5,
            admin_fee_balance: "0.0000 BASE".parse::<Asset>().unwrap(),
        }
    }

    #[test]
    fn test_memory_store_lookup_by_account_and_key() {
        let relays: AccountName = "dexrelays".parse().unwrap();
        let other: AccountName = "otherrelays".parse().unwrap();
        let store = MemoryPoolStore::with_records(relays, [record("ABC"), record("XYZ")]);

        let key = SymbolCode::new("ABC").unwrap().raw();
        assert_eq!(store.len(), 2);
        assert_eq!(store.find_pool(relays, key).unwrap().pair, "ABCBASE");
        assert!(store.find_pool(other, key).is_none());
        assert!(store
            .find_pool(relays, SymbolCode::new("QQQ").unwrap().raw())
            .is_none());
    }

    #[test]
    fn test_memory_store_insert_replaces() {
        let relays: AccountName = "dexrelays".parse().unwrap();
        let mut store = MemoryPoolStore::new();
        assert!(store.insert(relays, record("ABC")).is_none());

        let mut updated = record("ABC");
        updated.connector_weight = 40;
        let previous = store.insert(relays, updated).unwrap();
        assert_eq!(previous.connector_weight, 50);
        assert_eq!(store.len(), 1);

        let key = SymbolCode::new("ABC").unwrap().raw();
        assert_eq!(store.find_pool(relays, key).unwrap().connector_weight, 40);
        assert!(!store.is_empty());
    }

    #[test]
    fn test_store_through_shared_handles() {
        let relays: AccountName = "dexrelays".parse().unwrap();
        let store = Arc::new(MemoryPoolStore::with_records(relays, [record("ABC")]));
        let key = SymbolCode::new("ABC").unwrap().raw();

        fn lookup(store: impl PoolStore, account: AccountName, key: u64) -> bool {
            store.find_pool(account, key).is_some()
        }

        assert!(lookup(&*store, relays, key));
        assert!(lookup(Arc::clone(&store), relays, key));
    }
}
