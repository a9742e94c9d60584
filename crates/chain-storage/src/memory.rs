//! In-memory chain storage implementation.
//!
//! This module provides [`MemoryStorage`], an in-memory implementation of
//! [`ChainStorage`] suitable for testing and development.
//!
//! # Features
//!
//! - **Thread-safe**: Uses [`parking_lot::RwLock`] for concurrent access
//! - **Deterministic enumeration**: entries iterate in insertion order, so repeated reads of
//!   unchanged storage return identical results
//! - **Failure injection**: [`insert_malformed`](MemoryStorage::insert_malformed) plants undecodable
//!   values for decode-failure tests
//!
//! # Example
//!
//! ```
//! use uniques_chain_storage::{ChainStorage, MemoryStorage, StorageEntry, Value};
//!
//! #[tokio::main]
//! async fn main() {
//!     const CLASS: StorageEntry = StorageEntry::new("uniques", "class");
//!
//!     let storage = MemoryStorage::new();
//!     storage.insert(CLASS, vec![Value::U32(0)], Value::Bool(true));
//!
//!     let keys = storage.keys(&CLASS, None).await.unwrap();
//!     assert_eq!(keys.len(), 1);
//! }
//! ```
//!
//! # Limitations
//!
//! - Nothing is persisted; all data is lost when the process exits
//! - No notion of blocks or history; reads always see the latest writes

use std::{collections::BTreeMap, sync::Arc};

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::{
    error::StorageResult,
    source::{ChainStorage, StorageEntry},
    value::{KeyTuple, Lookup, Value},
};

/// One stored entry: a key tuple and its (tagged) value.
#[derive(Debug, Clone)]
struct StoredEntry {
    key: KeyTuple,
    lookup: Lookup,
}

/// In-memory implementation of [`ChainStorage`].
///
/// Primarily intended for testing, but also usable as a fixture backend
/// during development. Entries are grouped per [`StorageEntry`] and kept
/// in insertion order.
///
/// # Cloning
///
/// `MemoryStorage` is cheaply cloneable via [`Arc`]. All clones share the
/// same underlying data.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    data: Arc<RwLock<BTreeMap<StorageEntry, Vec<StoredEntry>>>>,
}

impl MemoryStorage {
    /// Creates an empty in-memory storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` under `key` in `entry`.
    ///
    /// Duplicate keys are allowed and kept — a correct chain never emits
    /// them, but readers above this layer must tolerate them, so tests
    /// need a way to produce them.
    pub fn insert(&self, entry: StorageEntry, key: Vec<Value>, value: Value) {
        self.push(entry, key, Lookup::Decoded(value));
    }

    /// Stores a key with no value behind it.
    ///
    /// Enumeration returns the key; fetching its value yields
    /// [`Lookup::Absent`].
    pub fn insert_key_only(&self, entry: StorageEntry, key: Vec<Value>) {
        self.push(entry, key, Lookup::Absent);
    }

    /// Stores an undecodable value under `key`.
    ///
    /// Fetching it yields [`Lookup::Malformed`] with the given reason.
    pub fn insert_malformed(&self, entry: StorageEntry, key: Vec<Value>, reason: &str) {
        self.push(entry, key, Lookup::Malformed { reason: reason.to_owned() });
    }

    /// Removes every occurrence of `key` from `entry`.
    pub fn remove(&self, entry: &StorageEntry, key: &[Value]) {
        let mut data = self.data.write();
        if let Some(entries) = data.get_mut(entry) {
            entries.retain(|stored| stored.key.components() != key);
        }
    }

    /// Removes all keys of `entry`.
    pub fn clear(&self, entry: &StorageEntry) {
        self.data.write().remove(entry);
    }

    fn push(&self, entry: StorageEntry, key: Vec<Value>, lookup: Lookup) {
        let mut data = self.data.write();
        data.entry(entry).or_default().push(StoredEntry { key: KeyTuple::new(key), lookup });
    }
}

impl std::fmt::Debug for MemoryStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let data = self.data.read();
        f.debug_struct("MemoryStorage").field("entries", &data.len()).finish_non_exhaustive()
    }
}

#[async_trait]
impl ChainStorage for MemoryStorage {
    async fn keys(
        &self,
        entry: &StorageEntry,
        scope: Option<&Value>,
    ) -> StorageResult<Vec<KeyTuple>> {
        let data = self.data.read();
        let Some(entries) = data.get(entry) else {
            return Ok(Vec::new());
        };

        let keys = entries
            .iter()
            .filter(|stored| match scope {
                Some(scope) => stored.key.component(0) == Some(scope),
                None => true,
            })
            .map(|stored| stored.key.clone())
            .collect();

        Ok(keys)
    }

    async fn value(&self, entry: &StorageEntry, key: &KeyTuple) -> StorageResult<Lookup> {
        let data = self.data.read();
        let hit = data
            .get(entry)
            .and_then(|entries| entries.iter().find(|stored| &stored.key == key))
            .map(|stored| stored.lookup.clone());

        Ok(hit.unwrap_or(Lookup::Absent))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    const CLASS: StorageEntry = StorageEntry::new("uniques", "class");
    const ASSET: StorageEntry = StorageEntry::new("uniques", "asset");

    #[tokio::test]
    async fn test_empty_entry_yields_empty_keys() {
        let storage = MemoryStorage::new();
        let keys = storage.keys(&CLASS, None).await.unwrap();
        assert!(keys.is_empty());
    }

    #[tokio::test]
    async fn test_keys_preserve_insertion_order() {
        let storage = MemoryStorage::new();
        storage.insert_key_only(CLASS, vec![Value::U32(5)]);
        storage.insert_key_only(CLASS, vec![Value::U32(2)]);
        storage.insert_key_only(CLASS, vec![Value::U32(9)]);

        let keys = storage.keys(&CLASS, None).await.unwrap();
        let ids: Vec<_> =
            keys.iter().map(|k| k.component(0).and_then(Value::as_u32).unwrap()).collect();
        assert_eq!(ids, vec![5, 2, 9]);
    }

    #[tokio::test]
    async fn test_scope_filters_on_first_component() {
        let storage = MemoryStorage::new();
        storage.insert_key_only(ASSET, vec![Value::U32(1), Value::U32(0)]);
        storage.insert_key_only(ASSET, vec![Value::U32(1), Value::U32(1)]);
        storage.insert_key_only(ASSET, vec![Value::U32(2), Value::U32(0)]);

        let scoped = storage.keys(&ASSET, Some(&Value::U32(1))).await.unwrap();
        assert_eq!(scoped.len(), 2);

        let all = storage.keys(&ASSET, None).await.unwrap();
        assert_eq!(all.len(), 3);
    }

    #[tokio::test]
    async fn test_value_lookup_states() {
        let storage = MemoryStorage::new();
        storage.insert(CLASS, vec![Value::U32(0)], Value::Bool(true));
        storage.insert_malformed(CLASS, vec![Value::U32(1)], "truncated");

        let hit = storage.value(&CLASS, &KeyTuple::new(vec![Value::U32(0)])).await.unwrap();
        assert_eq!(hit, Lookup::Decoded(Value::Bool(true)));

        let bad = storage.value(&CLASS, &KeyTuple::new(vec![Value::U32(1)])).await.unwrap();
        assert!(matches!(bad, Lookup::Malformed { .. }));

        let miss = storage.value(&CLASS, &KeyTuple::new(vec![Value::U32(2)])).await.unwrap();
        assert_eq!(miss, Lookup::Absent);
    }

    #[tokio::test]
    async fn test_remove_deletes_all_occurrences() {
        let storage = MemoryStorage::new();
        storage.insert_key_only(CLASS, vec![Value::U32(3)]);
        storage.insert_key_only(CLASS, vec![Value::U32(3)]);
        storage.insert_key_only(CLASS, vec![Value::U32(4)]);

        storage.remove(&CLASS, &[Value::U32(3)]);

        let keys = storage.keys(&CLASS, None).await.unwrap();
        assert_eq!(keys.len(), 1);
    }

    #[tokio::test]
    async fn test_clones_share_data() {
        let storage = MemoryStorage::new();
        let clone = storage.clone();
        clone.insert_key_only(CLASS, vec![Value::U32(0)]);

        let keys = storage.keys(&CLASS, None).await.unwrap();
        assert_eq!(keys.len(), 1);
    }
}
