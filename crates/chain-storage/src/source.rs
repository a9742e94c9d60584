//! Chain storage collaborator trait definition.
//!
//! This module defines the [`ChainStorage`] trait, the boundary between
//! the typed access layer and whatever actually talks to a chain node.
//! Production implementations wrap an RPC transport; [`MemoryStorage`]
//! (in [`memory`](crate::memory)) implements it in-process for tests.
//!
//! # Design Philosophy
//!
//! - **Decoded at the boundary**: implementations hand over [`KeyTuple`]s and tagged [`Lookup`]s,
//!   never raw bytes, so the layers above this trait handle no untyped data.
//! - **Absence is data**: a missing value is [`Lookup::Absent`] and an empty key space is an empty
//!   vec; neither is an error.
//! - **Async by default**: reads suspend on the transport, nothing else; implementations must be
//!   `Send + Sync` and safe to share behind an `Arc`.
//! - **Cancellation and timeouts belong to the implementation**: this trait adds none of its own. A
//!   cancelled read either completes with a full result or does not complete.
//!
//! # Implementing a Backend
//!
//! 1. Implement [`ChainStorage`] over your transport
//! 2. Decode keys and values before returning them
//! 3. Map transport errors to [`StorageError`](crate::StorageError)
//!
//! See [`MemoryStorage`](crate::MemoryStorage) for a reference implementation.

use async_trait::async_trait;

use crate::{
    error::StorageResult,
    value::{KeyTuple, Lookup, Value},
};

/// Names one storage entry of one pallet.
///
/// An entry is the unit of key enumeration: all keys under `(pallet,
/// name)` share a tuple shape. Entries for the canonical pallet name are
/// `const`-constructible; chains that mount the pallet under another name
/// use [`named`](StorageEntry::named).
///
/// # Examples
///
/// ```
/// use uniques_chain_storage::StorageEntry;
///
/// const CLASS: StorageEntry = StorageEntry::new("uniques", "class");
/// assert_eq!(CLASS.to_string(), "uniques::class");
///
/// let renamed = StorageEntry::named("nfts", "class");
/// assert_eq!(renamed.pallet(), "nfts");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StorageEntry {
    pallet: std::borrow::Cow<'static, str>,
    name: std::borrow::Cow<'static, str>,
}

impl StorageEntry {
    /// Creates a storage entry reference from static names.
    #[must_use]
    pub const fn new(pallet: &'static str, name: &'static str) -> Self {
        Self {
            pallet: std::borrow::Cow::Borrowed(pallet),
            name: std::borrow::Cow::Borrowed(name),
        }
    }

    /// Creates a storage entry reference with a runtime pallet name.
    #[must_use]
    pub fn named(pallet: impl Into<String>, name: &'static str) -> Self {
        Self {
            pallet: std::borrow::Cow::Owned(pallet.into()),
            name: std::borrow::Cow::Borrowed(name),
        }
    }

    /// Pallet the entry belongs to.
    #[must_use]
    pub fn pallet(&self) -> &str {
        &self.pallet
    }

    /// Entry name within the pallet.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for StorageEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}::{}", self.pallet, self.name)
    }
}

/// Abstract reader over a chain's storage.
///
/// Implementations are expected to be thread-safe (`Send + Sync`) and
/// support concurrent reads; the trait holds no state between calls and
/// provides no ordering guarantee between concurrent callers.
///
/// # Example
///
/// ```
/// use uniques_chain_storage::{ChainStorage, MemoryStorage, StorageEntry, Value};
///
/// # tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap().block_on(async {
/// const CLASS: StorageEntry = StorageEntry::new("uniques", "class");
///
/// let storage = MemoryStorage::new();
/// storage.insert_key_only(CLASS, vec![Value::U32(4)]);
///
/// let keys = storage.keys(&CLASS, None).await.unwrap();
/// assert_eq!(keys.len(), 1);
/// # });
/// ```
#[async_trait]
pub trait ChainStorage: Send + Sync {
    /// Enumerates the currently stored key tuples under `entry`.
    ///
    /// When `scope` is given, only tuples whose **first** component equals
    /// the scope value are returned — the way an item enumeration is
    /// restricted to one collection. No scope returns every tuple.
    ///
    /// # Returns
    ///
    /// - `Ok(tuples)` — possibly empty; an entry with no stored keys is not an error
    /// - `Err(...)` on transport or key-decode failures
    #[must_use = "storage reads may fail and errors must be handled"]
    async fn keys(
        &self,
        entry: &StorageEntry,
        scope: Option<&Value>,
    ) -> StorageResult<Vec<KeyTuple>>;

    /// Fetches and decodes the value stored under `key` in `entry`.
    ///
    /// # Returns
    ///
    /// - `Ok(Lookup::Decoded(value))` if the entry exists and decoded cleanly
    /// - `Ok(Lookup::Absent)` if no value is stored at the key
    /// - `Ok(Lookup::Malformed { .. })` if stored bytes could not be decoded
    /// - `Err(...)` on transport failures
    #[must_use = "storage reads may fail and errors must be handled"]
    async fn value(&self, entry: &StorageEntry, key: &KeyTuple) -> StorageResult<Lookup>;
}
