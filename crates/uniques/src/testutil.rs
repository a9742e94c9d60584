//! Shared test utilities for the Uniques client.
//!
//! This module provides seeding helpers for building a
//! [`MemoryStorage`] that looks like a chain with collections and items,
//! plus a factory for a fully wired test client. It is feature-gated
//! behind `testutil` to prevent leaking into production builds.
//!
//! # Usage
//!
//! In integration tests, enable the feature in `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! uniques-client = { path = "../uniques", features = ["testutil"] }
//! ```

use std::sync::Arc;

use bytes::Bytes;
use uniques_chain_storage::{MemoryStorage, Value};

use crate::{
    RecordingComposer, Uniques, UniquesConfig,
    entry::{ASSET, CLASS, CLASS_ACCOUNT, CLASS_METADATA_OF, INSTANCE_METADATA_OF},
};

/// Builds a decoded collection-details value owned by `owner`.
#[must_use]
pub fn collection_details_value(owner: &str, items: u32) -> Value {
    Value::composite([
        ("owner", Value::AccountId(owner.to_owned())),
        ("issuer", Value::AccountId(owner.to_owned())),
        ("admin", Value::AccountId(owner.to_owned())),
        ("freezer", Value::AccountId(owner.to_owned())),
        ("total_deposit", Value::U128(0)),
        ("free_holding", Value::Bool(false)),
        ("items", Value::U32(items)),
        ("item_metadatas", Value::U32(0)),
        ("attributes", Value::U32(0)),
        ("is_frozen", Value::Bool(false)),
    ])
}

/// Builds a decoded item-details value owned by `owner`.
#[must_use]
pub fn item_details_value(owner: &str) -> Value {
    Value::composite([
        ("owner", Value::AccountId(owner.to_owned())),
        ("approved", Value::Option(None)),
        ("deposit", Value::U128(0)),
        ("is_frozen", Value::Bool(false)),
    ])
}

/// Builds a decoded metadata value with the given blob.
#[must_use]
pub fn metadata_value(data: &'static [u8]) -> Value {
    Value::composite([
        ("data", Value::Bytes(Bytes::from_static(data))),
        ("deposit", Value::U128(0)),
        ("is_frozen", Value::Bool(false)),
    ])
}

/// Seeds storage with a collection owned by `owner`.
///
/// Plants the details entry and the ownership marker, the two entries a
/// live chain always has for an existing collection.
pub fn seed_collection(storage: &MemoryStorage, id: u32, owner: &str) {
    storage.insert(CLASS, vec![Value::U32(id)], collection_details_value(owner, 0));
    storage.insert_key_only(
        CLASS_ACCOUNT,
        vec![Value::AccountId(owner.to_owned()), Value::U32(id)],
    );
}

/// Seeds storage with a collection that also carries metadata.
pub fn seed_collection_with_metadata(
    storage: &MemoryStorage,
    id: u32,
    owner: &str,
    data: &'static [u8],
) {
    seed_collection(storage, id, owner);
    storage.insert(CLASS_METADATA_OF, vec![Value::U32(id)], metadata_value(data));
}

/// Seeds storage with an item of `collection` owned by `owner`.
pub fn seed_item(storage: &MemoryStorage, collection: u32, item: u32, owner: &str) {
    storage.insert(
        ASSET,
        vec![Value::U32(collection), Value::U32(item)],
        item_details_value(owner),
    );
}

/// Seeds storage with an item that also carries metadata.
pub fn seed_item_with_metadata(
    storage: &MemoryStorage,
    collection: u32,
    item: u32,
    owner: &str,
    data: &'static [u8],
) {
    seed_item(storage, collection, item, owner);
    storage.insert(
        INSTANCE_METADATA_OF,
        vec![Value::U32(collection), Value::U32(item)],
        metadata_value(data),
    );
}

/// Creates a [`Uniques`] client over the given storage, returning the
/// recording composer for call assertions.
#[must_use]
pub fn test_client(storage: &MemoryStorage) -> (Uniques, Arc<RecordingComposer>) {
    let composer = Arc::new(RecordingComposer::new());
    let uniques = Uniques::new(
        Arc::new(storage.clone()),
        Arc::clone(&composer) as Arc<dyn crate::CallComposer>,
        UniquesConfig::default(),
    );
    (uniques, composer)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use uniques_chain_storage::CollectionId;

    use super::*;

    #[tokio::test]
    async fn test_seeded_collection_is_queryable() {
        let storage = MemoryStorage::new();
        seed_collection(&storage, 3, "alice");

        let (uniques, _) = test_client(&storage);
        let details =
            uniques.collection(CollectionId::from(3)).details().await.unwrap().unwrap();
        assert_eq!(details.owner, "alice");
    }

    #[tokio::test]
    async fn test_seeded_item_appears_in_enumeration() {
        let storage = MemoryStorage::new();
        seed_collection(&storage, 0, "alice");
        seed_item(&storage, 0, 7, "bob");

        let (uniques, _) = test_client(&storage);
        let ids = uniques.collection(CollectionId::from(0)).all_item_ids().await.unwrap();
        assert_eq!(ids.len(), 1);
        assert_eq!(u32::from(ids[0]), 7);
    }
}
