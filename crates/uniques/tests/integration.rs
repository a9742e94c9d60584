//! Integration tests for the Uniques access layer.
//!
//! These tests run the full stack — accessors, key-space enumeration, gap
//! allocation, call composition — over an in-memory `ChainStorage`
//! implementation, without a chain node.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use bytes::Bytes;
use uniques_chain_storage::{CollectionId, ItemId, MemoryStorage, Value};
use uniques_client::{
    CallArg, UniquesError,
    entry::{ASSET, ATTRIBUTE, CLASS, COLLECTION_MAX_SUPPLY, ITEM_PRICE_OF},
    testutil::{seed_collection, seed_collection_with_metadata, seed_item, test_client},
};

// ============================================================================
// Collection Enumeration Tests
// ============================================================================

#[tokio::test]
async fn test_no_collections_yields_empty_enumeration() {
    let storage = MemoryStorage::new();
    let (uniques, _) = test_client(&storage);

    let ids = uniques.all_collection_ids().await.unwrap();
    assert!(ids.is_empty());
}

#[tokio::test]
async fn test_collection_ids_are_sorted_and_deduplicated() {
    let storage = MemoryStorage::new();
    for id in [5, 2, 9, 2, 0] {
        storage.insert_key_only(CLASS, vec![Value::U32(id)]);
    }
    let (uniques, _) = test_client(&storage);

    let ids = uniques.all_collection_ids().await.unwrap();
    let raw: Vec<u32> = ids.into_iter().map(u32::from).collect();
    assert_eq!(raw, vec![0, 2, 5, 9]);
}

#[tokio::test]
async fn test_all_collections_returns_one_accessor_per_id() {
    let storage = MemoryStorage::new();
    seed_collection(&storage, 0, "alice");
    seed_collection(&storage, 4, "bob");
    let (uniques, _) = test_client(&storage);

    let collections = uniques.all_collections().await.unwrap();
    assert_eq!(collections.len(), 2);
    assert_eq!(collections[0].id(), CollectionId::from(0));
    assert_eq!(collections[1].id(), CollectionId::from(4));
}

#[tokio::test]
async fn test_enumeration_is_idempotent_without_mutation() {
    let storage = MemoryStorage::new();
    for id in [8, 1, 1, 3] {
        storage.insert_key_only(CLASS, vec![Value::U32(id)]);
    }
    let (uniques, _) = test_client(&storage);

    let first = uniques.all_collection_ids().await.unwrap();
    let second = uniques.all_collection_ids().await.unwrap();
    assert_eq!(first, second);
}

// ============================================================================
// Identifier Allocation Tests
// ============================================================================

#[tokio::test]
async fn test_first_collection_id_is_zero() {
    let storage = MemoryStorage::new();
    let (uniques, _) = test_client(&storage);

    let id = uniques.next_collection_id().await.unwrap();
    assert_eq!(id, CollectionId::from(0));
}

#[tokio::test]
async fn test_dense_collection_space_appends() {
    let storage = MemoryStorage::new();
    for id in 0..4 {
        seed_collection(&storage, id, "alice");
    }
    let (uniques, _) = test_client(&storage);

    let id = uniques.next_collection_id().await.unwrap();
    assert_eq!(id, CollectionId::from(4));
}

#[tokio::test]
async fn test_destroyed_collection_gap_is_refilled() {
    let storage = MemoryStorage::new();
    for id in [0, 2, 3] {
        seed_collection(&storage, id, "alice");
    }
    let (uniques, _) = test_client(&storage);

    let id = uniques.next_collection_id().await.unwrap();
    assert_eq!(id, CollectionId::from(1));
}

#[tokio::test]
async fn test_item_allocation_is_scoped_per_collection() {
    let storage = MemoryStorage::new();
    seed_collection(&storage, 0, "alice");
    seed_collection(&storage, 1, "bob");
    // Collection 0 holds items 0..3; collection 1 holds item 5 only.
    for item in 0..3 {
        seed_item(&storage, 0, item, "alice");
    }
    seed_item(&storage, 1, 5, "bob");
    let (uniques, _) = test_client(&storage);

    let next_in_0 = uniques.collection(CollectionId::from(0)).next_item_id().await.unwrap();
    let next_in_1 = uniques.collection(CollectionId::from(1)).next_item_id().await.unwrap();
    assert_eq!(next_in_0, ItemId::from(3));
    assert_eq!(next_in_1, ItemId::from(0));
}

// ============================================================================
// Create / Mint Flow Tests
// ============================================================================

#[tokio::test]
async fn test_create_collection_composes_create_with_allocated_id() {
    let storage = MemoryStorage::new();
    seed_collection(&storage, 0, "alice");
    seed_collection(&storage, 2, "alice");
    let (uniques, composer) = test_client(&storage);

    let id = uniques.create_collection("alice").await.unwrap();
    assert_eq!(id, CollectionId::from(1));

    let calls = composer.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].pallet, "uniques");
    assert_eq!(calls[0].name, "create");
    assert_eq!(calls[0].args[0], CallArg::Id(1));
    assert_eq!(calls[0].args[1], CallArg::Account("alice".into()));
}

#[tokio::test]
async fn test_mint_item_composes_mint_with_allocated_id() {
    let storage = MemoryStorage::new();
    seed_collection(&storage, 7, "alice");
    seed_item(&storage, 7, 0, "alice");
    seed_item(&storage, 7, 1, "alice");
    let (uniques, composer) = test_client(&storage);

    let id = uniques.collection(CollectionId::from(7)).mint_item("bob").await.unwrap();
    assert_eq!(id, ItemId::from(2));

    let calls = composer.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].name, "mint");
    assert_eq!(
        calls[0].args,
        vec![CallArg::Id(7), CallArg::Id(2), CallArg::Account("bob".into())]
    );
}

#[tokio::test]
async fn test_failed_enumeration_composes_no_call() {
    let storage = MemoryStorage::new();
    seed_collection(&storage, 0, "alice");
    // A key whose id component is not an integer: collaborator contract
    // violation, must abort the mint without composing anything.
    storage.insert_key_only(CLASS, vec![Value::Bytes(Bytes::from_static(b"bad"))]);
    let (uniques, composer) = test_client(&storage);

    let err = uniques.create_collection("alice").await.unwrap_err();
    assert!(matches!(err, UniquesError::Storage(_)));
    assert!(composer.is_empty());
}

#[tokio::test]
async fn test_failed_item_enumeration_composes_no_mint() {
    let storage = MemoryStorage::new();
    seed_collection(&storage, 0, "alice");
    seed_item(&storage, 0, 0, "alice");
    // Non-integer item component in the asset key space: the mint must
    // abort before anything reaches the composer.
    storage.insert_key_only(
        ASSET,
        vec![Value::U32(0), Value::Bytes(Bytes::from_static(b"bad"))],
    );
    let (uniques, composer) = test_client(&storage);

    let err = uniques.collection(CollectionId::from(0)).mint_item("bob").await.unwrap_err();
    assert!(matches!(err, UniquesError::Storage(_)));
    assert!(composer.is_empty());
}

// ============================================================================
// Query Tests
// ============================================================================

#[tokio::test]
async fn test_details_of_missing_collection_is_none() {
    let storage = MemoryStorage::new();
    let (uniques, _) = test_client(&storage);

    let details = uniques.collection(CollectionId::from(9)).details().await.unwrap();
    assert!(details.is_none());
}

#[tokio::test]
async fn test_metadata_roundtrip() {
    let storage = MemoryStorage::new();
    seed_collection_with_metadata(&storage, 1, "alice", b"ipfs://meta");
    let (uniques, _) = test_client(&storage);

    let metadata = uniques.collection(CollectionId::from(1)).metadata().await.unwrap().unwrap();
    assert_eq!(metadata.data, Bytes::from_static(b"ipfs://meta"));
    assert!(!metadata.is_frozen);
}

#[tokio::test]
async fn test_owned_by_reflects_ownership_marker() {
    let storage = MemoryStorage::new();
    seed_collection(&storage, 2, "alice");
    let (uniques, _) = test_client(&storage);
    let collection = uniques.collection(CollectionId::from(2));

    assert!(collection.owned_by("alice").await.unwrap());
    assert!(!collection.owned_by("bob").await.unwrap());
}

#[tokio::test]
async fn test_max_supply_absent_then_present() {
    let storage = MemoryStorage::new();
    seed_collection(&storage, 0, "alice");
    let (uniques, _) = test_client(&storage);
    let collection = uniques.collection(CollectionId::from(0));

    assert!(collection.max_supply().await.unwrap().is_none());

    storage.insert(COLLECTION_MAX_SUPPLY, vec![Value::U32(0)], Value::U32(100));
    assert_eq!(collection.max_supply().await.unwrap(), Some(100));
}

#[tokio::test]
async fn test_item_price_query() {
    let storage = MemoryStorage::new();
    seed_collection(&storage, 0, "alice");
    seed_item(&storage, 0, 3, "alice");
    storage.insert(
        ITEM_PRICE_OF,
        vec![Value::U32(0), Value::U32(3)],
        Value::Tuple(vec![
            Value::U128(250),
            Value::Option(Some(Box::new(Value::AccountId("bob".into())))),
        ]),
    );
    let (uniques, _) = test_client(&storage);

    let price = uniques
        .collection(CollectionId::from(0))
        .item(ItemId::from(3))
        .price()
        .await
        .unwrap()
        .unwrap();
    assert_eq!(price.amount, 250);
    assert_eq!(price.whitelisted_buyer.as_deref(), Some("bob"));
}

#[tokio::test]
async fn test_item_attribute_query() {
    let storage = MemoryStorage::new();
    seed_collection(&storage, 0, "alice");
    seed_item(&storage, 0, 1, "alice");
    storage.insert(
        ATTRIBUTE,
        vec![
            Value::U32(0),
            Value::Option(Some(Box::new(Value::U32(1)))),
            Value::Bytes(Bytes::from_static(b"rarity")),
        ],
        Value::Tuple(vec![Value::Bytes(Bytes::from_static(b"legendary")), Value::U128(0)]),
    );
    let (uniques, _) = test_client(&storage);

    let value = uniques
        .collection(CollectionId::from(0))
        .item(ItemId::from(1))
        .attribute(Bytes::from_static(b"rarity"))
        .await
        .unwrap();
    assert_eq!(value, Some(Bytes::from_static(b"legendary")));
}

// ============================================================================
// Absent vs Malformed Tests
// ============================================================================

#[tokio::test]
async fn test_malformed_value_is_decode_error_not_none() {
    let storage = MemoryStorage::new();
    storage.insert_malformed(CLASS, vec![Value::U32(0)], "truncated record");
    let (uniques, _) = test_client(&storage);

    let err = uniques.collection(CollectionId::from(0)).details().await.unwrap_err();
    assert!(matches!(err, UniquesError::Storage(_)));
    assert!(err.to_string().contains("truncated record"));
}

#[tokio::test]
async fn test_malformed_item_details_propagate() {
    let storage = MemoryStorage::new();
    seed_collection(&storage, 0, "alice");
    storage.insert_malformed(ASSET, vec![Value::U32(0), Value::U32(0)], "bad owner field");
    let (uniques, _) = test_client(&storage);

    let result =
        uniques.collection(CollectionId::from(0)).item(ItemId::from(0)).details().await;
    assert!(result.is_err());
}

// ============================================================================
// Call Composition Tests
// ============================================================================

#[tokio::test]
async fn test_item_lifecycle_calls() {
    let storage = MemoryStorage::new();
    seed_collection(&storage, 1, "alice");
    seed_item(&storage, 1, 0, "alice");
    let (uniques, composer) = test_client(&storage);

    let item = uniques.collection(CollectionId::from(1)).item(ItemId::from(0));
    item.transfer("bob").unwrap();
    item.set_price(Some(1_000), None).unwrap();
    item.freeze().unwrap();
    item.thaw().unwrap();
    item.burn().unwrap();

    let names: Vec<String> = composer.calls().into_iter().map(|c| c.name).collect();
    assert_eq!(names, vec!["transfer", "set_price", "freeze", "thaw", "burn"]);
}

#[tokio::test]
async fn test_collection_lifecycle_calls() {
    let storage = MemoryStorage::new();
    seed_collection(&storage, 1, "alice");
    let (uniques, composer) = test_client(&storage);

    let collection = uniques.collection(CollectionId::from(1));
    collection.set_metadata(Bytes::from_static(b"ipfs://x"), false).unwrap();
    collection.freeze().unwrap();
    collection.thaw().unwrap();
    collection.transfer_ownership("bob").unwrap();
    collection.destroy().unwrap();

    let names: Vec<String> = composer.calls().into_iter().map(|c| c.name).collect();
    assert_eq!(
        names,
        vec!["set_collection_metadata", "freeze_collection", "thaw_collection", "transfer_ownership", "destroy"]
    );
}

// ============================================================================
// Renamed Pallet Tests
// ============================================================================

#[tokio::test]
async fn test_renamed_pallet_addresses_renamed_entries() {
    use std::sync::Arc;
    use uniques_chain_storage::StorageEntry;
    use uniques_client::{RecordingComposer, Uniques, UniquesConfig};

    let storage = MemoryStorage::new();
    storage.insert_key_only(StorageEntry::named("nfts", "class"), vec![Value::U32(0)]);

    let composer = Arc::new(RecordingComposer::new());
    let config = UniquesConfig::builder().pallet("nfts").build().unwrap();
    let uniques = Uniques::new(
        Arc::new(storage.clone()),
        Arc::clone(&composer) as Arc<dyn uniques_client::CallComposer>,
        UniquesConfig::default(),
    );

    // Default config looks at `uniques::class`, which is empty.
    assert!(uniques.all_collection_ids().await.unwrap().is_empty());

    let renamed = Uniques::new(
        Arc::new(storage),
        Arc::clone(&composer) as Arc<dyn uniques_client::CallComposer>,
        config,
    );
    let ids = renamed.all_collection_ids().await.unwrap();
    assert_eq!(ids, vec![CollectionId::from(0)]);

    renamed.create_collection("alice").await.unwrap();
    assert_eq!(composer.calls()[0].pallet, "nfts");
}
