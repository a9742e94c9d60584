//! Collection accessor.
//!
//! A [`Collection`] names one collection by id and exposes its storage
//! queries, item enumeration, and the state-changing calls scoped to it.
//! Queries return `Ok(None)` when the chain stores nothing — only
//! malformed data or transport trouble is an error.

use std::sync::Arc;

use bytes::Bytes;
use uniques_chain_storage::{CollectionId, ItemId, Value};

use crate::{
    alloc::first_gap,
    call::CallArg,
    client::Shared,
    error::Result,
    item::Item,
    keyspace::enumerate,
    types::{self, CollectionDetails, CollectionMetadata},
};

/// Accessor for one collection of the Uniques pallet.
#[derive(Clone)]
pub struct Collection {
    shared: Arc<Shared>,
    id: CollectionId,
}

impl std::fmt::Debug for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Collection").field("id", &self.id).finish_non_exhaustive()
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Collection #{}", self.id)
    }
}

impl Collection {
    pub(crate) fn new(shared: Arc<Shared>, id: CollectionId) -> Self {
        Self { shared, id }
    }

    /// This collection's identifier.
    #[must_use]
    pub fn id(&self) -> CollectionId {
        self.id
    }

    fn id_value(&self) -> Value {
        Value::U32(self.id.into())
    }

    /// Fetches the collection's metadata, if set.
    ///
    /// # Errors
    ///
    /// Propagates storage failures and malformed stored values.
    pub async fn metadata(&self) -> Result<Option<CollectionMetadata>> {
        let entry = &self.shared.entries.class_metadata_of;
        let value = self.shared.query(entry, vec![self.id_value()]).await?;
        value.map(|v| CollectionMetadata::from_value(&v, entry)).transpose()
    }

    /// Fetches the collection's on-chain details, if the collection
    /// exists.
    ///
    /// # Errors
    ///
    /// Propagates storage failures and malformed stored values.
    pub async fn details(&self) -> Result<Option<CollectionDetails>> {
        let entry = &self.shared.entries.class;
        let value = self.shared.query(entry, vec![self.id_value()]).await?;
        value.map(|v| CollectionDetails::from_value(&v, entry)).transpose()
    }

    /// Fetches a collection-level attribute by key, if set.
    ///
    /// # Errors
    ///
    /// Propagates storage failures and malformed stored values.
    pub async fn attribute(&self, key: Bytes) -> Result<Option<Bytes>> {
        let entry = &self.shared.entries.attribute;
        let value = self
            .shared
            .query(entry, vec![self.id_value(), Value::Option(None), Value::Bytes(key)])
            .await?;
        value.map(|v| types::attribute_bytes(&v, entry)).transpose()
    }

    /// Fetches the collection's maximum supply, if one is set.
    ///
    /// # Errors
    ///
    /// Propagates storage failures and malformed stored values.
    pub async fn max_supply(&self) -> Result<Option<u32>> {
        let entry = &self.shared.entries.collection_max_supply;
        let value = self.shared.query(entry, vec![self.id_value()]).await?;
        match value {
            None => Ok(None),
            Some(v) => v
                .as_u32()
                .map(Some)
                .ok_or_else(|| crate::UniquesError::decode(entry, "max supply is not a u32")),
        }
    }

    /// Whether `account` owns this collection.
    ///
    /// The ownership marker stores no payload; presence of the key is the
    /// answer.
    ///
    /// # Errors
    ///
    /// Propagates storage failures.
    pub async fn owned_by(&self, account: &str) -> Result<bool> {
        let entry = &self.shared.entries.class_account;
        let value = self
            .shared
            .query(entry, vec![Value::AccountId(account.to_owned()), self.id_value()])
            .await?;
        Ok(value.is_some())
    }

    /// Fetches the collection id `account` has a pending ownership
    /// transfer for, if any.
    ///
    /// # Errors
    ///
    /// Propagates storage failures and malformed stored values.
    pub async fn ownership_acceptance(&self, account: &str) -> Result<Option<CollectionId>> {
        let entry = &self.shared.entries.ownership_acceptance;
        let value =
            self.shared.query(entry, vec![Value::AccountId(account.to_owned())]).await?;
        match value {
            None => Ok(None),
            Some(v) => v
                .as_u32()
                .map(|id| Some(CollectionId::from(id)))
                .ok_or_else(|| {
                    crate::UniquesError::decode(entry, "acceptance value is not a collection id")
                }),
        }
    }

    /// Returns an accessor for an identified item of this collection.
    #[must_use]
    pub fn item(&self, id: ItemId) -> Item {
        Item::new(Arc::clone(&self.shared), self.id, id)
    }

    /// Enumerates all item identifiers currently minted in this
    /// collection, sorted ascending without duplicates.
    ///
    /// # Errors
    ///
    /// Propagates storage and key-decode failures; no partial result is
    /// returned.
    pub async fn all_item_ids(&self) -> Result<Vec<ItemId>> {
        let scope = self.id_value();
        let ids = enumerate(
            self.shared.storage.as_ref(),
            &self.shared.entries.asset,
            Some(&scope),
            1,
        )
        .await?;
        Ok(ids.into_iter().map(ItemId::from).collect())
    }

    /// Returns accessors for all items of this collection.
    ///
    /// # Errors
    ///
    /// Propagates storage and key-decode failures.
    pub async fn all_items(&self) -> Result<Vec<Item>> {
        let ids = self.all_item_ids().await?;
        Ok(ids.into_iter().map(|id| self.item(id)).collect())
    }

    /// Returns the smallest item identifier not currently minted in this
    /// collection.
    ///
    /// # Errors
    ///
    /// Propagates storage and key-decode failures.
    pub async fn next_item_id(&self) -> Result<ItemId> {
        let scope = self.id_value();
        let ids = enumerate(
            self.shared.storage.as_ref(),
            &self.shared.entries.asset,
            Some(&scope),
            1,
        )
        .await?;
        Ok(ItemId::from(first_gap(&ids)?))
    }

    /// Picks a free item identifier and composes a `mint` call for it,
    /// returning the identifier that will be used.
    ///
    /// On any failure — enumeration, allocation, or composition — no
    /// identifier is consumed and no call is composed.
    ///
    /// # Errors
    ///
    /// Propagates storage, allocation, and composition failures.
    pub async fn mint_item(&self, owner: &str) -> Result<ItemId> {
        let id = self.next_item_id().await?;
        self.shared.compose(
            "mint",
            vec![
                CallArg::Id(self.id.into()),
                CallArg::Id(id.into()),
                CallArg::Account(owner.to_owned()),
            ],
        )?;
        Ok(id)
    }

    /// Composes a `freeze_collection` call.
    ///
    /// # Errors
    ///
    /// Propagates composition failures.
    pub fn freeze(&self) -> Result<()> {
        self.shared.compose("freeze_collection", vec![CallArg::Id(self.id.into())])
    }

    /// Composes a `thaw_collection` call.
    ///
    /// # Errors
    ///
    /// Propagates composition failures.
    pub fn thaw(&self) -> Result<()> {
        self.shared.compose("thaw_collection", vec![CallArg::Id(self.id.into())])
    }

    /// Composes a `transfer_ownership` call.
    ///
    /// # Errors
    ///
    /// Propagates composition failures.
    pub fn transfer_ownership(&self, new_owner: &str) -> Result<()> {
        self.shared.compose(
            "transfer_ownership",
            vec![CallArg::Id(self.id.into()), CallArg::Account(new_owner.to_owned())],
        )
    }

    /// Composes a `set_collection_metadata` call.
    ///
    /// # Errors
    ///
    /// Propagates composition failures.
    pub fn set_metadata(&self, data: Bytes, is_frozen: bool) -> Result<()> {
        self.shared.compose(
            "set_collection_metadata",
            vec![CallArg::Id(self.id.into()), CallArg::Bytes(data), CallArg::Bool(is_frozen)],
        )
    }

    /// Composes a `destroy` call.
    ///
    /// # Errors
    ///
    /// Propagates composition failures.
    pub fn destroy(&self) -> Result<()> {
        self.shared.compose("destroy", vec![CallArg::Id(self.id.into())])
    }
}
