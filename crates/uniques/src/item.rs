//! Item accessor.
//!
//! An [`Item`] names one minted item by `(collection, item)` id pair
//! and exposes its storage queries and state-changing calls. Like the
//! collection accessor, every query maps chain absence to `Ok(None)`.

use std::sync::Arc;

use bytes::Bytes;
use uniques_chain_storage::{CollectionId, ItemId, Value};

use crate::{
    call::CallArg,
    client::Shared,
    error::Result,
    types::{self, ItemDetails, ItemMetadata, ItemPrice},
};

/// Accessor for one item of a collection.
#[derive(Clone)]
pub struct Item {
    shared: Arc<Shared>,
    collection_id: CollectionId,
    id: ItemId,
}

impl std::fmt::Debug for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Item")
            .field("collection_id", &self.collection_id)
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Item #{}/{}", self.collection_id, self.id)
    }
}

impl Item {
    pub(crate) fn new(shared: Arc<Shared>, collection_id: CollectionId, id: ItemId) -> Self {
        Self { shared, collection_id, id }
    }

    /// The collection this item belongs to.
    #[must_use]
    pub fn collection_id(&self) -> CollectionId {
        self.collection_id
    }

    /// This item's identifier within its collection.
    #[must_use]
    pub fn id(&self) -> ItemId {
        self.id
    }

    fn key(&self) -> Vec<Value> {
        vec![Value::U32(self.collection_id.into()), Value::U32(self.id.into())]
    }

    /// Fetches the item's metadata, if set.
    ///
    /// # Errors
    ///
    /// Propagates storage failures and malformed stored values.
    pub async fn metadata(&self) -> Result<Option<ItemMetadata>> {
        let entry = &self.shared.entries.instance_metadata_of;
        let value = self.shared.query(entry, self.key()).await?;
        value.map(|v| ItemMetadata::from_value(&v, entry)).transpose()
    }

    /// Fetches the item's on-chain details, if the item exists.
    ///
    /// # Errors
    ///
    /// Propagates storage failures and malformed stored values.
    pub async fn details(&self) -> Result<Option<ItemDetails>> {
        let entry = &self.shared.entries.asset;
        let value = self.shared.query(entry, self.key()).await?;
        value.map(|v| ItemDetails::from_value(&v, entry)).transpose()
    }

    /// Fetches the item's sale price, if it is listed.
    ///
    /// # Errors
    ///
    /// Propagates storage failures and malformed stored values.
    pub async fn price(&self) -> Result<Option<ItemPrice>> {
        let entry = &self.shared.entries.item_price_of;
        let value = self.shared.query(entry, self.key()).await?;
        value.map(|v| ItemPrice::from_value(&v, entry)).transpose()
    }

    /// Fetches an item-level attribute by key, if set.
    ///
    /// # Errors
    ///
    /// Propagates storage failures and malformed stored values.
    pub async fn attribute(&self, key: Bytes) -> Result<Option<Bytes>> {
        let entry = &self.shared.entries.attribute;
        let value = self
            .shared
            .query(
                entry,
                vec![
                    Value::U32(self.collection_id.into()),
                    Value::Option(Some(Box::new(Value::U32(self.id.into())))),
                    Value::Bytes(key),
                ],
            )
            .await?;
        value.map(|v| types::attribute_bytes(&v, entry)).transpose()
    }

    /// Composes a `transfer` call to `dest`.
    ///
    /// # Errors
    ///
    /// Propagates composition failures.
    pub fn transfer(&self, dest: &str) -> Result<()> {
        self.shared.compose(
            "transfer",
            vec![
                CallArg::Id(self.collection_id.into()),
                CallArg::Id(self.id.into()),
                CallArg::Account(dest.to_owned()),
            ],
        )
    }

    /// Composes a `set_price` call.
    ///
    /// A `None` amount delists the item; `whitelisted_buyer` restricts
    /// the sale to one account.
    ///
    /// # Errors
    ///
    /// Propagates composition failures.
    pub fn set_price(&self, amount: Option<u128>, whitelisted_buyer: Option<&str>) -> Result<()> {
        self.shared.compose(
            "set_price",
            vec![
                CallArg::Id(self.collection_id.into()),
                CallArg::Id(self.id.into()),
                CallArg::OptionalAmount(amount),
                CallArg::OptionalAccount(whitelisted_buyer.map(str::to_owned)),
            ],
        )
    }

    /// Composes a `freeze` call for this item.
    ///
    /// # Errors
    ///
    /// Propagates composition failures.
    pub fn freeze(&self) -> Result<()> {
        self.shared.compose(
            "freeze",
            vec![CallArg::Id(self.collection_id.into()), CallArg::Id(self.id.into())],
        )
    }

    /// Composes a `thaw` call for this item.
    ///
    /// # Errors
    ///
    /// Propagates composition failures.
    pub fn thaw(&self) -> Result<()> {
        self.shared.compose(
            "thaw",
            vec![CallArg::Id(self.collection_id.into()), CallArg::Id(self.id.into())],
        )
    }

    /// Composes a `burn` call for this item.
    ///
    /// # Errors
    ///
    /// Propagates composition failures.
    pub fn burn(&self) -> Result<()> {
        self.shared.compose(
            "burn",
            vec![CallArg::Id(self.collection_id.into()), CallArg::Id(self.id.into())],
        )
    }
}
