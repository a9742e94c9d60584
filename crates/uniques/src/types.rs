//! Typed records decoded from pallet storage values.
//!
//! Each record mirrors one storage entry's value shape and owns its decode
//! step: [`from_value`](CollectionDetails::from_value) turns the dynamic
//! [`Value`] a [`ChainStorage`](uniques_chain_storage::ChainStorage)
//! implementation produced into a typed struct, failing with a
//! [`UniquesError::Decode`] naming the entry and the offending field.

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use uniques_chain_storage::{StorageEntry, Value};

use crate::error::{Result, UniquesError};

fn req<'a>(value: &'a Value, entry: &StorageEntry, field: &str) -> Result<&'a Value> {
    value
        .field(field)
        .ok_or_else(|| UniquesError::decode(entry, format!("missing field '{field}'")))
}

fn req_u32(value: &Value, entry: &StorageEntry, field: &str) -> Result<u32> {
    req(value, entry, field)?
        .as_u32()
        .ok_or_else(|| UniquesError::decode(entry, format!("field '{field}' is not a u32")))
}

fn req_u128(value: &Value, entry: &StorageEntry, field: &str) -> Result<u128> {
    req(value, entry, field)?
        .as_u128()
        .ok_or_else(|| UniquesError::decode(entry, format!("field '{field}' is not an amount")))
}

fn req_bool(value: &Value, entry: &StorageEntry, field: &str) -> Result<bool> {
    req(value, entry, field)?
        .as_bool()
        .ok_or_else(|| UniquesError::decode(entry, format!("field '{field}' is not a bool")))
}

fn req_account(value: &Value, entry: &StorageEntry, field: &str) -> Result<String> {
    req(value, entry, field)?
        .as_account()
        .map(str::to_owned)
        .ok_or_else(|| UniquesError::decode(entry, format!("field '{field}' is not an account")))
}

fn req_bytes(value: &Value, entry: &StorageEntry, field: &str) -> Result<Bytes> {
    req(value, entry, field)?
        .as_bytes()
        .cloned()
        .ok_or_else(|| UniquesError::decode(entry, format!("field '{field}' is not bytes")))
}

fn opt_account(value: &Value, entry: &StorageEntry, field: &str) -> Result<Option<String>> {
    let inner = req(value, entry, field)?.as_option().ok_or_else(|| {
        UniquesError::decode(entry, format!("field '{field}' is not an option"))
    })?;

    match inner {
        None => Ok(None),
        Some(v) => v
            .as_account()
            .map(|a| Some(a.to_owned()))
            .ok_or_else(|| UniquesError::decode(entry, format!("field '{field}' is not an account"))),
    }
}

/// Metadata attached to a collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionMetadata {
    /// Opaque metadata blob (typically an off-chain content reference).
    pub data: Bytes,
    /// Deposit reserved for storing the metadata.
    pub deposit: u128,
    /// Whether the metadata is frozen against updates.
    pub is_frozen: bool,
}

impl CollectionMetadata {
    /// Decodes collection metadata from a storage value.
    ///
    /// # Errors
    ///
    /// Returns [`UniquesError::Decode`] when a field is missing or has the
    /// wrong shape.
    pub fn from_value(value: &Value, entry: &StorageEntry) -> Result<Self> {
        Ok(Self {
            data: req_bytes(value, entry, "data")?,
            deposit: req_u128(value, entry, "deposit")?,
            is_frozen: req_bool(value, entry, "is_frozen")?,
        })
    }
}

/// On-chain details of a collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionDetails {
    /// Account that owns the collection.
    pub owner: String,
    /// Account allowed to mint items.
    pub issuer: String,
    /// Account allowed to manage the collection.
    pub admin: String,
    /// Account allowed to freeze items.
    pub freezer: String,
    /// Total deposit reserved for the collection and its items.
    pub total_deposit: u128,
    /// Whether item deposits are waived for this collection.
    pub free_holding: bool,
    /// Number of items currently minted.
    pub items: u32,
    /// Number of items with metadata set.
    pub item_metadatas: u32,
    /// Number of attributes set on the collection and its items.
    pub attributes: u32,
    /// Whether the whole collection is frozen against transfers.
    pub is_frozen: bool,
}

impl CollectionDetails {
    /// Decodes collection details from a storage value.
    ///
    /// # Errors
    ///
    /// Returns [`UniquesError::Decode`] when a field is missing or has the
    /// wrong shape.
    pub fn from_value(value: &Value, entry: &StorageEntry) -> Result<Self> {
        Ok(Self {
            owner: req_account(value, entry, "owner")?,
            issuer: req_account(value, entry, "issuer")?,
            admin: req_account(value, entry, "admin")?,
            freezer: req_account(value, entry, "freezer")?,
            total_deposit: req_u128(value, entry, "total_deposit")?,
            free_holding: req_bool(value, entry, "free_holding")?,
            items: req_u32(value, entry, "items")?,
            item_metadatas: req_u32(value, entry, "item_metadatas")?,
            attributes: req_u32(value, entry, "attributes")?,
            is_frozen: req_bool(value, entry, "is_frozen")?,
        })
    }
}

/// Metadata attached to an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemMetadata {
    /// Opaque metadata blob.
    pub data: Bytes,
    /// Deposit reserved for storing the metadata.
    pub deposit: u128,
    /// Whether the metadata is frozen against updates.
    pub is_frozen: bool,
}

impl ItemMetadata {
    /// Decodes item metadata from a storage value.
    ///
    /// # Errors
    ///
    /// Returns [`UniquesError::Decode`] when a field is missing or has the
    /// wrong shape.
    pub fn from_value(value: &Value, entry: &StorageEntry) -> Result<Self> {
        Ok(Self {
            data: req_bytes(value, entry, "data")?,
            deposit: req_u128(value, entry, "deposit")?,
            is_frozen: req_bool(value, entry, "is_frozen")?,
        })
    }
}

/// On-chain details of an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDetails {
    /// Account that owns the item.
    pub owner: String,
    /// Account approved to transfer the item, if any.
    pub approved: Option<String>,
    /// Deposit reserved for the item.
    pub deposit: u128,
    /// Whether the item is frozen against transfers.
    pub is_frozen: bool,
}

impl ItemDetails {
    /// Decodes item details from a storage value.
    ///
    /// # Errors
    ///
    /// Returns [`UniquesError::Decode`] when a field is missing or has the
    /// wrong shape.
    pub fn from_value(value: &Value, entry: &StorageEntry) -> Result<Self> {
        Ok(Self {
            owner: req_account(value, entry, "owner")?,
            approved: opt_account(value, entry, "approved")?,
            deposit: req_u128(value, entry, "deposit")?,
            is_frozen: req_bool(value, entry, "is_frozen")?,
        })
    }
}

/// Sale price of an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemPrice {
    /// Asking amount.
    pub amount: u128,
    /// Buyer the sale is restricted to, if any.
    pub whitelisted_buyer: Option<String>,
}

impl ItemPrice {
    /// Decodes an item price from a storage value.
    ///
    /// The stored shape is the pair `(amount, Option<buyer>)`.
    ///
    /// # Errors
    ///
    /// Returns [`UniquesError::Decode`] when the value is not such a pair.
    pub fn from_value(value: &Value, entry: &StorageEntry) -> Result<Self> {
        let Value::Tuple(parts) = value else {
            return Err(UniquesError::decode(
                entry,
                format!("expected (amount, buyer) pair, found {}", value.kind()),
            ));
        };

        let [amount, buyer] = parts.as_slice() else {
            return Err(UniquesError::decode(
                entry,
                format!("expected 2 price components, found {}", parts.len()),
            ));
        };

        let amount = amount
            .as_u128()
            .ok_or_else(|| UniquesError::decode(entry, "price amount is not an amount"))?;

        let whitelisted_buyer = match buyer.as_option() {
            Some(None) => None,
            Some(Some(v)) => Some(
                v.as_account()
                    .map(str::to_owned)
                    .ok_or_else(|| UniquesError::decode(entry, "buyer is not an account"))?,
            ),
            None => {
                return Err(UniquesError::decode(entry, "buyer is not an option"));
            },
        };

        Ok(Self { amount, whitelisted_buyer })
    }
}

/// Decodes an attribute value from the `(value, deposit)` pair the
/// `attribute` entry stores.
///
/// # Errors
///
/// Returns [`UniquesError::Decode`] when the value is not such a pair.
pub(crate) fn attribute_bytes(value: &Value, entry: &StorageEntry) -> Result<Bytes> {
    match value {
        // Some chains store the bare value, others the (value, deposit) pair.
        Value::Bytes(b) => Ok(b.clone()),
        Value::Tuple(parts) => parts
            .first()
            .and_then(Value::as_bytes)
            .cloned()
            .ok_or_else(|| UniquesError::decode(entry, "attribute value is not bytes")),
        other => Err(UniquesError::decode(
            entry,
            format!("expected attribute pair, found {}", other.kind()),
        )),
    }
}
