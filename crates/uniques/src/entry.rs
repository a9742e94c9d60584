//! Storage entry catalog for the Uniques pallet.
//!
//! Key tuple shapes per entry:
//!
//! | Entry | Key tuple | Value |
//! |-------|-----------|-------|
//! | `class` | `(collection)` | collection details |
//! | `class_metadata_of` | `(collection)` | collection metadata |
//! | `asset` | `(collection, item)` | item details |
//! | `instance_metadata_of` | `(collection, item)` | item metadata |
//! | `attribute` | `(collection, Option<item>, key)` | `(value, deposit)` |
//! | `item_price_of` | `(collection, item)` | `(amount, Option<buyer>)` |
//! | `class_account` | `(account, collection)` | `()` |
//! | `ownership_acceptance` | `(account)` | collection id |
//! | `collection_max_supply` | `(collection)` | max supply |
//!
//! The `const` entries below address the canonical `uniques` pallet name;
//! [`PalletEntries`] rebuilds the catalog for chains that mount the pallet
//! under a different name.

use uniques_chain_storage::StorageEntry;

/// Default pallet name on chains that ship the Uniques pallet.
pub const PALLET: &str = "uniques";

/// Collection details, keyed by collection id.
pub const CLASS: StorageEntry = StorageEntry::new(PALLET, "class");

/// Collection metadata, keyed by collection id.
pub const CLASS_METADATA_OF: StorageEntry = StorageEntry::new(PALLET, "class_metadata_of");

/// Item details, keyed by `(collection, item)`.
pub const ASSET: StorageEntry = StorageEntry::new(PALLET, "asset");

/// Item metadata, keyed by `(collection, item)`.
pub const INSTANCE_METADATA_OF: StorageEntry = StorageEntry::new(PALLET, "instance_metadata_of");

/// Attributes, keyed by `(collection, Option<item>, attribute key)`.
pub const ATTRIBUTE: StorageEntry = StorageEntry::new(PALLET, "attribute");

/// Item sale price, keyed by `(collection, item)`.
pub const ITEM_PRICE_OF: StorageEntry = StorageEntry::new(PALLET, "item_price_of");

/// Collection ownership marker, keyed by `(account, collection)`.
pub const CLASS_ACCOUNT: StorageEntry = StorageEntry::new(PALLET, "class_account");

/// Pending ownership transfer acceptance, keyed by account.
pub const OWNERSHIP_ACCEPTANCE: StorageEntry = StorageEntry::new(PALLET, "ownership_acceptance");

/// Maximum supply limit, keyed by collection id.
pub const COLLECTION_MAX_SUPPLY: StorageEntry = StorageEntry::new(PALLET, "collection_max_supply");

/// The full entry catalog for one configured pallet name.
///
/// Built once per [`Uniques`](crate::Uniques) handle and shared by its
/// accessors, so a renamed pallet is configured in exactly one place.
#[derive(Debug, Clone)]
pub struct PalletEntries {
    /// Collection details.
    pub class: StorageEntry,
    /// Collection metadata.
    pub class_metadata_of: StorageEntry,
    /// Item details.
    pub asset: StorageEntry,
    /// Item metadata.
    pub instance_metadata_of: StorageEntry,
    /// Attributes.
    pub attribute: StorageEntry,
    /// Item sale price.
    pub item_price_of: StorageEntry,
    /// Collection ownership marker.
    pub class_account: StorageEntry,
    /// Pending ownership transfer acceptance.
    pub ownership_acceptance: StorageEntry,
    /// Maximum supply limit.
    pub collection_max_supply: StorageEntry,
}

impl PalletEntries {
    /// Builds the catalog for the given pallet name.
    #[must_use]
    pub fn for_pallet(pallet: &str) -> Self {
        Self {
            class: StorageEntry::named(pallet, "class"),
            class_metadata_of: StorageEntry::named(pallet, "class_metadata_of"),
            asset: StorageEntry::named(pallet, "asset"),
            instance_metadata_of: StorageEntry::named(pallet, "instance_metadata_of"),
            attribute: StorageEntry::named(pallet, "attribute"),
            item_price_of: StorageEntry::named(pallet, "item_price_of"),
            class_account: StorageEntry::named(pallet, "class_account"),
            ownership_acceptance: StorageEntry::named(pallet, "ownership_acceptance"),
            collection_max_supply: StorageEntry::named(pallet, "collection_max_supply"),
        }
    }
}

impl Default for PalletEntries {
    fn default() -> Self {
        Self::for_pallet(PALLET)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_matches_const_entries() {
        let entries = PalletEntries::default();
        assert_eq!(entries.class, CLASS);
        assert_eq!(entries.asset, ASSET);
        assert_eq!(entries.collection_max_supply, COLLECTION_MAX_SUPPLY);
    }

    #[test]
    fn test_renamed_pallet_catalog() {
        let entries = PalletEntries::for_pallet("nfts");
        assert_eq!(entries.class.to_string(), "nfts::class");
        assert_eq!(entries.asset.pallet(), "nfts");
        assert_eq!(entries.asset.name(), "asset");
    }
}
