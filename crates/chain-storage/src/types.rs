//! Typed identifiers shared across storage operations.
//!
//! Collections and items are named by chain-assigned integer identifiers.
//! Wrapping the raw `u32` in dedicated newtypes makes passing an item id
//! where a collection id is expected a compile-time error.

/// Macro to define a newtype wrapper around `u32` with standard trait
/// implementations.
///
/// Each generated type:
/// - Is a transparent wrapper around `u32` (zero runtime cost)
/// - Derives `Copy`, `Clone`, `Debug`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - Derives `Serialize` and `Deserialize` (transparent)
/// - Implements `From<u32>` and `Into<u32>` for interop with raw key data
/// - Implements `Display` that outputs the inner value
macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord,
            serde::Serialize, serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub u32);

        impl From<u32> for $name {
            fn from(value: u32) -> Self {
                Self(value)
            }
        }

        impl From<$name> for u32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

define_id!(
    /// Identifier of a collection of non-fungible items.
    ///
    /// Assigned by the chain at creation time and never reused while the
    /// collection exists. Identifier spaces are sparse: destroyed
    /// collections leave gaps, which the allocator deliberately refills.
    ///
    /// # Examples
    ///
    /// ```
    /// use uniques_chain_storage::CollectionId;
    ///
    /// let id = CollectionId::from(7);
    /// assert_eq!(u32::from(id), 7);
    /// assert_eq!(id.to_string(), "7");
    /// ```
    CollectionId
);

define_id!(
    /// Identifier of an item within a collection's namespace.
    ///
    /// Item ids are only meaningful together with their
    /// [`CollectionId`]; the same `ItemId` value can exist in many
    /// collections.
    ///
    /// # Examples
    ///
    /// ```
    /// use uniques_chain_storage::ItemId;
    ///
    /// let id = ItemId::from(0);
    /// assert_eq!(u32::from(id), 0);
    /// ```
    ItemId
);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_order_by_inner_value() {
        let mut ids = vec![CollectionId(9), CollectionId(0), CollectionId(5)];
        ids.sort();
        assert_eq!(ids, vec![CollectionId(0), CollectionId(5), CollectionId(9)]);
    }

    #[test]
    fn test_serde_is_transparent() {
        let id = ItemId(42);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "42");

        let back: ItemId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
