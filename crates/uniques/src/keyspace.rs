//! Key-space enumeration over pallet storage entries.
//!
//! Every collection and item the chain currently tracks appears as a key
//! tuple under some storage entry, with the identifier of interest at a
//! fixed tuple position. [`enumerate`] reads that key space and normalizes
//! it into a sorted, duplicate-free identifier sequence — the shape
//! [`first_gap`](crate::alloc::first_gap) requires.
//!
//! The read is delegated entirely to the [`ChainStorage`] collaborator;
//! this module is a pure transform over the returned tuples. Nothing is
//! cached: every call produces a fresh sequence reflecting storage at the
//! moment of the read.

use tracing::debug;
use uniques_chain_storage::{ChainStorage, StorageEntry, StorageError, Value};

use crate::error::Result;

/// Enumerates the identifiers assigned under `entry`.
///
/// Reads all key tuples under `entry` — restricted to `scope` when given,
/// the way item enumeration is restricted to one collection — and decodes
/// the component at `component_index` of each tuple as a `u32` identifier.
/// The identifiers are deduplicated and returned sorted ascending.
///
/// A correct chain never emits duplicate keys, but a duplicate in the
/// input collapses to one occurrence rather than corrupting the result.
/// An entry with no stored keys yields an empty vec, not an error.
///
/// # Errors
///
/// Returns [`StorageError::Decode`] (wrapped in
/// [`UniquesError::Storage`](crate::UniquesError::Storage)) when any
/// tuple's targeted component is missing or not integer-valued. The
/// failure covers the whole call: no partial sequence is returned, since
/// silently omitting an undecodable entry would hide a collaborator
/// contract violation.
pub async fn enumerate(
    storage: &dyn ChainStorage,
    entry: &StorageEntry,
    scope: Option<&Value>,
    component_index: usize,
) -> Result<Vec<u32>> {
    let keys = storage.keys(entry, scope).await?;

    let mut ids = Vec::with_capacity(keys.len());
    for key in &keys {
        let component = key.component(component_index).ok_or_else(|| {
            StorageError::decode(
                format!("{entry} key[{component_index}]"),
                format!("key tuple has only {} components", key.len()),
            )
        })?;

        let id = component.as_u32().ok_or_else(|| {
            StorageError::decode(
                format!("{entry} key[{component_index}]"),
                format!("expected integer identifier, found {}", component.kind()),
            )
        })?;

        ids.push(id);
    }

    ids.sort_unstable();
    ids.dedup();

    debug!(entry = %entry, count = ids.len(), "enumerated key space");
    Ok(ids)
}
