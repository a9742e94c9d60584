//! Root handle over the Uniques pallet.
//!
//! [`Uniques`] owns the shared context — the storage reader, the call
//! composer, and the entry catalog — and hands out [`Collection`] and
//! [`Item`](crate::Item) accessors that borrow it by reference counting.
//! The context is injected once at construction and passed explicitly to
//! every component that needs it; nothing in this crate is ambient or
//! global.

use std::sync::Arc;

use tracing::debug;
use uniques_chain_storage::{
    ChainStorage, CollectionId, KeyTuple, StorageEntry, Value,
};

use crate::{
    alloc::first_gap,
    call::{CallArg, CallComposer, CallDescriptor},
    collection::Collection,
    config::UniquesConfig,
    entry::PalletEntries,
    error::Result,
    keyspace::enumerate,
};

/// Context shared by the root handle and every accessor it creates.
pub(crate) struct Shared {
    pub(crate) storage: Arc<dyn ChainStorage>,
    pub(crate) composer: Arc<dyn CallComposer>,
    pub(crate) entries: PalletEntries,
    pallet: String,
}

impl Shared {
    /// Fetches one storage value, collapsing the tagged lookup into
    /// `Option<Value>` and surfacing malformed data as a decode error.
    pub(crate) async fn query(
        &self,
        entry: &StorageEntry,
        key: Vec<Value>,
    ) -> Result<Option<Value>> {
        let key = KeyTuple::new(key);
        let lookup = self.storage.value(entry, &key).await?;
        Ok(lookup.decoded(&entry.to_string())?)
    }

    /// Hands one call to the composer.
    pub(crate) fn compose(&self, name: &str, args: Vec<CallArg>) -> Result<()> {
        let call = CallDescriptor::new(self.pallet.clone(), name, args);
        debug!(call = %call, "composing pallet call");
        self.composer.compose(call)
    }
}

/// Main entry point to the Uniques pallet.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use uniques_chain_storage::MemoryStorage;
/// use uniques_client::{RecordingComposer, Uniques, UniquesConfig};
///
/// # tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap().block_on(async {
/// let storage = Arc::new(MemoryStorage::new());
/// let composer = Arc::new(RecordingComposer::new());
/// let uniques = Uniques::new(storage, composer, UniquesConfig::default());
///
/// // Nothing stored yet: the first collection id is 0.
/// let id = uniques.next_collection_id().await.unwrap();
/// assert_eq!(u32::from(id), 0);
/// # });
/// ```
#[derive(Clone)]
pub struct Uniques {
    shared: Arc<Shared>,
}

impl std::fmt::Debug for Uniques {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Uniques").field("pallet", &self.shared.pallet).finish_non_exhaustive()
    }
}

impl Uniques {
    /// Creates a handle over the given collaborators.
    #[must_use]
    pub fn new(
        storage: Arc<dyn ChainStorage>,
        composer: Arc<dyn CallComposer>,
        config: UniquesConfig,
    ) -> Self {
        let entries = PalletEntries::for_pallet(config.pallet());
        let shared =
            Arc::new(Shared { storage, composer, entries, pallet: config.pallet().to_owned() });
        Self { shared }
    }

    /// Returns an accessor for an identified collection.
    ///
    /// Cheap: no storage read happens until the accessor is queried.
    #[must_use]
    pub fn collection(&self, id: CollectionId) -> Collection {
        Collection::new(Arc::clone(&self.shared), id)
    }

    /// Enumerates all currently assigned collection identifiers,
    /// sorted ascending without duplicates.
    ///
    /// # Errors
    ///
    /// Propagates storage and key-decode failures; no partial result is
    /// returned.
    pub async fn all_collection_ids(&self) -> Result<Vec<CollectionId>> {
        let ids =
            enumerate(self.shared.storage.as_ref(), &self.shared.entries.class, None, 0).await?;
        Ok(ids.into_iter().map(CollectionId::from).collect())
    }

    /// Returns accessors for all currently existing collections.
    ///
    /// # Errors
    ///
    /// Propagates storage and key-decode failures.
    pub async fn all_collections(&self) -> Result<Vec<Collection>> {
        let ids = self.all_collection_ids().await?;
        Ok(ids.into_iter().map(|id| self.collection(id)).collect())
    }

    /// Returns the smallest collection identifier not currently assigned.
    ///
    /// Gaps left by destroyed collections are refilled before the id
    /// space grows past its maximum.
    ///
    /// # Errors
    ///
    /// Propagates storage and key-decode failures.
    pub async fn next_collection_id(&self) -> Result<CollectionId> {
        let ids =
            enumerate(self.shared.storage.as_ref(), &self.shared.entries.class, None, 0).await?;
        Ok(CollectionId::from(first_gap(&ids)?))
    }

    /// Picks a free collection identifier and composes a `create` call
    /// for it, returning the identifier that will be used.
    ///
    /// On any failure — enumeration, allocation, or composition — no
    /// identifier is consumed and no call is composed.
    ///
    /// # Errors
    ///
    /// Propagates storage, allocation, and composition failures.
    pub async fn create_collection(&self, admin: &str) -> Result<CollectionId> {
        let id = self.next_collection_id().await?;
        self.shared.compose(
            "create",
            vec![CallArg::Id(id.into()), CallArg::Account(admin.to_owned())],
        )?;
        Ok(id)
    }
}
