//! Typed access layer over a chain's Uniques pallet.
//!
//! This crate resolves the pallet's storage into typed domain objects,
//! composes state-changing calls, and implements deterministic identifier
//! allocation over the pallet's sparse, chain-assigned id spaces.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      Application                            │
//! ├─────────────────────────────────────────────────────────────┤
//! │                    uniques-client                           │
//! │        Uniques ─→ Collection ─→ Item  (accessors)           │
//! │        keyspace::enumerate │ alloc::first_gap  (core)       │
//! ├──────────────────────────────┬──────────────────────────────┤
//! │     ChainStorage trait       │      CallComposer trait      │
//! │   (uniques-chain-storage)    │   (signing & submission)     │
//! └──────────────────────────────┴──────────────────────────────┘
//! ```
//!
//! # Identifier allocation
//!
//! Collection and item identifiers are assigned by the chain and the id
//! spaces are sparse — destroyed entities leave gaps. Before composing a
//! `create` or `mint` call, the accessors read the relevant key space
//! ([`keyspace::enumerate`]) and pick the smallest unassigned id
//! ([`alloc::first_gap`]), so allocation is minimal, deterministic, and
//! never collides with an existing entity.
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use uniques_chain_storage::{MemoryStorage, Value};
//! use uniques_client::{RecordingComposer, Uniques, UniquesConfig, entry};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let storage = Arc::new(MemoryStorage::new());
//!     storage.insert_key_only(entry::CLASS, vec![Value::U32(0)]);
//!     storage.insert_key_only(entry::CLASS, vec![Value::U32(2)]);
//!
//!     let composer = Arc::new(RecordingComposer::new());
//!     let uniques = Uniques::new(storage, composer, UniquesConfig::default());
//!
//!     // Ids 0 and 2 are taken, so the gap at 1 is allocated first.
//!     let id = uniques.create_collection("alice").await?;
//!     assert_eq!(u32::from(id), 1);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Collaborators
//!
//! Two seams keep the chain out of this crate:
//!
//! - [`ChainStorage`](uniques_chain_storage::ChainStorage) reads decoded keys and values; the RPC
//!   transport and wire codec live behind it.
//! - [`CallComposer`] accepts unsigned call descriptors; signing, submission, and the transaction
//!   lifecycle live behind it.
//!
//! Errors from either seam abort the enclosing operation without partial
//! effect: a failed enumeration composes no call and consumes no id.
//!
//! # Feature Flags
//!
//! - **`testutil`**: Enables the `testutil` module with storage seeding helpers and a wired test
//!   client factory. Enable this in `[dev-dependencies]` for integration tests.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod alloc;
pub mod call;
mod client;
mod collection;
pub mod config;
pub mod entry;
pub mod error;
mod item;
pub mod keyspace;
#[cfg(any(test, feature = "testutil"))]
#[allow(clippy::expect_used)]
pub mod testutil;
pub mod types;

// Re-export primary types at crate root for convenience
pub use call::{CallArg, CallComposer, CallDescriptor, RecordingComposer};
pub use client::Uniques;
pub use collection::Collection;
pub use config::UniquesConfig;
pub use error::{Result, UniquesError};
pub use item::Item;
pub use types::{CollectionDetails, CollectionMetadata, ItemDetails, ItemMetadata, ItemPrice};
// Identifier newtypes live in the storage crate; re-exported so callers
// rarely need to depend on it directly.
pub use uniques_chain_storage::{CollectionId, ItemId};
