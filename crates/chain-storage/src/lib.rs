//! Chain storage collaborator interface for the Uniques client.
//!
//! This crate provides the [`ChainStorage`] trait and related types that
//! sit between the typed pallet access layer (`uniques-client`) and
//! whatever actually reads a chain node's storage. Everything above this
//! boundary handles only decoded, typed data.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  Pallet Access Layer                        │
//! │        Uniques │ Collection │ Item  (uniques-client)        │
//! ├─────────────────────────────────────────────────────────────┤
//! │                 uniques-chain-storage                       │
//! │                  ChainStorage trait                         │
//! │            (keys, value → KeyTuple / Lookup)                │
//! ├──────────────┬──────────────────────────────────────────────┤
//! │ MemoryStorage│              RPC transport                   │
//! │   (testing)  │          (external collaborator)             │
//! └──────────────┴──────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```
//! use uniques_chain_storage::{ChainStorage, MemoryStorage, StorageEntry, Value};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     const CLASS: StorageEntry = StorageEntry::new("uniques", "class");
//!
//!     let storage = MemoryStorage::new();
//!     storage.insert(CLASS, vec![Value::U32(0)], Value::Bool(false));
//!
//!     let keys = storage.keys(&CLASS, None).await?;
//!     assert_eq!(keys.len(), 1);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Error Handling
//!
//! All operations return [`StorageResult<T>`], which wraps potential
//! [`StorageError`] variants. The taxonomy keeps three situations strictly
//! apart: data that is absent ([`Lookup::Absent`], an empty key vec), data
//! that is present but undecodable ([`Lookup::Malformed`] /
//! [`StorageError::Decode`]), and caller bugs
//! ([`StorageError::Precondition`]).

#![deny(unsafe_code)]

pub mod error;
pub mod memory;
pub mod source;
pub mod types;
pub mod value;

// Re-export primary types at crate root for convenience
pub use error::{BoxError, StorageError, StorageResult};
pub use memory::MemoryStorage;
pub use source::{ChainStorage, StorageEntry};
pub use types::{CollectionId, ItemId};
pub use value::{KeyTuple, Lookup, Value};
