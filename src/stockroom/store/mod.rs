//! # Storage Layer
//!
//! This module defines the persistence abstraction for stockroom. The
//! [`KeyValueStore`] trait lets the inventory core work against different
//! storage backends.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with `InMemoryStore` (no filesystem needed)
//! - Allow **future backends** (database, browser storage, etc.) without
//!   changing core logic
//! - Keep the state-management rules **decoupled** from persistence
//!   details
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage. One JSON document
//!   per key, `{key}.json` under a root directory.
//! - [`memory::InMemoryStore`]: In-memory storage for testing. Holds the
//!   serialized JSON per key so tests exercise the same round-trip as
//!   production.
//!
//! ## Read semantics
//!
//! A corrupt stored value reads the same as an absent one: `load` returns
//! `None` and never fails. Writes are the opposite: `save` returns any
//! failure to the caller, which propagates it. The inventory core counts
//! on both halves of that contract for its write-through guarantee.

use crate::error::Result;
use crate::model::Item;

pub mod fs;
pub mod memory;

/// Abstract interface for collection persistence.
pub trait KeyValueStore {
    /// Load the collection stored under `key`.
    ///
    /// `None` means no usable value exists: either nothing was ever
    /// stored, or the stored value could not be parsed as a collection.
    /// The two cases are deliberately indistinguishable.
    fn load(&self, key: &str) -> Option<Vec<Item>>;

    /// Serialize `items` and store them under `key`, synchronously.
    /// Durable until overwritten or externally cleared.
    fn save(&mut self, key: &str, items: &[Item]) -> Result<()>;
}
