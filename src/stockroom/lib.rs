//! # Stockroom Architecture
//!
//! Stockroom is a **UI-agnostic inventory tracking library**: the state
//! machine behind a form-and-table inventory screen, with the screen
//! itself left to whoever embeds it.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Presentation (not in this crate)                           │
//! │  - Renders the list, the form, per-field feedback           │
//! │  - Turns typed validation reasons into message strings      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Inventory core (inventory.rs)                              │
//! │  - Owns the canonical ordered collection                    │
//! │  - Serializes concurrent edits/removals via single-slot     │
//! │    locks; drives delayed commits through the scheduler      │
//! │  - Writes through to storage on every mutation              │
//! └─────────────────────────────────────────────────────────────┘
//!          │                   │                    │
//!          ▼                   ▼                    ▼
//! ┌────────────────┐  ┌────────────────┐  ┌────────────────────┐
//! │ Pure functions │  │  Validation    │  │  Storage (store/)  │
//! │ search.rs      │  │  validate.rs   │  │  KeyValueStore     │
//! │ export.rs      │  │  Candidate →   │  │  FileStore (prod)  │
//! │                │  │  Verdict/Item  │  │  InMemoryStore     │
//! └────────────────┘  └────────────────┘  └────────────────────┘
//! ```
//!
//! ## Key Principles
//!
//! - **One writer.** The inventory core is the only thing that mutates
//!   the collection; derived views (search results, export rows) are
//!   computed from it, never stored.
//! - **Validate before commit, never after.** Items can only enter the
//!   collection through validation, so stored data always satisfies the
//!   field constraints.
//! - **Write-through.** Memory and storage agree the moment any mutating
//!   call returns. Corrupt stored data reads as an empty collection;
//!   failed writes are returned, never swallowed.
//! - **Deterministic time.** The commit/removal delays run on a logical
//!   clock ([`schedule::Scheduler`]) the owner advances explicitly, so
//!   no completion callback can outlive its owner.
//!
//! ## Module Overview
//!
//! - [`inventory`]: The stateful core (collection, locks, delayed ops)
//! - [`model`]: Core data types (`Item`, `Category`)
//! - [`validate`]: Field rules, `Candidate`, `Verdict`
//! - [`store`]: Storage abstraction and implementations
//! - [`search`]: The name filter behind the visible list
//! - [`export`]: Flat export rows and the delimited file they become
//! - [`schedule`]: Logical-clock delay queue
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod config;
pub mod error;
pub mod export;
pub mod inventory;
pub mod model;
pub mod schedule;
pub mod search;
pub mod store;
pub mod validate;
