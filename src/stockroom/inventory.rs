//! The stateful inventory core.
//!
//! [`Inventory`] owns the canonical ordered collection and is its only
//! mutator. Three rules shape everything here:
//!
//! - **Validate before commit, never after.** A candidate enters the
//!   collection only through [`Candidate::into_item`], so every stored
//!   item satisfies the field constraints.
//! - **Write-through.** Every successful mutation persists the whole
//!   collection before the operation returns; memory and storage never
//!   diverge once a commit completes.
//! - **Single-slot locks.** At most one edit and one removal may be in
//!   flight, tracked by [`EditState`] and [`RemovalState`]. The two
//!   locks are independent of each other. Because mutations address
//!   items by position, a second concurrent operation of the same kind
//!   could shift positions underneath the first; the locks exist to
//!   rule that out, and removal completions re-check the lock instead of
//!   trusting the position captured at initiation.
//!
//! Commit and removal take effect a fixed delay after they are
//! initiated, driven by the owner through [`Inventory::advance`].

use std::time::Duration;

use chrono::NaiveDate;

use crate::config::TrackerConfig;
use crate::error::{Result, StockroomError};
use crate::model::Item;
use crate::schedule::{Scheduler, TaskId};
use crate::search;
use crate::store::KeyValueStore;
use crate::validate::{validate, Candidate};

/// Single-slot edit lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditState {
    #[default]
    Idle,
    Editing(usize),
}

/// Single-slot removal lock, independent of the edit lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RemovalState {
    #[default]
    Idle,
    Removing(usize),
}

/// A delayed operation waiting on the scheduler.
#[derive(Debug, Clone)]
enum PendingOp {
    Upsert { candidate: Candidate, today: NaiveDate },
    Removal { position: usize },
}

pub struct Inventory<S: KeyValueStore> {
    items: Vec<Item>,
    edit: EditState,
    removal: RemovalState,
    store: S,
    key: String,
    scheduler: Scheduler<PendingOp>,
    commit_delay: Duration,
    removal_delay: Duration,
}

impl<S: KeyValueStore> Inventory<S> {
    /// Open the inventory under `key`.
    ///
    /// When the store has no usable value for `key` (absent or corrupt),
    /// `seed` becomes the initial collection and is persisted. A present
    /// value wins over the seed unconditionally, even when it is an
    /// empty list, so stale seed data can never overwrite user state.
    pub fn open(mut store: S, key: impl Into<String>, seed: Vec<Item>) -> Result<Self> {
        let key = key.into();
        let items = match store.load(&key) {
            Some(items) => items,
            None => {
                if !seed.is_empty() {
                    store.save(&key, &seed)?;
                    tracing::debug!("seeded '{key}' with {} items", seed.len());
                }
                seed
            }
        };
        let defaults = TrackerConfig::default();
        Ok(Self {
            items,
            edit: EditState::Idle,
            removal: RemovalState::Idle,
            store,
            key,
            scheduler: Scheduler::new(),
            commit_delay: defaults.commit_delay(),
            removal_delay: defaults.removal_delay(),
        })
    }

    /// Open using the key and delays from `config`.
    pub fn from_config(store: S, config: &TrackerConfig, seed: Vec<Item>) -> Result<Self> {
        Ok(Self::open(store, config.storage_key.clone(), seed)?
            .with_delays(config.commit_delay(), config.removal_delay()))
    }

    pub fn with_delays(mut self, commit: Duration, removal: Duration) -> Self {
        self.commit_delay = commit;
        self.removal_delay = removal;
        self
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn edit_state(&self) -> EditState {
        self.edit
    }

    pub fn removal_state(&self) -> RemovalState {
        self.removal
    }

    /// The search-filtered view of the collection.
    pub fn visible(&self, query: &str) -> Vec<Item> {
        search::filter(&self.items, query)
    }

    /// Take the edit lock for `position` and return the pre-filled form
    /// candidate.
    pub fn begin_edit(&mut self, position: usize) -> Result<Candidate> {
        if let EditState::Editing(_) = self.edit {
            return Err(StockroomError::ConcurrentEdit);
        }
        let item = self
            .items
            .get(position)
            .ok_or(StockroomError::UnknownPosition(position))?;
        self.edit = EditState::Editing(position);
        Ok(Candidate::from_item(item))
    }

    /// Release the edit lock without touching the collection. Only
    /// meaningful for an edit that has not been submitted; a commit
    /// already in flight cannot be called back.
    pub fn cancel_edit(&mut self) {
        self.edit = EditState::Idle;
    }

    /// Validate `candidate` and schedule the commit to take effect after
    /// the commit delay. Validation failures surface immediately;
    /// the commit itself re-validates before mutating.
    pub fn submit_upsert(&mut self, candidate: Candidate, today: NaiveDate) -> Result<TaskId> {
        let verdict = validate(&candidate, today);
        if !verdict.is_valid() {
            return Err(StockroomError::Validation(verdict));
        }
        Ok(self
            .scheduler
            .schedule(self.commit_delay, PendingOp::Upsert { candidate, today }))
    }

    /// Commit `candidate` now: replace in place when an edit holds the
    /// lock, append otherwise. Clears the edit lock and writes through
    /// before returning. An invalid candidate leaves the collection,
    /// storage, and lock untouched.
    pub fn commit_upsert(&mut self, candidate: Candidate, today: NaiveDate) -> Result<()> {
        let item = candidate
            .into_item(today)
            .map_err(StockroomError::Validation)?;
        match self.edit {
            EditState::Editing(position) => {
                let slot = self
                    .items
                    .get_mut(position)
                    .ok_or(StockroomError::UnknownPosition(position))?;
                *slot = item;
                self.edit = EditState::Idle;
            }
            EditState::Idle => self.items.push(item),
        }
        self.write_through()
    }

    /// Take the removal lock for `position` and schedule the removal to
    /// complete after the removal delay. Not cancellable once begun.
    pub fn begin_removal(&mut self, position: usize) -> Result<TaskId> {
        if let RemovalState::Removing(_) = self.removal {
            return Err(StockroomError::ConcurrentRemoval);
        }
        if position >= self.items.len() {
            return Err(StockroomError::UnknownPosition(position));
        }
        self.removal = RemovalState::Removing(position);
        Ok(self
            .scheduler
            .schedule(self.removal_delay, PendingOp::Removal { position }))
    }

    /// Complete the removal at `position`: drop the entry, shift later
    /// positions down one, write through, release the lock.
    ///
    /// When the removal lock no longer names `position` the completion
    /// is stale: the collection the caller captured a position into no
    /// longer exists in that shape, so it is skipped without mutating
    /// anything.
    pub fn complete_removal(&mut self, position: usize) -> Result<()> {
        if self.removal != RemovalState::Removing(position) {
            tracing::warn!("stale removal completion for position {position}; skipped");
            return Ok(());
        }
        if position >= self.items.len() {
            // Lock matches but the position fell off the end of the
            // collection; nothing sensible to remove.
            tracing::warn!("removal position {position} out of range; skipped");
            self.removal = RemovalState::Idle;
            return Ok(());
        }
        self.items.remove(position);
        self.removal = RemovalState::Idle;
        self.write_through()
    }

    /// Move the logical clock forward and apply every operation whose
    /// delay has elapsed, in due order.
    pub fn advance(&mut self, elapsed: Duration) -> Result<()> {
        for op in self.scheduler.advance(elapsed) {
            match op {
                PendingOp::Upsert { candidate, today } => self.commit_upsert(candidate, today)?,
                PendingOp::Removal { position } => self.complete_removal(position)?,
            }
        }
        Ok(())
    }

    fn write_through(&mut self) -> Result<()> {
        self.store.save(&self.key, &self.items)?;
        tracing::debug!("wrote through {} items to '{}'", self.items.len(), self.key);
        Ok(())
    }
}
