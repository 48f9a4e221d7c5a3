//! Pending re-evaluations for the next tick.

use std::mem;

use rustc_hash::FxHashMap;

use crate::game_mode::ActorId;

use super::CheckPayload;

/// Priority level for checks.
///
/// Within one tick, checks run in priority order (higher first), then in the
/// order they were scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub enum TickPriority {
    /// Runs before everything else.
    High,
    /// Default priority.
    #[default]
    Normal,
    /// Runs after everything else, e.g. explosion debris.
    Low,
}

/// A scheduled re-evaluation of one cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckEntry {
    /// Store index of the cell.
    pub index: usize,
    /// When scheduling over a pending check for the same cell, replace it
    /// instead of being dropped.
    pub retry: bool,
    /// Rule-specific state.
    pub payload: CheckPayload,
    /// How many times a rule has deferred this check.
    pub elapsed_ticks: u32,
    /// Who caused this check, if anyone.
    pub actor: Option<ActorId>,
    /// Ordering within a tick.
    pub priority: TickPriority,
}

impl CheckEntry {
    /// Creates a plain check for `index`.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self {
            index,
            retry: false,
            payload: CheckPayload::None,
            elapsed_ticks: 0,
            actor: None,
            priority: TickPriority::Normal,
        }
    }

    /// Sets the payload.
    #[must_use]
    pub const fn with_payload(mut self, payload: CheckPayload) -> Self {
        self.payload = payload;
        self
    }

    /// Sets the causing actor.
    #[must_use]
    pub const fn with_actor(mut self, actor: Option<ActorId>) -> Self {
        self.actor = actor;
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TickPriority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the retry flag.
    #[must_use]
    pub const fn with_retry(mut self, retry: bool) -> Self {
        self.retry = retry;
        self
    }

    /// Returns this check deferred by one more tick.
    ///
    /// A deferred check always replaces whatever was scheduled for its cell in
    /// the meantime, so a running fuse keeps its count.
    #[must_use]
    pub const fn advance(mut self) -> Self {
        self.elapsed_ticks = self.elapsed_ticks.saturating_add(1);
        self.retry = true;
        self
    }
}

/// Ordered queue of pending checks, at most one per cell.
#[derive(Debug, Default)]
pub struct CheckQueue {
    entries: Vec<CheckEntry>,
    /// Position in `entries` of the pending check for each index.
    slots: FxHashMap<usize, usize>,
}

impl CheckQueue {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules a check.
    ///
    /// If the cell already has a pending check, the new one replaces it when
    /// `retry` is set and is dropped otherwise. Returns `true` if the queue
    /// now holds `entry`.
    pub fn schedule(&mut self, entry: CheckEntry) -> bool {
        if let Some(&slot) = self.slots.get(&entry.index) {
            if !entry.retry {
                return false;
            }
            self.entries[slot] = entry;
            return true;
        }

        log::trace!("Scheduled check at {} ({:?})", entry.index, entry.payload);
        self.slots.insert(entry.index, self.entries.len());
        self.entries.push(entry);
        true
    }

    /// Returns `true` if a check is pending for `index`.
    #[must_use]
    pub fn is_scheduled(&self, index: usize) -> bool {
        self.slots.contains_key(&index)
    }

    /// Returns the pending check for `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&CheckEntry> {
        self.slots.get(&index).map(|&slot| &self.entries[slot])
    }

    /// Takes every pending check, highest priority first and in enqueue
    /// order within a priority, leaving the queue empty.
    pub fn drain(&mut self) -> Vec<CheckEntry> {
        self.slots.clear();
        let mut entries = mem::take(&mut self.entries);
        // Stable, so enqueue order survives within a priority.
        entries.sort_by_key(|entry| entry.priority);
        entries
    }

    /// Drops every pending check and returns how many there were.
    pub fn clear(&mut self) -> usize {
        let count = self.entries.len();
        self.entries.clear();
        self.slots.clear();
        count
    }

    /// Number of pending checks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
