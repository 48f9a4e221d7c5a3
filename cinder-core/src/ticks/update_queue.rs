//! Pending block writes for the next tick.

use std::mem;

use rustc_hash::FxHashMap;

use crate::block::BlockId;

/// A scheduled write of `block` to the cell at `index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingUpdate {
    /// Store index of the target cell.
    pub index: usize,
    /// The block the cell should become.
    pub block: BlockId,
    /// Whether this entry may replace an earlier one for the same cell.
    pub overwrite: bool,
}

/// Ordered queue of pending updates, at most one per cell.
///
/// The first entry scheduled for a cell fixes where that cell sits in the
/// apply order. A later entry for the same cell replaces the pending block
/// only if it carries `overwrite`; otherwise it is dropped. Entries are
/// handed out in enqueue order by [`UpdateQueue::drain`].
#[derive(Debug, Default)]
pub struct UpdateQueue {
    entries: Vec<PendingUpdate>,
    /// Position in `entries` of the pending update for each index.
    slots: FxHashMap<usize, usize>,
}

impl UpdateQueue {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules an update.
    ///
    /// Returns `true` if the queue now holds `block` for `index`, `false` if
    /// an earlier entry kept the slot.
    pub fn schedule(&mut self, index: usize, block: BlockId, overwrite: bool) -> bool {
        if let Some(&slot) = self.slots.get(&index) {
            if !overwrite {
                log::trace!("Dropped update of {index} to {block}, one is already pending");
                return false;
            }
            let pending = &mut self.entries[slot];
            pending.block = block;
            pending.overwrite = true;
            return true;
        }

        self.slots.insert(index, self.entries.len());
        self.entries.push(PendingUpdate {
            index,
            block,
            overwrite,
        });
        true
    }

    /// Returns the pending block for `index`, if any.
    #[must_use]
    pub fn pending_for(&self, index: usize) -> Option<BlockId> {
        self.slots.get(&index).map(|&slot| self.entries[slot].block)
    }

    /// Takes every pending update in enqueue order, leaving the queue empty.
    pub fn drain(&mut self) -> Vec<PendingUpdate> {
        self.slots.clear();
        mem::take(&mut self.entries)
    }

    /// Drops every pending update and returns how many there were.
    pub fn clear(&mut self) -> usize {
        let count = self.entries.len();
        self.entries.clear();
        self.slots.clear();
        count
    }

    /// Number of pending updates.
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
