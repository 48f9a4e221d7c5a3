//! Summary of one tick.

use cinder_utils::BlockPos;

use crate::block::BlockId;
use crate::game_mode::ActorId;

/// A TNT check that reached the end of its fuse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detonation {
    /// Where the TNT sat.
    pub pos: BlockPos,
    /// Which TNT it was.
    pub block: BlockId,
    /// Who is credited with it.
    pub actor: Option<ActorId>,
    /// How many checks the fuse burned for.
    pub elapsed_ticks: u32,
}

/// What one call to `World::run_tick` did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickReport {
    /// The tick number, starting at one.
    pub tick: u64,
    /// Updates that changed a stored block.
    pub modified: usize,
    /// Checks handed to a rule or discarded this tick.
    pub checks_evaluated: usize,
    /// Leaves that decayed.
    pub decayed: usize,
    /// TNT that detonated.
    pub detonations: Vec<Detonation>,
}

impl TickReport {
    pub(crate) fn new(tick: u64) -> Self {
        Self {
            tick,
            ..Self::default()
        }
    }

    /// Returns `true` if the tick did no work.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.modified == 0 && self.checks_evaluated == 0
    }
}
