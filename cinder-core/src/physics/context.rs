use cinder_utils::BlockPos;
use cinder_utils::random::Random;

use crate::block::BlockId;
use crate::config::PhysicsConfig;
use crate::game_mode::GameModeAdapter;
use crate::ticks::{CheckQueue, UpdateQueue};
use crate::world::{BlockStore, Dimensions};

/// Everything a rule or the explosion resolver may touch while a check runs.
///
/// The store is read-only here. Rules change the world by scheduling updates,
/// which the tick driver applies at the start of the next tick.
pub struct PhysicsContext<'a> {
    /// Name of the world, passed through to the game mode.
    pub world: &'a str,
    /// World size.
    pub dims: Dimensions,
    /// Current blocks.
    pub store: &'a BlockStore,
    /// Updates for the next tick.
    pub updates: &'a mut UpdateQueue,
    /// Checks for the next tick.
    pub checks: &'a mut CheckQueue,
    /// Physics settings.
    pub config: &'a PhysicsConfig,
    /// The world's random source.
    pub random: &'a mut dyn Random,
    /// The active game mode.
    pub game_mode: &'a dyn GameModeAdapter,
}

impl PhysicsContext<'_> {
    /// Returns the index and block at `pos`, or `None` outside the world.
    #[inline]
    #[must_use]
    pub fn block_at(&self, pos: BlockPos) -> Option<(usize, BlockId)> {
        let index = self.dims.index_of(&pos)?;
        Some((index, self.store.get(index)))
    }
}
