//! Shared access to a running world.

use std::sync::Arc;

use cinder_core::block::BlockId;
use cinder_core::explosion::{ExplosionRequest, ExplosionSummary};
use cinder_core::game_mode::ActorId;
use cinder_core::ticks::TickReport;
use cinder_core::world::{DiscardedEntries, World};
use cinder_utils::BlockPos;
use parking_lot::Mutex;

/// A cloneable handle to one world.
///
/// Edits and ticks take the same lock, so an edit lands either before or after
/// a tick, never in the middle of one.
#[derive(Clone)]
pub struct WorldHandle {
    name: Arc<str>,
    world: Arc<Mutex<World>>,
}

impl WorldHandle {
    /// Wraps a world.
    #[must_use]
    pub fn new(world: World) -> Self {
        Self {
            name: Arc::from(world.name()),
            world: Arc::new(Mutex::new(world)),
        }
    }

    /// The world's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the block at `pos`.
    #[must_use]
    pub fn get_block(&self, pos: BlockPos) -> Option<BlockId> {
        self.world.lock().get_block(pos)
    }

    /// Writes a block on behalf of `actor`. See [`World::set_block`].
    pub fn set_block(&self, pos: BlockPos, block: BlockId, actor: Option<ActorId>) -> bool {
        self.world.lock().set_block(pos, block, actor)
    }

    /// Resolves an explosion. See [`World::make_explosion`].
    pub fn make_explosion(&self, request: &ExplosionRequest) -> ExplosionSummary {
        self.world.lock().make_explosion(request)
    }

    /// Runs one tick and returns its report with the number of checks left
    /// pending afterwards.
    pub fn tick(&self) -> (TickReport, usize) {
        let mut world = self.world.lock();
        let report = world.run_tick();
        (report, world.pending_checks())
    }

    /// Drops everything the world has queued.
    pub fn discard_pending(&self) -> DiscardedEntries {
        self.world.lock().discard_pending()
    }

    /// Runs `f` with exclusive access to the world.
    pub fn with_world<R>(&self, f: impl FnOnce(&mut World) -> R) -> R {
        f(&mut self.world.lock())
    }
}
