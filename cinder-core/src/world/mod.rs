//! This module contains the `World` struct, one simulated block grid.
//!
//! A world owns its block store and its two pending queues. Every write,
//! whether an external edit or a scheduled update, goes through the same path:
//! the host may veto it, the store is changed, the host is told, and rules
//! that react to the new block get a check for the next tick.
use std::sync::Arc;

use cinder_utils::random::{Random, Xoroshiro};
use cinder_utils::{BlockPos, Direction};
use smallvec::SmallVec;

use crate::block::BlockId;
use crate::config::PhysicsConfig;
use crate::error::WorldError;
use crate::explosion::{self, ExplosionRequest, ExplosionSummary};
use crate::game_mode::{ActorId, GameModeAdapter, NoGameMode};
use crate::physics::{LeafDecay, PhysicsContext, PhysicsRule, Rule};
use crate::ticks::{CheckEntry, CheckPayload, CheckQueue, UpdateQueue};

mod dimensions;
mod host;
mod store;
mod tick_driver;

pub use dimensions::Dimensions;
pub use host::{NullHost, WorldHost};
pub use store::BlockStore;

/// Pending entries dropped by [`World::discard_pending`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiscardedEntries {
    /// Dropped updates.
    pub updates: usize,
    /// Dropped checks.
    pub checks: usize,
}

/// A struct that represents a world.
pub struct World {
    name: String,
    dims: Dimensions,
    store: BlockStore,
    updates: UpdateQueue,
    checks: CheckQueue,
    config: PhysicsConfig,
    random: Box<dyn Random + Send>,
    host: Arc<dyn WorldHost>,
    game_mode: Arc<dyn GameModeAdapter>,
    tick_count: u64,
}

impl World {
    /// Creates a world filled with air. Fails if `config` does not validate.
    pub fn new(name: impl Into<String>, dims: Dimensions, config: PhysicsConfig) -> Result<Self, WorldError> {
        config.validate()?;
        Ok(Self::with_store(name.into(), dims, BlockStore::new(dims), config))
    }

    /// Creates a world from an existing block buffer in index order.
    pub fn from_blocks(
        name: impl Into<String>,
        dims: Dimensions,
        blocks: Vec<BlockId>,
        config: PhysicsConfig,
    ) -> Result<Self, WorldError> {
        config.validate()?;
        let store = BlockStore::from_blocks(dims, blocks)?;
        Ok(Self::with_store(name.into(), dims, store, config))
    }

    fn with_store(name: String, dims: Dimensions, store: BlockStore, config: PhysicsConfig) -> Self {
        Self {
            name,
            dims,
            store,
            updates: UpdateQueue::new(),
            checks: CheckQueue::new(),
            config,
            random: Box::new(Xoroshiro::from_seed(rand::random())),
            host: Arc::new(NullHost),
            game_mode: Arc::new(NoGameMode),
            tick_count: 0,
        }
    }

    /// Sets the host that vets and broadcasts writes.
    #[must_use]
    pub fn with_host(mut self, host: Arc<dyn WorldHost>) -> Self {
        self.host = host;
        self
    }

    /// Sets the game mode consulted by TNT and explosions.
    #[must_use]
    pub fn with_game_mode(mut self, game_mode: Arc<dyn GameModeAdapter>) -> Self {
        self.game_mode = game_mode;
        self
    }

    /// Replaces the random source.
    #[must_use]
    pub fn with_random(mut self, random: Box<dyn Random + Send>) -> Self {
        self.random = random;
        self
    }

    /// Seeds the default random source, making rolls reproducible.
    #[must_use]
    pub fn with_seed(self, seed: u64) -> Self {
        self.with_random(Box::new(Xoroshiro::from_seed(seed)))
    }

    /// The world's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The world's size.
    #[must_use]
    pub const fn dims(&self) -> Dimensions {
        self.dims
    }

    /// The physics configuration.
    #[must_use]
    pub const fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    /// Ticks run so far.
    #[must_use]
    pub const fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Read-only view of the block store.
    #[must_use]
    pub const fn store(&self) -> &BlockStore {
        &self.store
    }

    /// Returns the block at `pos`, or `None` outside the world.
    #[must_use]
    pub fn get_block(&self, pos: BlockPos) -> Option<BlockId> {
        self.dims.index_of(&pos).map(|index| self.store.get(index))
    }

    /// Writes `block` at `pos` right away, on behalf of `actor`.
    ///
    /// Returns `true` if the stored block changed. Writes outside the world,
    /// writes of the block already there and writes the host rejects all
    /// return `false`.
    pub fn set_block(&mut self, pos: BlockPos, block: BlockId, actor: Option<ActorId>) -> bool {
        match self.dims.index_of(&pos) {
            Some(index) => self.write(index, block, actor),
            None => false,
        }
    }

    /// Schedules a write for the next tick. See [`UpdateQueue::schedule`].
    ///
    /// Returns `false` for indices outside the world and for entries dropped
    /// by the same-cell policy.
    pub fn schedule_update(&mut self, index: usize, block: BlockId, overwrite: bool) -> bool {
        if !self.dims.contains_index(index) {
            return false;
        }
        self.updates.schedule(index, block, overwrite)
    }

    /// Schedules a check for the next tick. See [`CheckQueue::schedule`].
    ///
    /// Returns `false` for indices outside the world and for entries dropped
    /// by the same-cell policy.
    pub fn schedule_check(
        &mut self,
        index: usize,
        retry: bool,
        payload: CheckPayload,
        actor: Option<ActorId>,
    ) -> bool {
        if !self.dims.contains_index(index) {
            return false;
        }
        self.checks.schedule(
            CheckEntry::new(index)
                .with_retry(retry)
                .with_payload(payload)
                .with_actor(actor),
        )
    }

    /// Resolves an explosion now. Its effects land in the next tick.
    pub fn make_explosion(&mut self, request: &ExplosionRequest) -> ExplosionSummary {
        explosion::resolve(&mut self.context(), request)
    }

    /// Drops every pending update and check.
    pub fn discard_pending(&mut self) -> DiscardedEntries {
        DiscardedEntries {
            updates: self.updates.clear(),
            checks: self.checks.clear(),
        }
    }

    /// Number of updates waiting for the next tick.
    #[must_use]
    pub fn pending_updates(&self) -> usize {
        self.updates.len()
    }

    /// Number of checks waiting for the next tick.
    #[must_use]
    pub fn pending_checks(&self) -> usize {
        self.checks.len()
    }

    /// Borrows the parts of the world a rule may touch.
    fn context(&mut self) -> PhysicsContext<'_> {
        PhysicsContext {
            world: &self.name,
            dims: self.dims,
            store: &self.store,
            updates: &mut self.updates,
            checks: &mut self.checks,
            config: &self.config,
            random: self.random.as_mut(),
            game_mode: self.game_mode.as_ref(),
        }
    }

    /// The single write path.
    fn write(&mut self, index: usize, block: BlockId, actor: Option<ActorId>) -> bool {
        let old = self.store.get(index);
        if old == block {
            return false;
        }
        let pos = self.dims.to_pos(index);
        if !self.host.allow_change(&self.name, pos, old, block, actor) {
            log::trace!("Host rejected {old} -> {block} at {pos} in {}", self.name);
            return false;
        }

        self.store.set(index, block);
        self.host.broadcast_change(&self.name, pos, block);
        self.react(index, pos, old, block, actor);
        true
    }

    /// Schedules the checks a change at `index` sets off.
    fn react(&mut self, index: usize, pos: BlockPos, old: BlockId, new: BlockId, actor: Option<ActorId>) {
        if Rule::reacts_to(new) {
            self.checks.schedule(CheckEntry::new(index).with_actor(actor));
        }

        if matches!(old, BlockId::TRUNK | BlockId::LEAF) && LeafDecay.is_enabled(&self.config) {
            let leaves: SmallVec<[usize; 6]> = Direction::ALL
                .iter()
                .filter_map(|direction| self.dims.index_of(&direction.relative(pos)))
                .filter(|&neighbor| self.store.get(neighbor) == BlockId::LEAF)
                .collect();
            for leaf in leaves {
                self.checks.schedule(CheckEntry::new(leaf));
            }
        }
    }
}
