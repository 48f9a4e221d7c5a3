//! Test doubles shared by the unit tests.

use std::sync::Arc;

use cinder_utils::BlockPos;
use cinder_utils::random::Random;
use parking_lot::Mutex;

use crate::block::BlockId;
use crate::config::{PhysicsConfig, PhysicsLevel};
use crate::explosion::{self, ExplosionRequest, ExplosionSummary};
use crate::game_mode::{ActorId, GameModeAdapter, KillCause, MatchParams, Participant};
use crate::physics::{PhysicsContext, PhysicsRule, RuleOutcome};
use crate::ticks::{CheckEntry, CheckQueue, UpdateQueue};
use crate::world::{BlockStore, Dimensions, WorldHost};

/// Replays a fixed list of rolls, cycling. With no rolls it always returns 0,
/// so every chance above zero succeeds.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    rolls: Vec<i32>,
    cursor: usize,
}

impl ScriptedRandom {
    pub fn new(rolls: Vec<i32>) -> Self {
        Self { rolls, cursor: 0 }
    }

    fn next_roll(&mut self) -> i32 {
        if self.rolls.is_empty() {
            return 0;
        }
        let roll = self.rolls[self.cursor % self.rolls.len()];
        self.cursor += 1;
        roll
    }
}

impl Random for ScriptedRandom {
    fn next_i32(&mut self) -> i32 {
        self.next_roll()
    }

    fn next_i32_bounded(&mut self, bound: i32) -> i32 {
        self.next_roll().rem_euclid(bound)
    }
}

/// A game mode with one optional match and a kill log.
#[derive(Debug, Default)]
pub struct TestGameMode {
    pub protect_all: bool,
    pub player: Option<(ActorId, MatchParams)>,
    pub participants: Vec<Participant>,
    pub kills: Mutex<Vec<(ActorId, KillCause, ActorId)>>,
}

impl GameModeAdapter for TestGameMode {
    fn is_protected_zone(&self, _world: &str, _pos: BlockPos, _exclude_air: bool) -> bool {
        self.protect_all
    }

    fn difficulty_params(&self, actor: ActorId) -> Option<MatchParams> {
        self.player
            .filter(|(player, _)| *player == actor)
            .map(|(_, params)| params)
    }

    fn participants(&self, _world: &str, _attacker: ActorId) -> Vec<Participant> {
        self.participants.clone()
    }

    fn report_kill(&self, victim: ActorId, cause: KillCause, attacker: ActorId) {
        self.kills.lock().push((victim, cause, attacker));
    }
}

/// A host that records broadcasts and rejects writes to listed positions.
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub denied: Vec<BlockPos>,
    pub broadcasts: Mutex<Vec<(BlockPos, BlockId)>>,
}

impl WorldHost for RecordingHost {
    fn allow_change(
        &self,
        _world: &str,
        pos: BlockPos,
        _old: BlockId,
        _new: BlockId,
        _actor: Option<ActorId>,
    ) -> bool {
        !self.denied.contains(&pos)
    }

    fn broadcast_change(&self, _world: &str, pos: BlockPos, block: BlockId) {
        self.broadcasts.lock().push((pos, block));
    }
}

/// A bare 16³ world for driving rules and explosions directly.
pub struct TestBed {
    pub dims: Dimensions,
    pub store: BlockStore,
    pub updates: UpdateQueue,
    pub checks: CheckQueue,
    pub config: PhysicsConfig,
    pub random: ScriptedRandom,
    pub game_mode: Arc<TestGameMode>,
}

impl TestBed {
    pub fn new(level: PhysicsLevel) -> Self {
        let dims = Dimensions::new(16, 16, 16).expect("valid dimensions");
        Self {
            dims,
            store: BlockStore::new(dims),
            updates: UpdateQueue::new(),
            checks: CheckQueue::new(),
            config: PhysicsConfig::with_level(level),
            random: ScriptedRandom::default(),
            game_mode: Arc::new(TestGameMode::default()),
        }
    }

    pub fn with_rolls(mut self, rolls: Vec<i32>) -> Self {
        self.random = ScriptedRandom::new(rolls);
        self
    }

    pub fn with_match(
        mut self,
        player: ActorId,
        params: MatchParams,
        participants: Vec<Participant>,
    ) -> Self {
        self.game_mode = Arc::new(TestGameMode {
            player: Some((player, params)),
            participants,
            ..TestGameMode::default()
        });
        self
    }

    pub fn with_protected_everywhere(mut self) -> Self {
        self.game_mode = Arc::new(TestGameMode {
            protect_all: true,
            ..TestGameMode::default()
        });
        self
    }

    pub fn index(&self, pos: BlockPos) -> usize {
        self.dims.index_of(&pos).expect("position inside the test bed")
    }

    pub fn put(&mut self, pos: BlockPos, block: BlockId) -> usize {
        let index = self.index(pos);
        self.store.set(index, block);
        index
    }

    pub fn context(&mut self) -> PhysicsContext<'_> {
        PhysicsContext {
            world: "test",
            dims: self.dims,
            store: &self.store,
            updates: &mut self.updates,
            checks: &mut self.checks,
            config: &self.config,
            random: &mut self.random,
            game_mode: self.game_mode.as_ref(),
        }
    }

    pub fn evaluate(&mut self, rule: impl PhysicsRule, check: CheckEntry) -> RuleOutcome {
        rule.evaluate(&mut self.context(), check)
    }

    pub fn explode(&mut self, request: &ExplosionRequest) -> ExplosionSummary {
        explosion::resolve(&mut self.context(), request)
    }

    pub fn kills(&self) -> Vec<(ActorId, KillCause, ActorId)> {
        self.game_mode.kills.lock().clone()
    }
}
