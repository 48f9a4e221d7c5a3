//! The narrow interface to competitive game modes.
//!
//! The engine never owns match state. During explosion resolution and TNT
//! fusing it asks a [`GameModeAdapter`] about protected zones, difficulty and
//! participants, and reports kills back. Every call is a plain lookup or a
//! fire-and-forget report.

use std::fmt::{self, Display};

use cinder_utils::BlockPos;
use serde::Deserialize;
use uuid::Uuid;

/// Identifies a player or other acting entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActorId(pub Uuid);

impl ActorId {
    /// Creates a random actor id.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

/// How a victim was killed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KillCause {
    /// Caught in the blast of a TNT fuse. The TNT rule reports this cause.
    Explosion,
    /// Caught in a blast the host requested through `World::make_explosion`,
    /// e.g. a projectile impact. The engine never picks this cause itself.
    DirectHit,
}

/// Fuse and power tuning for TNT placed by a match participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatchParams {
    /// Checks the fuse burns for before detonation.
    pub fuse_threshold: u32,
    /// Added to the base blast power.
    pub power_bonus: i32,
}

/// A tracked actor and where it stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Participant {
    /// The actor.
    pub actor: ActorId,
    /// Its block position.
    pub pos: BlockPos,
}

/// Match difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchDifficulty {
    /// Long fuses.
    Easy,
    /// Default difficulty.
    #[default]
    Normal,
    /// Short fuses.
    Hard,
    /// Short fuses and bigger blasts.
    Extreme,
}

impl MatchDifficulty {
    /// Returns the TNT tuning at this difficulty. A kill streak adds one power.
    #[must_use]
    pub const fn params(self, on_streak: bool) -> MatchParams {
        let (fuse_threshold, power_bonus) = match self {
            Self::Easy => (7, 0),
            Self::Normal => (5, 0),
            Self::Hard => (3, 0),
            Self::Extreme => (3, 1),
        };
        MatchParams {
            fuse_threshold,
            power_bonus: if on_streak { power_bonus + 1 } else { power_bonus },
        }
    }
}

/// Game-mode capabilities consulted by the engine.
///
/// Implementations must answer immediately. When an actor is not in a match,
/// the methods return the "nothing special" answers and the engine falls back
/// to plain physics.
pub trait GameModeAdapter: Send + Sync {
    /// Returns `true` if `pos` is immune to blasts.
    fn is_protected_zone(&self, world: &str, pos: BlockPos, exclude_air: bool) -> bool;

    /// Returns the TNT tuning for `actor`, or `None` when it is not in a match.
    fn difficulty_params(&self, actor: ActorId) -> Option<MatchParams>;

    /// Returns every tracked actor in the same match as `attacker`.
    fn participants(&self, world: &str, attacker: ActorId) -> Vec<Participant>;

    /// Credits `attacker` with killing `victim`.
    fn report_kill(&self, victim: ActorId, cause: KillCause, attacker: ActorId);
}

/// The adapter used when no game mode is running.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoGameMode;

impl GameModeAdapter for NoGameMode {
    fn is_protected_zone(&self, _world: &str, _pos: BlockPos, _exclude_air: bool) -> bool {
        false
    }

    fn difficulty_params(&self, _actor: ActorId) -> Option<MatchParams> {
        None
    }

    fn participants(&self, _world: &str, _attacker: ActorId) -> Vec<Participant> {
        Vec::new()
    }

    fn report_kill(&self, _victim: ActorId, _cause: KillCause, _attacker: ActorId) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_params() {
        assert_eq!(MatchDifficulty::Easy.params(false).fuse_threshold, 7);
        assert_eq!(MatchDifficulty::Normal.params(false).fuse_threshold, 5);
        assert_eq!(MatchDifficulty::Hard.params(false).fuse_threshold, 3);
        assert_eq!(MatchDifficulty::Hard.params(false).power_bonus, 0);
        assert_eq!(MatchDifficulty::Extreme.params(false).power_bonus, 1);
        assert_eq!(MatchDifficulty::Extreme.params(true).power_bonus, 2);
        assert_eq!(MatchDifficulty::Normal.params(true).power_bonus, 1);
    }

    #[test]
    fn test_no_game_mode_is_inert() {
        let adapter = NoGameMode;
        let actor = ActorId::random();
        assert!(!adapter.is_protected_zone("main", BlockPos::ZERO, false));
        assert_eq!(adapter.difficulty_params(actor), None);
        assert!(adapter.participants("main", actor).is_empty());
    }
}
