//! A TNT match game mode.
//!
//! Players join a match with a difficulty and report their position as they
//! move. Blasts credit kills to the player whose TNT went off, and a player
//! with enough kills in a row gets a stronger blast. Configured safe zones are
//! immune to every explosion, match or not.

use cinder_core::game_mode::{ActorId, GameModeAdapter, KillCause, MatchDifficulty, MatchParams, Participant};
use cinder_utils::BlockPos;
use scc::HashMap;

use crate::config::SafeZone;

/// Kills in a row that put a player on a streak.
pub const STREAK_KILLS: u32 = 3;

#[derive(Debug, Clone)]
struct MatchPlayer {
    world: String,
    pos: BlockPos,
    difficulty: MatchDifficulty,
    streak: u32,
    kills: u32,
}

/// Safe zones plus the players of running matches.
#[derive(Debug, Default)]
pub struct Arena {
    safe_zones: Vec<SafeZone>,
    players: HashMap<ActorId, MatchPlayer>,
}

impl Arena {
    /// Creates an arena with the given safe zones and no players.
    #[must_use]
    pub fn new(safe_zones: Vec<SafeZone>) -> Self {
        Self {
            safe_zones,
            players: HashMap::new(),
        }
    }

    /// Adds `actor` to the match in `world`. Returns `false` if already playing.
    pub fn join(&self, actor: ActorId, world: &str, pos: BlockPos, difficulty: MatchDifficulty) -> bool {
        let player = MatchPlayer {
            world: world.to_owned(),
            pos,
            difficulty,
            streak: 0,
            kills: 0,
        };
        let joined = self.players.insert_sync(actor, player).is_ok();
        if joined {
            tracing::info!(%actor, world, ?difficulty, "Player joined the match");
        }
        joined
    }

    /// Removes `actor` from its match. Returns `false` if it was not playing.
    pub fn leave(&self, actor: ActorId) -> bool {
        self.players.remove_sync(&actor).is_some()
    }

    /// Records a player's new position.
    pub fn move_to(&self, actor: ActorId, pos: BlockPos) {
        let _ = self.players.update_sync(&actor, |_, player| player.pos = pos);
    }

    /// Total kills of `actor` in its current match.
    #[must_use]
    pub fn kills(&self, actor: ActorId) -> Option<u32> {
        self.players.read_sync(&actor, |_, player| player.kills)
    }
}

impl GameModeAdapter for Arena {
    fn is_protected_zone(&self, world: &str, pos: BlockPos, _exclude_air: bool) -> bool {
        self.safe_zones.iter().any(|zone| zone.contains(world, pos))
    }

    fn difficulty_params(&self, actor: ActorId) -> Option<MatchParams> {
        self.players.read_sync(&actor, |_, player| {
            player.difficulty.params(player.streak >= STREAK_KILLS)
        })
    }

    fn participants(&self, world: &str, _attacker: ActorId) -> Vec<Participant> {
        let mut participants = Vec::new();
        self.players.iter_sync(|actor, player| {
            if player.world == world {
                participants.push(Participant {
                    actor: *actor,
                    pos: player.pos,
                });
            }
            true
        });
        participants
    }

    fn report_kill(&self, victim: ActorId, cause: KillCause, attacker: ActorId) {
        let _ = self.players.update_sync(&victim, |_, player| player.streak = 0);
        let streak = self.players.update_sync(&attacker, |_, player| {
            player.kills += 1;
            player.streak += 1;
            player.streak
        });
        tracing::info!(%attacker, %victim, ?cause, streak, "Player killed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_zones() {
        let arena = Arena::new(vec![SafeZone {
            world: "arena".to_owned(),
            min: BlockPos::new(0, 0, 0),
            max: BlockPos::new(2, 2, 2),
        }]);
        assert!(arena.is_protected_zone("arena", BlockPos::new(1, 1, 1), false));
        assert!(!arena.is_protected_zone("arena", BlockPos::new(3, 1, 1), false));
        assert!(!arena.is_protected_zone("main", BlockPos::new(1, 1, 1), false));
    }

    #[test]
    fn test_outsiders_get_no_params() {
        let arena = Arena::default();
        assert_eq!(arena.difficulty_params(ActorId::random()), None);
    }

    #[test]
    fn test_join_and_leave() {
        let arena = Arena::default();
        let actor = ActorId::random();
        assert!(arena.join(actor, "arena", BlockPos::ZERO, MatchDifficulty::Hard));
        assert!(!arena.join(actor, "arena", BlockPos::ZERO, MatchDifficulty::Easy));
        assert_eq!(
            arena.difficulty_params(actor),
            Some(MatchDifficulty::Hard.params(false))
        );
        assert!(arena.leave(actor));
        assert!(!arena.leave(actor));
        assert_eq!(arena.difficulty_params(actor), None);
    }

    #[test]
    fn test_participants_are_per_world() {
        let arena = Arena::default();
        let (a, b, c) = (ActorId::random(), ActorId::random(), ActorId::random());
        arena.join(a, "arena", BlockPos::ZERO, MatchDifficulty::Normal);
        arena.join(b, "arena", BlockPos::ZERO, MatchDifficulty::Normal);
        arena.join(c, "main", BlockPos::ZERO, MatchDifficulty::Normal);
        arena.move_to(b, BlockPos::new(4, 5, 6));

        let mut participants = arena.participants("arena", a);
        participants.sort_by_key(|p| p.actor);
        let mut expected = vec![
            Participant {
                actor: a,
                pos: BlockPos::ZERO,
            },
            Participant {
                actor: b,
                pos: BlockPos::new(4, 5, 6),
            },
        ];
        expected.sort_by_key(|p| p.actor);
        assert_eq!(participants, expected);
    }

    #[test]
    fn test_streak_boosts_power() {
        let arena = Arena::default();
        let attacker = ActorId::random();
        let victim = ActorId::random();
        arena.join(attacker, "arena", BlockPos::ZERO, MatchDifficulty::Normal);
        arena.join(victim, "arena", BlockPos::ZERO, MatchDifficulty::Normal);

        for _ in 0..STREAK_KILLS {
            assert_eq!(
                arena.difficulty_params(attacker).map(|p| p.power_bonus),
                Some(0)
            );
            arena.report_kill(victim, KillCause::Explosion, attacker);
        }
        assert_eq!(
            arena.difficulty_params(attacker).map(|p| p.power_bonus),
            Some(1)
        );
        assert_eq!(arena.kills(attacker), Some(STREAK_KILLS));

        // Dying ends the streak.
        arena.report_kill(attacker, KillCause::DirectHit, victim);
        assert_eq!(
            arena.difficulty_params(attacker).map(|p| p.power_bonus),
            Some(0)
        );
    }
}
