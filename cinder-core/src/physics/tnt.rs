//! Primed TNT.
//!
//! Each check on a primed cell either burns one step of the fuse, toggling the
//! lava warning markers around it, or ends the fuse with a detonation. Match
//! players get their fuse length and blast size from the game mode; everyone
//! else gets the world's physics level.

use cinder_utils::{BlockPos, Direction};

use crate::block::BlockId;
use crate::config::{PhysicsConfig, PhysicsLevel, TntConfig};
use crate::explosion::{Attribution, ExplosionRequest};
use crate::game_mode::{ActorId, KillCause, MatchParams};
use crate::ticks::{CheckEntry, CheckPayload};

use super::{PhysicsContext, PhysicsRule, RuleOutcome};

/// The primed TNT variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TntKind {
    /// [`BlockId::SMALL_TNT`].
    Small,
    /// [`BlockId::BIG_TNT`].
    Big,
    /// [`BlockId::NUKE_TNT`].
    Nuke,
}

impl TntKind {
    /// Returns the kind of a primed TNT block.
    #[must_use]
    pub const fn from_block(block: BlockId) -> Option<Self> {
        match block {
            BlockId::SMALL_TNT => Some(Self::Small),
            BlockId::BIG_TNT => Some(Self::Big),
            BlockId::NUKE_TNT => Some(Self::Nuke),
            _ => None,
        }
    }

    /// The block this kind is stored as.
    #[must_use]
    pub const fn block(self) -> BlockId {
        match self {
            Self::Small => BlockId::SMALL_TNT,
            Self::Big => BlockId::BIG_TNT,
            Self::Nuke => BlockId::NUKE_TNT,
        }
    }

    /// Blast power outside of match play.
    #[must_use]
    pub const fn power(self, config: &TntConfig) -> i32 {
        match self {
            Self::Small => config.small_power,
            Self::Big => config.large_power,
            Self::Nuke => config.nuke_power,
        }
    }

    /// Sides on which the fuse shows its warning marker.
    #[must_use]
    pub const fn warning_sides(self) -> &'static [Direction] {
        match self {
            Self::Small => &[Direction::Up],
            Self::Big | Self::Nuke => &Direction::ALL,
        }
    }
}

/// The TNT rule for one kind of primed TNT.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TntRule(pub TntKind);

impl TntRule {
    /// Flips the warning markers around `pos` for the next tick.
    fn toggle_warnings(self, ctx: &mut PhysicsContext<'_>, pos: BlockPos) {
        for side in self.0.warning_sides() {
            let Some((index, block)) = ctx.block_at(side.relative(pos)) else {
                continue;
            };
            let next = match block {
                BlockId::LAVA_STILL => BlockId::AIR,
                BlockId::AIR => BlockId::LAVA_STILL,
                _ => continue,
            };
            ctx.updates.schedule(index, next, true);
        }
    }

    /// Burns one step of the fuse and keeps the check alive.
    fn burn(self, ctx: &mut PhysicsContext<'_>, pos: BlockPos, check: CheckEntry) -> RuleOutcome {
        self.toggle_warnings(ctx, pos);
        RuleOutcome::Reschedule(check.with_payload(CheckPayload::Fuse).advance())
    }

    fn match_play(
        self,
        ctx: &mut PhysicsContext<'_>,
        pos: BlockPos,
        check: CheckEntry,
        attacker: ActorId,
        params: MatchParams,
    ) -> RuleOutcome {
        if check.elapsed_ticks < params.fuse_threshold {
            return self.burn(ctx, pos, check);
        }

        let tnt = &ctx.config.tnt;
        let kill_radius = (tnt.match_kill_base_power + params.power_bonus) * 3 + 1;
        let request = ExplosionRequest::new(pos, tnt.small_power + params.power_bonus)
            .forced()
            .attributed(Attribution {
                attacker,
                cause: KillCause::Explosion,
                kill_radius,
            });
        RuleOutcome::Explode(request)
    }
}

impl PhysicsRule for TntRule {
    fn is_enabled(&self, config: &PhysicsConfig) -> bool {
        config.level.enables(PhysicsLevel::Normal)
    }

    fn evaluate(&self, ctx: &mut PhysicsContext<'_>, check: CheckEntry) -> RuleOutcome {
        let pos = ctx.dims.to_pos(check.index);

        if self.0 == TntKind::Small
            && let Some(attacker) = check.actor
            && let Some(params) = ctx.game_mode.difficulty_params(attacker)
        {
            return self.match_play(ctx, pos, check, attacker, params);
        }

        match ctx.config.level {
            PhysicsLevel::Hardcore if check.elapsed_ticks < ctx.config.tnt.fuse_ticks => {
                self.burn(ctx, pos, check)
            }
            level if level.detonates_tnt() => {
                RuleOutcome::Explode(ExplosionRequest::new(pos, self.0.power(&ctx.config.tnt)))
            }
            _ => {
                log::trace!("{:?} TNT at {pos} fizzled", self.0);
                ctx.updates.schedule(check.index, BlockId::AIR, true);
                RuleOutcome::Discard
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TestBed;

    #[test]
    fn test_kind_round_trip() {
        for kind in [TntKind::Small, TntKind::Big, TntKind::Nuke] {
            assert_eq!(TntKind::from_block(kind.block()), Some(kind));
        }
        assert_eq!(TntKind::from_block(BlockId::TNT), None);
    }

    #[test]
    fn test_powers() {
        let config = TntConfig::default();
        assert_eq!(TntKind::Small.power(&config), 0);
        assert_eq!(TntKind::Big.power(&config), 1);
        assert_eq!(TntKind::Nuke.power(&config), 4);
    }

    #[test]
    fn test_fizzles_below_hardcore() {
        let mut bed = TestBed::new(PhysicsLevel::Advanced);
        let pos = BlockPos::new(4, 4, 4);
        let index = bed.put(pos, BlockId::BIG_TNT);

        let outcome = bed.evaluate(TntRule(TntKind::Big), CheckEntry::new(index));
        assert_eq!(outcome, RuleOutcome::Discard);
        assert_eq!(bed.updates.pending_for(index), Some(BlockId::AIR));
    }

    #[test]
    fn test_instant_detonates_at_once() {
        let mut bed = TestBed::new(PhysicsLevel::Instant);
        let pos = BlockPos::new(4, 4, 4);
        let index = bed.put(pos, BlockId::NUKE_TNT);

        let outcome = bed.evaluate(TntRule(TntKind::Nuke), CheckEntry::new(index));
        assert_eq!(outcome, RuleOutcome::Explode(ExplosionRequest::new(pos, 4)));
    }

    #[test]
    fn test_hardcore_fuse_toggles_warnings() {
        let mut bed = TestBed::new(PhysicsLevel::Hardcore);
        let pos = BlockPos::new(4, 4, 4);
        let index = bed.put(pos, BlockId::BIG_TNT);
        let above = bed.put(pos.offset(0, 1, 0), BlockId::LAVA_STILL);
        let below = bed.put(pos.offset(0, -1, 0), BlockId::STONE);
        let east = bed.index(pos.offset(1, 0, 0));

        let RuleOutcome::Reschedule(next) = bed.evaluate(TntRule(TntKind::Big), CheckEntry::new(index))
        else {
            panic!("fuse should keep burning");
        };
        assert_eq!(next.elapsed_ticks, 1);
        assert_eq!(next.payload, CheckPayload::Fuse);
        assert!(next.retry);
        assert_eq!(bed.updates.pending_for(above), Some(BlockId::AIR));
        assert_eq!(bed.updates.pending_for(east), Some(BlockId::LAVA_STILL));
        assert_eq!(bed.updates.pending_for(below), None);
    }

    #[test]
    fn test_hardcore_detonates_after_fuse() {
        let mut bed = TestBed::new(PhysicsLevel::Hardcore);
        let pos = BlockPos::new(4, 4, 4);
        let index = bed.put(pos, BlockId::SMALL_TNT);

        let mut check = CheckEntry::new(index);
        for _ in 0..5 {
            check = check.advance();
        }
        let outcome = bed.evaluate(TntRule(TntKind::Small), check);
        assert_eq!(outcome, RuleOutcome::Explode(ExplosionRequest::new(pos, 0)));
    }

    #[test]
    fn test_match_play_uses_difficulty() {
        let attacker = ActorId::random();
        let params = MatchParams {
            fuse_threshold: 3,
            power_bonus: 1,
        };
        let mut bed = TestBed::new(PhysicsLevel::Normal).with_match(attacker, params, Vec::new());
        let pos = BlockPos::new(4, 4, 4);
        let index = bed.put(pos, BlockId::SMALL_TNT);
        let check = CheckEntry::new(index).with_actor(Some(attacker));

        // Burns despite the level being too low for plain TNT.
        assert!(matches!(
            bed.evaluate(TntRule(TntKind::Small), check.clone()),
            RuleOutcome::Reschedule(_)
        ));

        let done = check.advance().advance().advance();
        let expected = ExplosionRequest::new(pos, 1).forced().attributed(Attribution {
            attacker,
            cause: KillCause::Explosion,
            kill_radius: 10,
        });
        assert_eq!(
            bed.evaluate(TntRule(TntKind::Small), done),
            RuleOutcome::Explode(expected)
        );
    }

    #[test]
    fn test_match_play_is_small_only() {
        let attacker = ActorId::random();
        let params = MatchParams {
            fuse_threshold: 3,
            power_bonus: 0,
        };
        let mut bed = TestBed::new(PhysicsLevel::Normal).with_match(attacker, params, Vec::new());
        let index = bed.put(BlockPos::new(4, 4, 4), BlockId::BIG_TNT);
        let check = CheckEntry::new(index).with_actor(Some(attacker));
        assert_eq!(
            bed.evaluate(TntRule(TntKind::Big), check),
            RuleOutcome::Discard
        );
    }
}
