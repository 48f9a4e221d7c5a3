//! Explosion debris.
//!
//! Debris checks ride on whatever block a blast left in a cell. Each check the
//! block either vanishes, drops one cell into the air below, or waits.

use cinder_utils::Direction;

use crate::block::BlockId;
use crate::config::{DebrisParams, PhysicsConfig, PhysicsLevel};
use crate::ticks::{CheckEntry, TickPriority};

use super::{PhysicsContext, PhysicsRule, RuleOutcome};

/// The debris rule, carrying the odds from the check's payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebrisRule(pub DebrisParams);

impl PhysicsRule for DebrisRule {
    fn is_enabled(&self, config: &PhysicsConfig) -> bool {
        config.level.enables(PhysicsLevel::Normal)
    }

    fn evaluate(&self, ctx: &mut PhysicsContext<'_>, check: CheckEntry) -> RuleOutcome {
        let index = check.index;
        let block = ctx.store.get(index);
        if block.is_air() {
            return RuleOutcome::Discard;
        }

        let DebrisParams {
            drop_percent,
            dissipate_percent,
        } = self.0;

        if ctx.random.chance(i32::from(dissipate_percent), 100) {
            ctx.updates.schedule(index, BlockId::AIR, false);
            return RuleOutcome::Discard;
        }

        if ctx.random.chance(i32::from(drop_percent), 100) {
            let below = Direction::Down.relative(ctx.dims.to_pos(index));
            if let Some((below_index, below_block)) = ctx.block_at(below)
                && below_block.is_air()
            {
                ctx.updates.schedule(below_index, block, false);
                ctx.updates.schedule(index, BlockId::AIR, true);
                ctx.checks.schedule(
                    CheckEntry::new(below_index)
                        .with_payload(check.payload)
                        .with_actor(check.actor)
                        .with_priority(TickPriority::Low),
                );
                return RuleOutcome::Discard;
            }
        }

        RuleOutcome::Reschedule(check.advance())
    }
}
