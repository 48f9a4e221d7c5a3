//! Active liquids.
//!
//! After a short delay an active liquid flows into empty cells below and
//! beside it. The new cells are active too, so the spread continues through
//! the write path's reaction checks until nothing is left to fill.

use cinder_utils::Direction;

use crate::block::BlockId;
use crate::config::{LiquidConfig, PhysicsConfig, PhysicsLevel};
use crate::ticks::CheckEntry;

use super::{PhysicsContext, PhysicsRule, RuleOutcome};

/// The spreading liquids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiquidKind {
    /// [`BlockId::WATER`].
    Water,
    /// [`BlockId::LAVA`].
    Lava,
}

impl LiquidKind {
    /// The block this liquid spreads as.
    #[must_use]
    pub const fn block(self) -> BlockId {
        match self {
            Self::Water => BlockId::WATER,
            Self::Lava => BlockId::LAVA,
        }
    }

    /// Checks to wait before spreading.
    #[must_use]
    pub const fn delay(self, config: &LiquidConfig) -> u32 {
        match self {
            Self::Water => config.water_delay,
            Self::Lava => config.lava_delay,
        }
    }
}

/// The spread rule for one liquid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiquidRule(pub LiquidKind);

impl PhysicsRule for LiquidRule {
    fn is_enabled(&self, config: &PhysicsConfig) -> bool {
        config.level.enables(PhysicsLevel::Normal)
    }

    fn evaluate(&self, ctx: &mut PhysicsContext<'_>, check: CheckEntry) -> RuleOutcome {
        if check.elapsed_ticks < self.0.delay(&ctx.config.liquid) {
            return RuleOutcome::Reschedule(check.advance());
        }

        let pos = ctx.dims.to_pos(check.index);
        for direction in Direction::FLOW {
            let Some((index, block)) = ctx.block_at(direction.relative(pos)) else {
                continue;
            };
            if block.is_air() {
                ctx.updates.schedule(index, self.0.block(), false);
            } else if self.0 == LiquidKind::Lava && block.is_water() {
                ctx.updates.schedule(index, BlockId::STONE, false);
            }
        }
        RuleOutcome::Discard
    }
}
