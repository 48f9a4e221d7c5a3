//! Blast markers fade back to air.

use crate::config::PhysicsConfig;
use crate::ticks::CheckEntry;

use super::{PhysicsContext, PhysicsRule, RuleOutcome};

/// Clears [`crate::block::BlockId::TNT_EXPLOSION`] cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HazardFade;

impl PhysicsRule for HazardFade {
    fn is_enabled(&self, _config: &PhysicsConfig) -> bool {
        true
    }

    fn evaluate(&self, ctx: &mut PhysicsContext<'_>, check: CheckEntry) -> RuleOutcome {
        let fade = i32::from(ctx.config.explosion.hazard_fade_in_ten);
        if ctx.random.chance(fade, 10) {
            RuleOutcome::Decay
        } else {
            RuleOutcome::Reschedule(check.advance())
        }
    }
}
