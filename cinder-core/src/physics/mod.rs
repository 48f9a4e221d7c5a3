//! The rule set: per-block physics evaluated when a check fires.
//!
//! A check is dispatched on the block its cell holds when the check runs
//! (debris checks are the exception and dispatch on their payload). The
//! selected rule reads the world through a [`PhysicsContext`], may schedule
//! updates and checks for the next tick, and tells the tick driver what to do
//! with the check itself through a [`RuleOutcome`].

use enum_dispatch::enum_dispatch;

use crate::block::BlockId;
use crate::config::PhysicsConfig;
use crate::explosion::ExplosionRequest;
use crate::ticks::{CheckEntry, CheckPayload};

mod context;
mod debris;
mod hazard;
pub mod leaf_decay;
mod liquid;
mod tnt;

pub use context::PhysicsContext;
pub use debris::DebrisRule;
pub use hazard::HazardFade;
pub use leaf_decay::LeafDecay;
pub use liquid::{LiquidKind, LiquidRule};
pub use tnt::{TntKind, TntRule};

/// What the tick driver does with a check after its rule ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleOutcome {
    /// The check is finished.
    Discard,
    /// Evaluate this (already advanced) check again next tick.
    Reschedule(CheckEntry),
    /// Turn the cell into air next tick.
    Decay,
    /// Resolve an explosion now. The check is finished.
    Explode(ExplosionRequest),
}

/// A physics rule.
#[enum_dispatch]
pub trait PhysicsRule {
    /// Returns `true` if the rule runs under `config`.
    fn is_enabled(&self, config: &PhysicsConfig) -> bool;

    /// Evaluates one check.
    fn evaluate(&self, ctx: &mut PhysicsContext<'_>, check: CheckEntry) -> RuleOutcome;
}

/// Every rule the engine knows.
#[enum_dispatch(PhysicsRule)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Leaves decay when cut off from trunks.
    LeafDecay(LeafDecay),
    /// TNT fuses and detonations.
    Tnt(TntRule),
    /// Active liquids spread.
    Liquid(LiquidRule),
    /// Blast debris drops and dissipates.
    Debris(DebrisRule),
    /// Blast markers fade.
    Hazard(HazardFade),
}

impl Rule {
    /// Selects the rule for a check on a cell holding `block`.
    ///
    /// Returns `None` when no rule applies; such checks are discarded.
    #[must_use]
    pub fn select(block: BlockId, payload: &CheckPayload) -> Option<Self> {
        if let CheckPayload::Debris(params) = payload {
            return Some(Self::Debris(DebrisRule(*params)));
        }
        match block {
            BlockId::LEAF => Some(Self::LeafDecay(LeafDecay)),
            BlockId::WATER => Some(Self::Liquid(LiquidRule(LiquidKind::Water))),
            BlockId::LAVA => Some(Self::Liquid(LiquidRule(LiquidKind::Lava))),
            BlockId::TNT_EXPLOSION => Some(Self::Hazard(HazardFade)),
            _ => TntKind::from_block(block).map(|kind| Self::Tnt(TntRule(kind))),
        }
    }

    /// Returns `true` if placing `block` should schedule a check for it.
    #[must_use]
    pub fn reacts_to(block: BlockId) -> bool {
        Self::select(block, &CheckPayload::None).is_some()
    }
}
