//! Explosion resolution.
//!
//! A blast flashes its center and sweeps three nested cubes around it. The
//! innermost shell (radius `power + 1`) destroys with the highest chance and
//! each further shell with a lower one. A cell inside several shells gets one
//! roll per shell it belongs to and is destroyed by the first success.
//!
//! Explosives are never destroyed: inert TNT is primed and primed TNT is
//! re-checked, which is how chain reactions spread. Every change is scheduled
//! for the next tick; the store is not touched here.

use std::ops::RangeInclusive;

use cinder_utils::BlockPos;

use crate::block::BlockId;
use crate::game_mode::{ActorId, KillCause};
use crate::physics::PhysicsContext;
use crate::ticks::{CheckEntry, CheckPayload, TickPriority};

/// Match context of a detonation, used to credit kills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attribution {
    /// Who set off the blast.
    pub attacker: ActorId,
    /// Reported with each kill.
    pub cause: KillCause,
    /// Participants closer than this (Manhattan distance) are killed.
    pub kill_radius: i32,
}

/// A blast to resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplosionRequest {
    /// Epicenter.
    pub center: BlockPos,
    /// Blast power; the shells reach `power + 1` to `power + 3`.
    pub power: i32,
    /// Resolve even if the world's physics level does not allow explosions.
    pub forced: bool,
    /// Match context, if any.
    pub attribution: Option<Attribution>,
}

impl ExplosionRequest {
    /// Creates an unforced, unattributed request.
    #[must_use]
    pub const fn new(center: BlockPos, power: i32) -> Self {
        Self {
            center,
            power,
            forced: false,
            attribution: None,
        }
    }

    /// Marks the request as forced.
    #[must_use]
    pub const fn forced(mut self) -> Self {
        self.forced = true;
        self
    }

    /// Attaches a match context.
    #[must_use]
    pub const fn attributed(mut self, attribution: Attribution) -> Self {
        self.attribution = Some(attribution);
        self
    }

    fn actor(&self) -> Option<ActorId> {
        self.attribution.map(|attribution| attribution.attacker)
    }
}

/// What an explosion did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExplosionSummary {
    /// Cells scheduled to become a blast marker, air or debris.
    pub destroyed: usize,
    /// Inert TNT scheduled to be primed.
    pub primed: usize,
    /// Primed TNT whose check was re-enqueued.
    pub retriggered: usize,
    /// Cells spared because the game mode protects them, air included.
    pub protected: usize,
    /// Kills reported to the game mode.
    pub kills: usize,
    /// The physics level did not allow the blast; nothing happened.
    pub skipped: bool,
}

/// Resolves `request` against the world in `ctx`.
pub fn resolve(ctx: &mut PhysicsContext<'_>, request: &ExplosionRequest) -> ExplosionSummary {
    let mut summary = ExplosionSummary::default();
    if !request.forced && !ctx.config.level.allows_explosions() {
        log::debug!(
            "Skipped explosion at {} in {}, physics level {:?}",
            request.center,
            ctx.world,
            ctx.config.level
        );
        summary.skipped = true;
        return summary;
    }

    let center = request.center;
    if let Some(index) = ctx.dims.index_of(&center) {
        ctx.updates.schedule(index, BlockId::TNT_EXPLOSION, true);
    }

    let shells = ctx.config.explosion.shell_chances;
    let inner = i64::from(request.power.max(0)) + 1;
    let outer = inner + 2;
    let (cx, cy, cz) = (
        i64::from(center.x()),
        i64::from(center.y()),
        i64::from(center.z()),
    );
    let xs = clip(cx, outer, ctx.dims.width());
    let ys = clip(cy, outer, ctx.dims.height());
    let zs = clip(cz, outer, ctx.dims.length());

    for y in ys {
        for z in zs.clone() {
            for x in xs.clone() {
                if (x, y, z) == (cx, cy, cz) {
                    continue;
                }
                let pos = BlockPos::new(x as i32, y as i32, z as i32);
                let Some((index, block)) = ctx.block_at(pos) else {
                    continue;
                };
                if ctx.game_mode.is_protected_zone(ctx.world, pos, false) {
                    summary.protected += 1;
                    continue;
                }

                if block == BlockId::TNT {
                    if ctx.updates.schedule(index, BlockId::SMALL_TNT, false) {
                        ctx.checks.schedule(chain_check(index, request));
                        summary.primed += 1;
                    }
                    continue;
                }
                if block.is_primed() {
                    if ctx.checks.schedule(chain_check(index, request)) {
                        summary.retriggered += 1;
                    }
                    continue;
                }

                let distance = (x - cx).abs().max((y - cy).abs()).max((z - cz).abs());
                if roll_shells(ctx, &shells, distance - inner) && destroy(ctx, index, request) {
                    summary.destroyed += 1;
                }
            }
        }
    }

    if let Some(attribution) = request.attribution {
        summary.kills = attribute_kills(ctx, center, attribution);
    }

    log::debug!(
        "Explosion at {center} in {} (power {}): {summary:?}",
        ctx.world,
        request.power
    );
    summary
}

/// A check for an explosive caught in the blast. Chain reactions run ahead
/// of ordinary checks.
fn chain_check(index: usize, request: &ExplosionRequest) -> CheckEntry {
    CheckEntry::new(index)
        .with_actor(request.actor())
        .with_priority(TickPriority::High)
}

/// The part of `center - reach..=center + reach` that lies in `0..size`.
fn clip(center: i64, reach: i64, size: u16) -> RangeInclusive<i64> {
    (center - reach).max(0)..=(center + reach).min(i64::from(size) - 1)
}

/// Rolls every shell that contains a cell `first` shells out from the
/// innermost one, stopping at the first success.
fn roll_shells(ctx: &mut PhysicsContext<'_>, shells: &[u8; 3], first: i64) -> bool {
    let first = usize::try_from(first).unwrap_or(0);
    shells
        .iter()
        .skip(first)
        .any(|&chance| ctx.random.chance(i32::from(chance), 10))
}

/// Picks what a destroyed cell becomes and schedules it.
fn destroy(ctx: &mut PhysicsContext<'_>, index: usize, request: &ExplosionRequest) -> bool {
    let explosion = &ctx.config.explosion;
    let (hazard, air, debris) = (explosion.hazard_in_ten, explosion.air_in_ten, explosion.debris);

    if ctx.random.chance(i32::from(hazard), 10) {
        ctx.updates.schedule(index, BlockId::TNT_EXPLOSION, false)
    } else if ctx.random.chance(i32::from(air), 10) {
        ctx.updates.schedule(index, BlockId::AIR, false)
    } else {
        ctx.checks.schedule(
            CheckEntry::new(index)
                .with_payload(CheckPayload::Debris(debris))
                .with_actor(request.actor())
                .with_priority(TickPriority::Low),
        )
    }
}

fn attribute_kills(ctx: &PhysicsContext<'_>, center: BlockPos, attribution: Attribution) -> usize {
    let Attribution {
        attacker,
        cause,
        kill_radius,
    } = attribution;

    let mut kills = 0;
    for participant in ctx.game_mode.participants(ctx.world, attacker) {
        if participant.actor == attacker || participant.pos.manhattan_distance(&center) >= kill_radius {
            continue;
        }
        log::debug!("{attacker} killed {} with {cause:?}", participant.actor);
        ctx.game_mode.report_kill(participant.actor, cause, attacker);
        kills += 1;
    }
    kills
}
