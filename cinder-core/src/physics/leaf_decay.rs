//! Leaf decay.
//!
//! A leaf survives only while some trunk can be reached from it within
//! `radius` steps through face-adjacent leaves. Each check rebuilds the
//! distances for the cube around the leaf from scratch; nothing is kept
//! between checks.

use cinder_utils::{BlockPos, Direction};

use crate::block::BlockId;
use crate::config::{PhysicsConfig, PhysicsLevel};
use crate::ticks::CheckEntry;
use crate::world::{BlockStore, Dimensions};

use super::{PhysicsContext, PhysicsRule, RuleOutcome};

/// Mark for cells that take no part in the sweep.
const OUTSIDE: i8 = -1;
/// Mark for leaves no trunk has reached yet.
const PENDING: i8 = -2;

/// Distance marks for one sweep, one per cell of the cube around the origin.
///
/// Non-negative marks are resolved distances to the nearest trunk.
struct LeafMarks {
    radius: i32,
    side: usize,
    marks: Vec<i8>,
}

impl LeafMarks {
    fn new(radius: u8) -> Self {
        let side = 2 * usize::from(radius) + 1;
        Self {
            radius: i32::from(radius),
            side,
            marks: vec![OUTSIDE; side * side * side],
        }
    }

    /// Maps an offset from the origin to a slot, or `None` outside the cube.
    fn slot(&self, dx: i32, dy: i32, dz: i32) -> Option<usize> {
        let r = self.radius;
        if dx.abs() > r || dy.abs() > r || dz.abs() > r {
            return None;
        }
        let side = self.side;
        Some(((dy + r) as usize * side + (dz + r) as usize) * side + (dx + r) as usize)
    }

    fn get(&self, dx: i32, dy: i32, dz: i32) -> i8 {
        self.slot(dx, dy, dz).map_or(OUTSIDE, |slot| self.marks[slot])
    }
}

/// Returns `true` if the leaf at `origin` has no trunk within `radius` steps.
#[must_use]
pub fn is_disconnected(dims: Dimensions, store: &BlockStore, origin: BlockPos, radius: u8) -> bool {
    let mut marks = LeafMarks::new(radius);
    let r = marks.radius;
    let mut frontier = Vec::new();

    for dy in -r..=r {
        for dz in -r..=r {
            for dx in -r..=r {
                let pos = origin.offset(dx, dy, dz);
                let Some(index) = dims.index_of(&pos) else {
                    continue;
                };
                let mark = match store.get(index) {
                    BlockId::TRUNK => {
                        frontier.push((dx, dy, dz));
                        0
                    }
                    BlockId::LEAF => PENDING,
                    _ => continue,
                };
                if let Some(slot) = marks.slot(dx, dy, dz) {
                    marks.marks[slot] = mark;
                }
            }
        }
    }

    for distance in 1..=radius {
        if frontier.is_empty() {
            break;
        }
        let mut next = Vec::new();
        for &(x, y, z) in &frontier {
            for direction in Direction::ALL {
                let (dx, dy, dz) = direction.offset();
                let (nx, ny, nz) = (x + dx, y + dy, z + dz);
                if let Some(slot) = marks.slot(nx, ny, nz)
                    && marks.marks[slot] == PENDING
                {
                    marks.marks[slot] = i8::try_from(distance).unwrap_or(i8::MAX);
                    next.push((nx, ny, nz));
                }
            }
        }
        frontier = next;
    }

    marks.get(0, 0, 0) == PENDING
}

/// The leaf decay rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeafDecay;

impl PhysicsRule for LeafDecay {
    fn is_enabled(&self, config: &PhysicsConfig) -> bool {
        config.leaf_decay && config.level.enables(PhysicsLevel::Advanced)
    }

    fn evaluate(&self, ctx: &mut PhysicsContext<'_>, check: CheckEntry) -> RuleOutcome {
        let origin = ctx.dims.to_pos(check.index);
        if is_disconnected(ctx.dims, ctx.store, origin, ctx.config.leaf_decay_radius) {
            log::trace!("Leaf at {origin} is cut off and decays");
            RuleOutcome::Decay
        } else {
            RuleOutcome::Discard
        }
    }
}
