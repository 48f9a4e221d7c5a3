//! Starting terrain for freshly created worlds.

use cinder_core::block::BlockId;
use cinder_core::world::Dimensions;
use cinder_utils::BlockPos;

/// Height of the trunk planted by [`flat`].
const TRUNK_HEIGHT: i32 = 5;
/// Horizontal reach of its canopy.
const CANOPY_RADIUS: i32 = 2;

/// Builds a flat world: stone, three layers of dirt, and grass at
/// `ground_level - 1`. With `tree` set, a tree stands in the middle.
#[must_use]
pub fn flat(dims: Dimensions, ground_level: u16, tree: bool) -> Vec<BlockId> {
    let mut blocks = vec![BlockId::AIR; dims.volume()];
    let ground = i32::from(ground_level);

    for y in 0..ground {
        let block = match ground - 1 - y {
            0 => BlockId::GRASS,
            1..=3 => BlockId::DIRT,
            _ => BlockId::STONE,
        };
        for z in 0..i32::from(dims.length()) {
            for x in 0..i32::from(dims.width()) {
                if let Some(index) = dims.to_index(x, y, z) {
                    blocks[index] = block;
                }
            }
        }
    }

    if tree {
        let base = BlockPos::new(
            i32::from(dims.width()) / 2,
            ground,
            i32::from(dims.length()) / 2,
        );
        plant_tree(dims, &mut blocks, base);
    }
    blocks
}

/// Places a trunk at `base` with a rounded box of leaves around its top. Parts
/// outside the world are cut off.
fn plant_tree(dims: Dimensions, blocks: &mut [BlockId], base: BlockPos) {
    let top = base.y() + TRUNK_HEIGHT - 1;
    for dy in -1..=1 {
        for dz in -CANOPY_RADIUS..=CANOPY_RADIUS {
            for dx in -CANOPY_RADIUS..=CANOPY_RADIUS {
                // Corners would sit out of reach of the trunk.
                if dx.abs() == CANOPY_RADIUS && dz.abs() == CANOPY_RADIUS {
                    continue;
                }
                let pos = BlockPos::new(base.x() + dx, top + dy, base.z() + dz);
                if let Some(index) = dims.index_of(&pos) {
                    blocks[index] = BlockId::LEAF;
                }
            }
        }
    }
    for dy in 0..TRUNK_HEIGHT {
        if let Some(index) = dims.index_of(&base.offset(0, dy, 0)) {
            blocks[index] = BlockId::TRUNK;
        }
    }
}

#[cfg(test)]
mod tests {
    use cinder_core::config::{PhysicsConfig, PhysicsLevel};
    use cinder_core::physics::leaf_decay;
    use cinder_core::world::BlockStore;

    use super::*;

    fn at(dims: Dimensions, blocks: &[BlockId], x: i32, y: i32, z: i32) -> BlockId {
        blocks[dims.to_index(x, y, z).expect("in bounds")]
    }

    #[test]
    fn test_flat_layers() {
        let dims = Dimensions::new(8, 16, 8).expect("valid dimensions");
        let blocks = flat(dims, 8, false);
        assert_eq!(at(dims, &blocks, 3, 7, 3), BlockId::GRASS);
        assert_eq!(at(dims, &blocks, 3, 6, 3), BlockId::DIRT);
        assert_eq!(at(dims, &blocks, 3, 4, 3), BlockId::DIRT);
        assert_eq!(at(dims, &blocks, 3, 3, 3), BlockId::STONE);
        assert_eq!(at(dims, &blocks, 3, 8, 3), BlockId::AIR);
    }

    #[test]
    fn test_tree_leaves_are_connected() {
        let dims = Dimensions::new(16, 16, 16).expect("valid dimensions");
        let blocks = flat(dims, 4, true);
        assert_eq!(at(dims, &blocks, 8, 4, 8), BlockId::TRUNK);
        assert_eq!(at(dims, &blocks, 8, 8, 8), BlockId::TRUNK);

        let radius = PhysicsConfig::with_level(PhysicsLevel::Advanced).leaf_decay_radius;
        let store = BlockStore::from_blocks(dims, blocks.clone()).expect("block count matches");
        for (index, block) in blocks.iter().enumerate() {
            if *block == BlockId::LEAF {
                let pos = dims.to_pos(index);
                assert!(
                    !leaf_decay::is_disconnected(dims, &store, pos, radius),
                    "leaf at {pos} would decay"
                );
            }
        }
    }

    #[test]
    fn test_tree_at_the_top_is_clipped() {
        let dims = Dimensions::new(8, 6, 8).expect("valid dimensions");
        let blocks = flat(dims, 4, true);
        assert_eq!(blocks.len(), dims.volume());
        assert_eq!(at(dims, &blocks, 4, 5, 4), BlockId::TRUNK);
    }
}
