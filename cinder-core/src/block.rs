//! Block identifiers and the physics-relevant properties of each block.

use std::fmt::{self, Display};

use bitflags::bitflags;

/// A raw block id. Every cell of a world stores exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct BlockId(pub u8);

impl BlockId {
    /// Empty space.
    pub const AIR: Self = Self(0);
    /// Stone.
    pub const STONE: Self = Self(1);
    /// Grass.
    pub const GRASS: Self = Self(2);
    /// Dirt.
    pub const DIRT: Self = Self(3);
    /// Cobblestone.
    pub const COBBLESTONE: Self = Self(4);
    /// Active water, spreads.
    pub const WATER: Self = Self(8);
    /// Still water.
    pub const WATER_STILL: Self = Self(9);
    /// Active lava, spreads.
    pub const LAVA: Self = Self(10);
    /// Still lava. Doubles as the fuse warning marker.
    pub const LAVA_STILL: Self = Self(11);
    /// Sand.
    pub const SAND: Self = Self(12);
    /// Gravel.
    pub const GRAVEL: Self = Self(13);
    /// Tree trunk; anchors leaves.
    pub const TRUNK: Self = Self(17);
    /// Leaves; decay when cut off from a trunk.
    pub const LEAF: Self = Self(18);
    /// Glass.
    pub const GLASS: Self = Self(20);
    /// Inert TNT casing.
    pub const TNT: Self = Self(46);
    /// Obsidian.
    pub const OBSIDIAN: Self = Self(49);
    /// Primed TNT with a short fuse and a small blast.
    pub const SMALL_TNT: Self = Self(182);
    /// Primed TNT with a larger blast.
    pub const BIG_TNT: Self = Self(183);
    /// Blast hazard marker left behind by explosions.
    pub const TNT_EXPLOSION: Self = Self(184);
    /// Primed TNT with a very large blast.
    pub const NUKE_TNT: Self = Self(186);

    /// Returns the physics properties of this block.
    #[must_use]
    pub const fn props(self) -> BlockProps {
        match self {
            Self::AIR => BlockProps::empty(),
            Self::TNT => BlockProps::EXPLOSIVE,
            Self::SMALL_TNT | Self::BIG_TNT | Self::NUKE_TNT => {
                BlockProps::EXPLOSIVE.union(BlockProps::PRIMED)
            }
            Self::TRUNK => BlockProps::SOLID.union(BlockProps::LEAF_ANCHOR),
            Self::LEAF => BlockProps::SOLID.union(BlockProps::DECAYS),
            Self::WATER | Self::LAVA => BlockProps::LIQUID.union(BlockProps::ACTIVE_LIQUID),
            Self::WATER_STILL | Self::LAVA_STILL => BlockProps::LIQUID,
            Self::TNT_EXPLOSION => BlockProps::HAZARD,
            _ => BlockProps::SOLID,
        }
    }

    /// Returns `true` for empty space.
    #[inline]
    #[must_use]
    pub const fn is_air(self) -> bool {
        self.0 == Self::AIR.0
    }

    /// Returns `true` for any TNT, primed or not.
    #[inline]
    #[must_use]
    pub const fn is_explosive(self) -> bool {
        self.props().contains(BlockProps::EXPLOSIVE)
    }

    /// Returns `true` for TNT that carries a live fuse.
    #[inline]
    #[must_use]
    pub const fn is_primed(self) -> bool {
        self.props().contains(BlockProps::PRIMED)
    }

    /// Returns `true` for still or active water.
    #[inline]
    #[must_use]
    pub const fn is_water(self) -> bool {
        matches!(self, Self::WATER | Self::WATER_STILL)
    }
}

impl Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

bitflags! {
    /// Physics properties of a block.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct BlockProps: u8 {
        /// Occupies its cell.
        const SOLID = 1;
        /// TNT of any kind. Blasts prime or re-trigger these instead of destroying them.
        const EXPLOSIVE = 1 << 1;
        /// TNT with a fuse that is evaluated by the tick driver.
        const PRIMED = 1 << 2;
        /// Keeps nearby leaves alive.
        const LEAF_ANCHOR = 1 << 3;
        /// Decays when no anchor is in reach.
        const DECAYS = 1 << 4;
        /// Any liquid.
        const LIQUID = 1 << 5;
        /// Liquid that keeps spreading.
        const ACTIVE_LIQUID = 1 << 6;
        /// Transient blast marker.
        const HAZARD = 1 << 7;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explosive_variants() {
        assert!(BlockId::TNT.is_explosive());
        assert!(!BlockId::TNT.is_primed());
        for primed in [BlockId::SMALL_TNT, BlockId::BIG_TNT, BlockId::NUKE_TNT] {
            assert!(primed.is_explosive());
            assert!(primed.is_primed());
        }
        assert!(!BlockId::STONE.is_explosive());
        assert!(!BlockId::TNT_EXPLOSION.is_explosive());
    }

    #[test]
    fn test_air_has_no_props() {
        assert!(BlockId::AIR.is_air());
        assert!(BlockId::AIR.props().is_empty());
        assert!(BlockId::GLASS.props().contains(BlockProps::SOLID));
    }

    #[test]
    fn test_liquids() {
        assert!(BlockId::WATER.props().contains(BlockProps::ACTIVE_LIQUID));
        assert!(!BlockId::LAVA_STILL.props().contains(BlockProps::ACTIVE_LIQUID));
        assert!(BlockId::WATER_STILL.is_water());
        assert!(!BlockId::LAVA.is_water());
    }
}
