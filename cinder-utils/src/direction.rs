//! The six axis-aligned directions between adjacent blocks.

use crate::types::BlockPos;

/// One of the six face-adjacent neighbor directions.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Downward (-Y).
    Down = 0,
    /// Upward (+Y).
    Up = 1,
    /// North (-Z).
    North = 2,
    /// South (+Z).
    South = 3,
    /// West (-X).
    West = 4,
    /// East (+X).
    East = 5,
}

impl Direction {
    /// All six directions in array form for iteration.
    pub const ALL: [Direction; 6] = [
        Direction::Down,
        Direction::Up,
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
    ];

    /// Every direction except [`Direction::Up`]; the directions a liquid flows in.
    pub const FLOW: [Direction; 5] = [
        Direction::Down,
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
    ];

    /// Returns the opposite direction.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Down => Self::Up,
            Self::Up => Self::Down,
            Self::North => Self::South,
            Self::South => Self::North,
            Self::West => Self::East,
            Self::East => Self::West,
        }
    }

    /// Gets the offset in the given direction as (dx, dy, dz).
    #[must_use]
    pub const fn offset(self) -> (i32, i32, i32) {
        match self {
            Self::Down => (0, -1, 0),
            Self::Up => (0, 1, 0),
            Self::North => (0, 0, -1),
            Self::South => (0, 0, 1),
            Self::West => (-1, 0, 0),
            Self::East => (1, 0, 0),
        }
    }

    /// Returns the neighbor of `pos` in this direction.
    #[must_use]
    pub const fn relative(self, pos: BlockPos) -> BlockPos {
        let (dx, dy, dz) = self.offset();
        pos.offset(dx, dy, dz)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite() {
        for direction in Direction::ALL {
            assert_eq!(direction.opposite().opposite(), direction);
            let (dx, dy, dz) = direction.offset();
            assert_eq!(direction.opposite().offset(), (-dx, -dy, -dz));
        }
    }

    #[test]
    fn test_flow_excludes_up() {
        assert!(!Direction::FLOW.contains(&Direction::Up));
        assert_eq!(Direction::FLOW.len(), 5);
    }

    #[test]
    fn test_relative() {
        let pos = BlockPos::new(3, 3, 3);
        assert_eq!(Direction::Down.relative(pos), BlockPos::new(3, 2, 3));
        assert_eq!(Direction::East.relative(pos), BlockPos::new(4, 3, 3));
        assert_eq!(Direction::North.relative(pos), BlockPos::new(3, 3, 2));
    }
}
