// Wrapper types making it harder to accidentaly use the wrong underlying type.

use std::fmt::{self, Display};

use serde::Deserialize;

use crate::math::Vector3;

/// A block position.
///
/// Positions are plain signed coordinates; whether one lies inside a world is
/// decided by that world's dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(from = "[i32; 3]")]
pub struct BlockPos(pub Vector3<i32>);

impl BlockPos {
    /// The origin.
    pub const ZERO: Self = Self::new(0, 0, 0);

    /// Creates a new block position.
    #[must_use]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self(Vector3::new(x, y, z))
    }

    /// The x coordinate.
    #[inline]
    #[must_use]
    pub const fn x(&self) -> i32 {
        self.0.x
    }

    /// The y coordinate.
    #[inline]
    #[must_use]
    pub const fn y(&self) -> i32 {
        self.0.y
    }

    /// The z coordinate.
    #[inline]
    #[must_use]
    pub const fn z(&self) -> i32 {
        self.0.z
    }

    /// Returns the position shifted by the given amounts, saturating at the
    /// ends of the `i32` range.
    #[must_use]
    pub const fn offset(&self, dx: i32, dy: i32, dz: i32) -> Self {
        Self::new(
            self.0.x.saturating_add(dx),
            self.0.y.saturating_add(dy),
            self.0.z.saturating_add(dz),
        )
    }

    /// Sum of the absolute per-axis differences, capped at `i32::MAX`.
    #[must_use]
    pub const fn manhattan_distance(&self, other: &Self) -> i32 {
        let sum = self.0.x.abs_diff(other.0.x) as u64
            + self.0.y.abs_diff(other.0.y) as u64
            + self.0.z.abs_diff(other.0.z) as u64;
        if sum > i32::MAX as u64 {
            i32::MAX
        } else {
            sum as i32
        }
    }

    /// Returns `true` if this position lies in the inclusive box `[min, max]`.
    #[must_use]
    pub const fn is_within(&self, min: &Self, max: &Self) -> bool {
        self.0.x >= min.0.x
            && self.0.x <= max.0.x
            && self.0.y >= min.0.y
            && self.0.y <= max.0.y
            && self.0.z >= min.0.z
            && self.0.z <= max.0.z
    }
}

impl From<[i32; 3]> for BlockPos {
    fn from(value: [i32; 3]) -> Self {
        Self(Vector3::from(value))
    }
}

impl Display for BlockPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.0.x, self.0.y, self.0.z)
    }
}
