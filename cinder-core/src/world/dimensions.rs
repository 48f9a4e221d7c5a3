//! Mapping between block positions and flat store indices.

use cinder_utils::BlockPos;

use crate::error::WorldError;

/// The size of a world and the bijection between its positions and indices.
///
/// Indices are laid out as `(y * length + z) * width + x`, so horizontal
/// layers are contiguous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    width: u16,
    height: u16,
    length: u16,
}

impl Dimensions {
    /// Creates dimensions, rejecting empty worlds.
    pub const fn new(width: u16, height: u16, length: u16) -> Result<Self, WorldError> {
        if width == 0 || height == 0 || length == 0 {
            return Err(WorldError::InvalidDimensions {
                width,
                height,
                length,
            });
        }
        Ok(Self {
            width,
            height,
            length,
        })
    }

    /// Extent along x.
    #[must_use]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Extent along y.
    #[must_use]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Extent along z.
    #[must_use]
    pub const fn length(&self) -> u16 {
        self.length
    }

    /// Number of cells.
    #[must_use]
    pub const fn volume(&self) -> usize {
        self.width as usize * self.height as usize * self.length as usize
    }

    /// Maps a coordinate to its index, or `None` when it lies outside.
    #[inline]
    #[must_use]
    pub const fn to_index(&self, x: i32, y: i32, z: i32) -> Option<usize> {
        if x < 0
            || y < 0
            || z < 0
            || x >= self.width as i32
            || y >= self.height as i32
            || z >= self.length as i32
        {
            return None;
        }
        Some((y as usize * self.length as usize + z as usize) * self.width as usize + x as usize)
    }

    /// Maps a position to its index, or `None` when it lies outside.
    #[inline]
    #[must_use]
    pub const fn index_of(&self, pos: &BlockPos) -> Option<usize> {
        self.to_index(pos.x(), pos.y(), pos.z())
    }

    /// Maps a valid index back to its position.
    ///
    /// Callers must only pass indices produced by [`Self::to_index`].
    #[inline]
    #[must_use]
    pub const fn to_pos(&self, index: usize) -> BlockPos {
        debug_assert!(index < self.volume());
        let width = self.width as usize;
        let length = self.length as usize;
        let x = index % width;
        let z = (index / width) % length;
        let y = index / width / length;
        BlockPos::new(x as i32, y as i32, z as i32)
    }

    /// Returns `true` if the index addresses a cell of this world.
    #[inline]
    #[must_use]
    pub const fn contains_index(&self, index: usize) -> bool {
        index < self.volume()
    }
}
