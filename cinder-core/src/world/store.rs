//! Dense block storage of one world.

use crate::block::BlockId;
use crate::error::WorldError;
use crate::world::Dimensions;

/// The current block of every cell, addressed by [`Dimensions`] indices.
pub struct BlockStore {
    blocks: Box<[BlockId]>,
}

impl BlockStore {
    /// Creates a store of `dims.volume()` air cells.
    #[must_use]
    pub fn new(dims: Dimensions) -> Self {
        Self {
            blocks: vec![BlockId::AIR; dims.volume()].into_boxed_slice(),
        }
    }

    /// Wraps an existing block buffer, checking its length against `dims`.
    pub fn from_blocks(dims: Dimensions, blocks: Vec<BlockId>) -> Result<Self, WorldError> {
        if blocks.len() != dims.volume() {
            return Err(WorldError::BlockCountMismatch {
                expected: dims.volume(),
                actual: blocks.len(),
            });
        }
        Ok(Self {
            blocks: blocks.into_boxed_slice(),
        })
    }

    /// Returns the block at `index`.
    ///
    /// # Panics
    /// Panics if `index` is outside the store. Indices come from
    /// [`Dimensions::to_index`], which never produces one.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> BlockId {
        self.blocks[index]
    }

    /// Returns the block at `index`, or `None` outside the store.
    #[inline]
    #[must_use]
    pub fn try_get(&self, index: usize) -> Option<BlockId> {
        self.blocks.get(index).copied()
    }

    /// Writes `block` at `index` and returns the previous block.
    #[inline]
    pub fn set(&mut self, index: usize, block: BlockId) -> BlockId {
        std::mem::replace(&mut self.blocks[index], block)
    }

    /// Number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Returns `true` for a store without cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Read-only view of every cell, e.g. for persistence.
    #[must_use]
    pub fn as_slice(&self) -> &[BlockId] {
        &self.blocks
    }
}
