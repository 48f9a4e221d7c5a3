//! The surface through which the engine reaches its host server.

use cinder_utils::BlockPos;

use crate::block::BlockId;
use crate::game_mode::ActorId;

/// Permission checks and change notification provided by the host.
///
/// Every write the engine performs, whether an external edit or a simulation
/// update, asks [`WorldHost::allow_change`] first and announces itself with
/// [`WorldHost::broadcast_change`] once stored. Both calls must not block.
pub trait WorldHost: Send + Sync {
    /// Returns `false` to reject a write. `actor` is `None` for simulation writes.
    fn allow_change(
        &self,
        _world: &str,
        _pos: BlockPos,
        _old: BlockId,
        _new: BlockId,
        _actor: Option<ActorId>,
    ) -> bool {
        true
    }

    /// Notifies observers that `pos` now holds `block`.
    fn broadcast_change(&self, world: &str, pos: BlockPos, block: BlockId);
}

/// A host that allows everything and tells nobody.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullHost;

impl WorldHost for NullHost {
    fn broadcast_change(&self, _world: &str, _pos: BlockPos, _block: BlockId) {}
}
