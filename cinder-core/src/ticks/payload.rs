//! Rule-specific state carried by a check.

use crate::config::DebrisParams;

/// State a check carries between evaluations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CheckPayload {
    /// Plain re-evaluation, dispatched on the cell's current block.
    #[default]
    None,
    /// A TNT fuse that has started burning.
    Fuse,
    /// Explosion debris that may drop or dissipate. Dispatched to the debris
    /// rule whatever block the cell holds.
    Debris(DebrisParams),
}
