//! Fan-out of block changes to observers.

use std::sync::Arc;

use cinder_core::block::BlockId;
use cinder_core::world::WorldHost;
use cinder_utils::BlockPos;
use tokio::sync::broadcast;

/// One stored block change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockChange {
    /// The world it happened in.
    pub world: Arc<str>,
    /// The changed cell.
    pub pos: BlockPos,
    /// The block it holds now.
    pub block: BlockId,
}

/// A [`WorldHost`] that publishes every change on a broadcast channel.
///
/// Sessions subscribe to receive changes. A subscriber that falls more than
/// the channel capacity behind skips the oldest changes.
#[derive(Debug)]
pub struct ChangeBroadcaster {
    sender: broadcast::Sender<BlockChange>,
}

impl ChangeBroadcaster {
    /// Creates a broadcaster buffering up to `capacity` changes per subscriber.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Starts receiving changes.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<BlockChange> {
        self.sender.subscribe()
    }

    /// Number of live subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl WorldHost for ChangeBroadcaster {
    fn broadcast_change(&self, world: &str, pos: BlockPos, block: BlockId) {
        // Sending only fails when nobody listens.
        let _ = self.sender.send(BlockChange {
            world: Arc::from(world),
            pos,
            block,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscribers_receive_changes() {
        let broadcaster = ChangeBroadcaster::new(16);
        let mut receiver = broadcaster.subscribe();
        assert_eq!(broadcaster.subscriber_count(), 1);

        let pos = BlockPos::new(1, 2, 3);
        broadcaster.broadcast_change("main", pos, BlockId::GLASS);
        let change = receiver.try_recv().expect("change should be queued");
        assert_eq!(&*change.world, "main");
        assert_eq!(change.pos, pos);
        assert_eq!(change.block, BlockId::GLASS);
    }

    #[test]
    fn test_no_subscribers_is_fine() {
        let broadcaster = ChangeBroadcaster::new(4);
        broadcaster.broadcast_change("main", BlockPos::ZERO, BlockId::STONE);
        assert_eq!(broadcaster.subscriber_count(), 0);
    }
}
