//! # Cinder
//!
//! The host for Cinder worlds: loads the config, builds every world, and
//! ticks each one on its own task until shutdown.
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    missing_docs,
    clippy::unwrap_used
)]
#![allow(
    clippy::single_call_fn,
    clippy::multiple_inherent_impl,
    clippy::shadow_unrelated,
    clippy::missing_errors_doc,
    clippy::struct_excessive_bools,
    clippy::needless_pass_by_value,
    clippy::cargo_common_metadata
)]
use std::{sync::Arc, time::Duration};

use cinder_core::error::WorldError;
use cinder_core::world::World;
use scc::HashMap;
use tokio::{select, time::MissedTickBehavior};
use tokio_util::{sync::CancellationToken, task::TaskTracker};

use crate::arena::Arena;
use crate::broadcast::ChangeBroadcaster;
use crate::config::ServerConfig;
use crate::world_handle::WorldHandle;

pub mod arena;
pub mod broadcast;
pub mod config;
pub mod logger;
pub mod terrain;
pub mod world_handle;

/// Changes a lagging subscriber may fall behind by before it skips some.
const BROADCAST_CAPACITY: usize = 4096;

/// The main server struct.
pub struct CinderServer {
    /// The cancellation token for graceful shutdown.
    pub cancel_token: CancellationToken,
    /// Every world, by name.
    pub worlds: HashMap<String, WorldHandle>,
    /// Publishes block changes of every world.
    pub broadcaster: Arc<ChangeBroadcaster>,
    /// Safe zones and match state.
    pub arena: Arc<Arena>,
    config: ServerConfig,
    tasks: TaskTracker,
}

impl CinderServer {
    /// Builds every configured world. The config must already be validated.
    pub fn new(config: ServerConfig) -> Result<Self, WorldError> {
        let seed = config.seed.unwrap_or_else(rand::random);
        tracing::info!(seed, worlds = config.worlds.len(), "Starting Cinder");

        let broadcaster = Arc::new(ChangeBroadcaster::new(BROADCAST_CAPACITY));
        let arena = Arc::new(Arena::new(config.safe_zones.clone()));
        let worlds = HashMap::new();

        for (i, world_config) in config.worlds.iter().enumerate() {
            let dims = world_config.dimensions()?;
            let blocks = terrain::flat(dims, world_config.ground_level(), world_config.tree);
            let world = World::from_blocks(
                world_config.name.clone(),
                dims,
                blocks,
                world_config.physics.clone(),
            )?
            .with_host(broadcaster.clone())
            .with_game_mode(arena.clone())
            .with_seed(seed.wrapping_add(i as u64));

            tracing::info!(
                world = %world_config.name,
                width = dims.width(),
                height = dims.height(),
                length = dims.length(),
                level = ?world_config.physics.level,
                "Created world"
            );
            let _ = worlds.insert_sync(world_config.name.clone(), WorldHandle::new(world));
        }

        Ok(Self {
            cancel_token: CancellationToken::new(),
            worlds,
            broadcaster,
            arena,
            config,
            tasks: TaskTracker::new(),
        })
    }

    /// Returns the handle of the world called `name`.
    #[must_use]
    pub fn world(&self, name: &str) -> Option<WorldHandle> {
        self.worlds.read_sync(name, |_, handle| handle.clone())
    }

    /// Starts a tick task for every world.
    pub fn start(&self) {
        let period = Duration::from_millis(self.config.tick_interval_ms);
        let warn_threshold = self.config.queue_warn_threshold;

        self.worlds.iter_sync(|_, handle| {
            self.tasks.spawn(tick_world(
                handle.clone(),
                period,
                warn_threshold,
                self.cancel_token.child_token(),
            ));
            true
        });
        tracing::info!("Started Cinder");
    }

    /// Stops every tick task.
    pub fn stop(&self) {
        self.cancel_token.cancel();
    }

    /// Waits until every tick task has finished.
    pub async fn await_tasks(&self) {
        self.tasks.close();
        self.tasks.wait().await;
    }
}

/// Ticks one world every `period` until cancelled, then drops its queues.
async fn tick_world(
    handle: WorldHandle,
    period: Duration,
    warn_threshold: usize,
    cancel_token: CancellationToken,
) {
    let mut interval = tokio::time::interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut over_threshold = false;

    loop {
        select! {
            () = cancel_token.cancelled() => {
                break;
            }
            _ = interval.tick() => {
                let (report, pending) = handle.tick();
                for detonation in &report.detonations {
                    tracing::debug!(
                        world = handle.name(),
                        pos = %detonation.pos,
                        block = %detonation.block,
                        "TNT detonated"
                    );
                }

                if pending > warn_threshold && !over_threshold {
                    tracing::warn!(
                        world = handle.name(),
                        pending,
                        warn_threshold,
                        "Check queue is growing past its threshold"
                    );
                }
                over_threshold = pending > warn_threshold;
            }
        }
    }

    let discarded = handle.discard_pending();
    tracing::info!(
        world = handle.name(),
        updates = discarded.updates,
        checks = discarded.checks,
        "Stopped ticking, dropped pending entries"
    );
}
