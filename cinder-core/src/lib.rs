//! # Cinder Core
//!
//! The block-update scheduling and physics engine of a Cinder world.
//!
//! Edits and simulation output funnel into two per-world queues: pending
//! [`ticks::UpdateQueue`] writes and pending [`ticks::CheckQueue`]
//! re-evaluations. Once per tick, [`world::World::run_tick`] applies the
//! updates, then runs each check through the [`physics`] rule set, which may
//! schedule more work for the following tick. Explosions are resolved in
//! [`explosion`] and consult a [`game_mode::GameModeAdapter`] for protected
//! zones and kill credit.
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

pub mod block;
pub mod config;
pub mod error;
pub mod explosion;
pub mod game_mode;
pub mod physics;
pub mod ticks;
pub mod world;

#[cfg(test)]
mod testing;

pub use block::BlockId;
pub use world::World;
