//! Pending update and check queues.
//!
//! Both queues collect work for the *next* tick. The tick driver takes a
//! queue's contents before working through them, so anything scheduled while
//! a tick runs waits for the following one.
//!
//! # Architecture
//!
//! - [`UpdateQueue`] - ordered block writes, one per cell
//! - [`CheckQueue`] - ordered re-evaluations, one per cell, with priorities
//! - [`CheckPayload`] - typed per-rule state carried by a check
//! - [`TickReport`] - what a tick did

mod check_queue;
mod payload;
mod report;
mod update_queue;

pub use check_queue::{CheckEntry, CheckQueue, TickPriority};
pub use payload::CheckPayload;
pub use report::{Detonation, TickReport};
pub use update_queue::{PendingUpdate, UpdateQueue};
