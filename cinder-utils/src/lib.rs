//! # Cinder Utils
//!
//! Small shared building blocks for the Cinder workspace: integer vectors,
//! block positions, the six axis directions and seedable randomness.

pub mod direction;
pub mod math;
pub mod random;
pub mod types;

pub use direction::Direction;
pub use types::BlockPos;
