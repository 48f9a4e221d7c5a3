//! Minimal vector math used for block coordinates.

pub mod vector3;

pub use vector3::Vector3;
