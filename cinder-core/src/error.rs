//! Error types of the simulation core.

use thiserror::Error;

/// Errors raised while constructing a world.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WorldError {
    /// A dimension was zero, or the volume does not fit in memory indices.
    #[error("invalid world dimensions {width}x{height}x{length}")]
    InvalidDimensions {
        /// Requested width.
        width: u16,
        /// Requested height.
        height: u16,
        /// Requested length.
        length: u16,
    },
    /// A block buffer did not match the world volume.
    #[error("block buffer holds {actual} blocks but the world needs {expected}")]
    BlockCountMismatch {
        /// The volume of the world.
        expected: usize,
        /// The length of the supplied buffer.
        actual: usize,
    },
    /// The physics configuration was rejected.
    #[error("invalid physics configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Errors raised when validating physics configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Leaf decay radius out of the supported range.
    #[error("leaf decay radius must be in 1..=8, got {0}")]
    LeafRadius(u8),
    /// A chance out of ten was larger than ten.
    #[error("{name} must be at most 10, got {value}")]
    ChanceOutOfRange {
        /// The offending field.
        name: &'static str,
        /// The configured value.
        value: u8,
    },
    /// A percentage was larger than one hundred.
    #[error("{name} must be at most 100, got {value}")]
    PercentOutOfRange {
        /// The offending field.
        name: &'static str,
        /// The configured value.
        value: u8,
    },
    /// Shell chances grow towards the outside.
    #[error("explosion shell chances must not increase outward: {0:?}")]
    ShellsNotMonotonic([u8; 3]),
    /// An explosion power was negative.
    #[error("{name} must not be negative, got {value}")]
    NegativePower {
        /// The offending field.
        name: &'static str,
        /// The configured value.
        value: i32,
    },
}
