//! Error types for cave generation.

use thiserror::Error;

/// Configuration faults detected before any grid is generated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaveError {
    /// Width or height is zero.
    #[error("Invalid map size: {width}x{height} (both sides must be positive)")]
    InvalidDimensions { width: usize, height: usize },

    /// Fill percentage above 100.
    #[error("Invalid fill percentage: {0} (must be between 0 and 100)")]
    FillPercentOutOfRange(u32),

    /// Neighbour radius samples no cells at all.
    #[error("Invalid neighbour radius: ({x}, {y}) (at least one axis must be non-zero)")]
    ZeroNeighbourRadius { x: usize, y: usize },

    /// An integer setting from the engine is below zero.
    #[error("Invalid {name}: {value} (must not be negative)")]
    NegativeSetting { name: &'static str, value: i32 },
}

/// Result type for cave generation operations.
pub type CaveResult<T> = std::result::Result<T, CaveError>;
