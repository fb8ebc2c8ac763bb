//! Errors surfaced before a session starts.
//!
//! Everything that can go wrong during a frame (rays leaving the grid, moves
//! into solid cells, zero depth) is recovered locally; only bad configuration
//! is fatal.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid maze size {rows}x{cols}: rows and cols must be >= 1")]
    InvalidGrid { rows: usize, cols: usize },

    #[error("invalid screen size {width}x{height}: both must be >= 1")]
    InvalidScreen { width: u32, height: u32 },

    #[error("invalid field of view {0}: must lie in (0, pi)")]
    InvalidFov(f32),

    #[error("invalid depth range [{min}, {max}]: need 0 < min < max")]
    InvalidDepth { min: f32, max: f32 },

    #[error("invalid ray step count {0}: need at least 2")]
    InvalidRaySteps(usize),

    #[error("invalid {name} {value}: must be finite and >= 0")]
    InvalidSpeed { name: &'static str, value: f32 },

    #[error("could not read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not parse config: {0}")]
    Parse(#[from] ron::error::SpannedError),
}
