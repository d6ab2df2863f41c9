//! Error types for simulation setup.

use std::fmt;

/// Configuration rejected at initialization time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Frame dimensions must both be non-zero.
    InvalidFrameDimensions { width: u32, height: u32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidFrameDimensions { width, height } => {
                write!(f, "Invalid frame dimensions: {}x{}", width, height)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
