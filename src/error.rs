//! Error types for startup and presentation

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can stop the pendulum before or while it runs.
///
/// Drawing never produces one of these: out-of-range writes are clipped.
#[derive(Error, Debug)]
pub enum Error {
    /// Framebuffer dimensions must be positive and fit in an `i32`
    #[error("invalid framebuffer dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// Backing storage for the framebuffer could not be reserved
    #[error("failed to allocate {width}x{height} framebuffer")]
    Allocation { width: u32, height: u32 },

    /// Config file could not be read, parsed or written
    #[error("config {}: {reason}", path.display())]
    Config { path: PathBuf, reason: String },

    /// Config parsed but violates a physical or geometric invariant
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// SDL2 window, renderer or texture failure
    #[error("display error: {0}")]
    Display(String),
}

impl Error {
    /// Wrap any SDL2 error (most of its API reports plain strings)
    pub fn display<E: ToString>(e: E) -> Self {
        Self::Display(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidDimensions {
            width: 0,
            height: 600,
        };
        assert_eq!(err.to_string(), "invalid framebuffer dimensions: 0x600");

        let err = Error::Config {
            path: PathBuf::from("pendulum.json"),
            reason: "missing field".into(),
        };
        assert_eq!(err.to_string(), "config pendulum.json: missing field");

        let err = Error::InvalidConfig("arm_length must be positive".into());
        assert!(err.to_string().contains("arm_length"));
    }
}
