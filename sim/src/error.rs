//! Configuration errors.
//!
//! The per-frame step never fails. These errors only surface when a
//! configuration is validated before a scene is created.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("wave train {index} has invalid wavelength {wavelength} (must be finite and > 0)")]
    InvalidWavelength { index: usize, wavelength: f32 },

    #[error("wave train {index} has a zero-length direction")]
    ZeroDirection { index: usize },

    #[error("boundary radius must be finite and > 0, got {0}")]
    InvalidBoundaryRadius(f32),

    #[error("separation gap must be finite and >= 0, got {0}")]
    InvalidGap(f32),

    #[error("island spec '{name}' has invalid scale {scale}")]
    InvalidIslandScale { name: String, scale: f32 },

    #[error("non-finite value for {0}")]
    NonFinite(&'static str),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
