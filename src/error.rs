//! Error types for wireframe.

use thiserror::Error;

/// Errors raised while building a raster or driving an animation.
///
/// Drawing never fails: coordinates are clamped into the grid instead.
#[derive(Debug, Error)]
pub enum RasterError {
    /// Width or height is zero.
    #[error("Invalid dimensions: {width}x{height} (both must be non-zero)")]
    InvalidDimensions {
        /// Requested width in cells.
        width: u16,
        /// Requested height in cells.
        height: u16,
    },

    /// Aspect ratio is zero, negative or not finite.
    #[error("Invalid aspect ratio: {0} (must be finite and > 0)")]
    InvalidAspect(f32),

    /// The width derived from height and aspect does not fit a cell coordinate.
    #[error("Derived width overflows: height {height} / aspect {aspect}")]
    WidthOverflow {
        /// Requested height in cells.
        height: u16,
        /// Requested aspect ratio.
        aspect: f32,
    },

    /// IO error from the terminal or an output sink.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, RasterError>;
