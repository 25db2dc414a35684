//! # Raster Error Types

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while creating, loading or saving bitmaps.
#[derive(Error, Debug)]
pub enum RasterError {
    /// A bitmap must be at least 1x1.
    #[error("invalid bitmap dimensions {width}x{height}")]
    InvalidDimensions {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },

    /// A pixel vector does not match the declared dimensions.
    #[error("pixel buffer holds {actual} pixels, expected {expected}")]
    PixelCountMismatch {
        /// width * height.
        expected: usize,
        /// Pixels supplied.
        actual: usize,
    },

    /// The image file could not be read or decoded.
    #[error("failed to load bitmap {path:?}: {source}")]
    Load {
        /// File that was being loaded.
        path: PathBuf,
        /// Underlying codec or I/O error.
        #[source]
        source: image::ImageError,
    },

    /// The image file could not be encoded or written.
    #[error("failed to save bitmap {path:?}: {source}")]
    Save {
        /// File that was being written.
        path: PathBuf,
        /// Underlying codec or I/O error.
        #[source]
        source: image::ImageError,
    },
}

/// Result type for raster operations.
pub type RasterResult<T> = Result<T, RasterError>;
