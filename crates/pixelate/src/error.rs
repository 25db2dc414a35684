//! # Application Error Types
//!
//! Everything that can stop a demo before or while it writes its images.

use std::path::PathBuf;

use pixelate_raster::RasterError;
use thiserror::Error;

/// Errors surfaced by the demo binaries.
#[derive(Error, Debug)]
pub enum AppError {
    /// Bad command line.
    #[error("{0}")]
    Usage(String),

    /// The configuration file could not be read.
    #[error("failed to read config {path:?}: {source}")]
    ConfigRead {
        /// Config file path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for this schema.
    #[error("failed to parse config {path:?}: {source}")]
    ConfigParse {
        /// Config file path.
        path: PathBuf,
        /// Parser error with line and column.
        #[source]
        source: toml::de::Error,
    },

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The output directory could not be created.
    #[error("failed to create output directory {path:?}: {source}")]
    OutputDir {
        /// Directory path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Bitmap creation, texture loading or image writing failed.
    #[error(transparent)]
    Raster(#[from] RasterError),
}

/// Result type for the application layer.
pub type AppResult<T> = Result<T, AppError>;
