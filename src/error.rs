use std::path::{Path, PathBuf};

use thiserror::Error;

/// Top-level error type for the facemesh crate.
#[derive(Debug, Error)]
pub enum FacemeshError {
    #[error(transparent)]
    Point(#[from] PointError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Mesh(#[from] MeshError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors raised when constructing a point.
#[derive(Debug, Error, PartialEq)]
pub enum PointError {
    #[error("point radius must be positive and finite, got {0}")]
    NonPositiveRadius(f64),

    #[error("point position must be finite, got [{0}, {1}, {2}]")]
    NonFinitePosition(f64, f64, f64),
}

/// Errors related to persisting and restoring point collections.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("point file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("malformed point data{}: {}", display_path(.path.as_deref()), .message)]
    Format {
        path: Option<PathBuf>,
        message: String,
    },

    #[error("i/o failure on {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors related to mesh construction.
#[derive(Debug, Error, PartialEq)]
pub enum MeshError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("edge references point {index} but the collection holds {len} points")]
    EdgeOutOfBounds { index: usize, len: usize },
}

/// Errors related to presentation configuration.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

fn display_path(path: Option<&Path>) -> String {
    path.map(|p| format!(" in {}", p.display()))
        .unwrap_or_default()
}

/// Convenience type alias for results using [`FacemeshError`].
pub type Result<T> = std::result::Result<T, FacemeshError>;
