//! Error types for typeloclib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while scanning a directory tree
#[derive(Error, Debug)]
pub enum TypelocError {
    /// Scan root is missing or not a directory
    #[error("{} is not a directory", .0.display())]
    NotADirectory(PathBuf),

    /// Failed to read a file
    #[error("failed to read file '{}': {source}", .path.display())]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
