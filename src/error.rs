// src/error.rs

use std::{io, path::PathBuf};
use thiserror::Error;

/// Errors produced by the playlist components. None of them is fatal to the
/// interactive session; the front end reports them and carries on.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("Error while scanning folder: {0}")]
    Walk(#[from] walkdir::Error),

    /// User input rejected before anything was persisted.
    #[error("{0}")]
    Validation(String),

    #[error("No application is associated with '{}'", .0.display())]
    NoAssociation(PathBuf),

    #[error("Failed to open '{}': {source}", .path.display())]
    Launch {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl AppError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        AppError::Io {
            path: path.into(),
            source,
        }
    }
}
