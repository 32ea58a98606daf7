//! Error types for collection operations.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can abort a collection.
///
/// Per-file read failures are never errors; the walk skips those files.
#[derive(Debug, Error)]
pub enum CollectError {
    /// Root path is not a directory.
    #[error("Root path is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// Permission denied for a path.
    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    /// Path not found.
    #[error("Path not found: {path}")]
    NotFound { path: PathBuf },

    /// The artifact file could not be created.
    #[error("Cannot create {path}: {source}")]
    CreateArtifact {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing to an already created artifact failed.
    #[error("Write to {path} failed: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Generic I/O error.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CollectError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            _ => Self::Io { path, source },
        }
    }

    /// Path the error refers to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::NotADirectory { path }
            | Self::PermissionDenied { path }
            | Self::NotFound { path }
            | Self::CreateArtifact { path, .. }
            | Self::Write { path, .. }
            | Self::Io { path, .. } => path,
        }
    }
}
