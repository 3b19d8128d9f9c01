//! Error types for vault operations.

use std::path::PathBuf;

use readitnow_io::IoError;
use thiserror::Error;

/// Vault failures.
///
/// Only `NotFound` / `NotADirectory` abort a scan; the rest are per-file and
/// surface from single-note operations.
#[derive(Error, Debug)]
pub enum VaultError {
    /// Vault root does not exist.
    #[error("Vault path does not exist: {}", .0.display())]
    NotFound(PathBuf),

    /// Vault root exists but is not a directory.
    #[error("Vault path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// Listing the vault directory failed.
    #[error("Failed to list vault {}: {source}", path.display())]
    Enumerate {
        /// Vault root.
        path: PathBuf,
        /// Underlying listing failure.
        #[source]
        source: std::io::Error,
    },

    /// Reading or writing one note failed.
    #[error("Note I/O failed for {}: {source}", path.display())]
    Io {
        /// Note file.
        path: PathBuf,
        /// Underlying read or write failure.
        #[source]
        source: IoError,
    },
}

impl VaultError {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(IoError) -> Self {
        let path = path.into();
        move |source| Self::Io { path, source }
    }

    /// Whether this error invalidates the whole vault rather than one note.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::NotADirectory(_))
    }
}
