//! Vault scanning, statistics, and read-state mutations.
//!
//! The vault is a flat directory of `.md` notes. Nothing is cached between
//! calls: every scan re-lists the directory and re-reads the retained files,
//! and every mutation re-reads the one file it rewrites.

mod discover;
mod error;

use chrono::{DateTime, Utc};
use rayon::prelude::*;
use readitnow_io::{atomic_write_text, read_text_safe};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::config::ReadItNowConfig;
use crate::extractor::marker::{append_read_marker, has_read_marker, strip_read_marker};
use crate::extractor::{ExtractorOptions, NoteExtractor};
use crate::models::{Note, ReadState, VaultStats};

use self::discover::{NoteCandidate, collect_candidates, list_note_files, validate_root};

pub use self::error::VaultError;

/// Default cap on notes returned by [`VaultManager::scan`].
pub const DEFAULT_MAX_NOTES: usize = 20;
/// Default per-file read limit.
pub const DEFAULT_MAX_FILE_BYTES: u64 = 10 * 1024 * 1024;

/// Scan and read limits for a [`VaultManager`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaultOptions {
    /// Cap on notes returned by a scan.
    pub max_notes: usize,
    /// Files above this size are treated as unreadable.
    pub max_file_bytes: u64,
    /// Field extraction settings.
    pub extractor: ExtractorOptions,
}

impl Default for VaultOptions {
    fn default() -> Self {
        Self {
            max_notes: DEFAULT_MAX_NOTES,
            max_file_bytes: DEFAULT_MAX_FILE_BYTES,
            extractor: ExtractorOptions::default(),
        }
    }
}

impl From<&ReadItNowConfig> for VaultOptions {
    fn from(config: &ReadItNowConfig) -> Self {
        Self {
            max_notes: config.max_notes,
            max_file_bytes: config.max_file_bytes,
            extractor: ExtractorOptions {
                excerpt_lines: config.excerpt_lines,
                excluded_link_hosts: config.excluded_link_hosts.clone(),
            },
        }
    }
}

/// Entry point for everything that touches note files.
#[derive(Debug, Clone)]
pub struct VaultManager {
    root: PathBuf,
    max_notes: usize,
    max_file_bytes: u64,
    extractor: NoteExtractor,
}

impl VaultManager {
    /// Bind to `root`.
    ///
    /// # Errors
    /// [`VaultError::NotFound`] / [`VaultError::NotADirectory`] when the root
    /// is unusable.
    pub fn new(root: impl Into<PathBuf>, options: VaultOptions) -> Result<Self, VaultError> {
        let root = root.into();
        validate_root(&root)?;
        Ok(Self {
            root,
            max_notes: options.max_notes,
            max_file_bytes: options.max_file_bytes,
            extractor: NoteExtractor::new(options.extractor),
        })
    }

    /// Bind to the vault named by a loaded config.
    ///
    /// # Errors
    /// Same as [`VaultManager::new`].
    pub fn from_config(config: &ReadItNowConfig) -> Result<Self, VaultError> {
        Self::new(config.vault_path.clone(), VaultOptions::from(config))
    }

    /// Vault root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Cap applied by [`VaultManager::scan`].
    #[must_use]
    pub fn max_notes(&self) -> usize {
        self.max_notes
    }

    /// Newest `max_notes` notes, newest first.
    ///
    /// Files that fail to read are skipped, so the result may be shorter
    /// than `max_notes`.
    ///
    /// # Errors
    /// Fatal root errors, or [`VaultError::Enumerate`] when the directory
    /// itself cannot be listed.
    pub fn scan(&self) -> Result<Vec<Note>, VaultError> {
        let mut candidates = collect_candidates(&self.root)?;
        candidates.truncate(self.max_notes);
        let notes: Vec<Note> = candidates
            .par_iter()
            .filter_map(|candidate| self.read_candidate(candidate))
            .collect();
        tracing::debug!(
            vault = %self.root.display(),
            retained = candidates.len(),
            returned = notes.len(),
            "vault scan complete"
        );
        Ok(notes)
    }

    /// Counts over every eligible note, independent of `max_notes`.
    ///
    /// Unreadable files still count toward `total_notes` but never toward
    /// `read_notes`.
    #[must_use]
    pub fn statistics(&self) -> VaultStats {
        let files = match list_note_files(&self.root) {
            Ok(files) => files,
            Err(err) => {
                tracing::warn!(vault = %self.root.display(), error = %err, "vault statistics unavailable");
                return VaultStats::empty(self.root.clone());
            }
        };
        let total_notes = files.len();
        let read_notes = files
            .par_iter()
            .filter(|path| match read_text_safe(path, self.max_file_bytes) {
                Ok(content) => has_read_marker(&content),
                Err(err) => {
                    tracing::debug!(path = %path.display(), error = %err, "not counted as read");
                    false
                }
            })
            .count();
        VaultStats {
            total_notes,
            read_notes,
            unread_notes: total_notes - read_notes,
            showing_notes: total_notes.min(self.max_notes),
            vault_path: self.root.clone(),
        }
    }

    /// Parse one note directly, bypassing directory listing.
    #[must_use]
    pub fn get_by_path(&self, path: impl AsRef<Path>) -> Option<Note> {
        let path = path.as_ref();
        if !path.is_file() {
            return None;
        }
        match self.load_note(path) {
            Ok(note) => Some(note),
            Err(err) => {
                tracing::warn!(error = %err, "note unavailable");
                None
            }
        }
    }

    /// Append the read marker unless already present.
    ///
    /// # Errors
    /// [`VaultError::Io`] when the file cannot be read or replaced.
    pub fn try_mark_as_read(&self, path: impl AsRef<Path>) -> Result<ReadState, VaultError> {
        let path = path.as_ref();
        let content = self.read_content(path)?;
        if let Some(updated) = append_read_marker(&content) {
            atomic_write_text(path, &updated).map_err(VaultError::io(path))?;
        }
        Ok(ReadState::Read)
    }

    /// Remove every read marker and normalize trailing whitespace.
    ///
    /// The file is rewritten even when no marker was present.
    ///
    /// # Errors
    /// [`VaultError::Io`] when the file cannot be read or replaced.
    pub fn try_mark_as_unread(&self, path: impl AsRef<Path>) -> Result<ReadState, VaultError> {
        let path = path.as_ref();
        let content = self.read_content(path)?;
        atomic_write_text(path, &strip_read_marker(&content)).map_err(VaultError::io(path))?;
        Ok(ReadState::Unread)
    }

    /// Flip the current read state.
    ///
    /// # Errors
    /// [`VaultError::Io`] when the note cannot be loaded or rewritten.
    pub fn try_toggle_read_status(&self, path: impl AsRef<Path>) -> Result<ReadState, VaultError> {
        let path = path.as_ref();
        let note = self.load_note(path)?;
        if note.is_read {
            self.try_mark_as_unread(path)
        } else {
            self.try_mark_as_read(path)
        }
    }

    /// [`VaultManager::try_mark_as_read`] reported as success/failure.
    #[must_use]
    pub fn mark_as_read(&self, path: impl AsRef<Path>) -> bool {
        report("mark_as_read", self.try_mark_as_read(path))
    }

    /// [`VaultManager::try_mark_as_unread`] reported as success/failure.
    #[must_use]
    pub fn mark_as_unread(&self, path: impl AsRef<Path>) -> bool {
        report("mark_as_unread", self.try_mark_as_unread(path))
    }

    /// [`VaultManager::try_toggle_read_status`] reported as success/failure.
    #[must_use]
    pub fn toggle_read_status(&self, path: impl AsRef<Path>) -> bool {
        report("toggle_read_status", self.try_toggle_read_status(path))
    }

    fn read_content(&self, path: &Path) -> Result<String, VaultError> {
        read_text_safe(path, self.max_file_bytes).map_err(VaultError::io(path))
    }

    fn load_note(&self, path: &Path) -> Result<Note, VaultError> {
        let modified = std::fs::metadata(path)
            .and_then(|meta| meta.modified())
            .map_err(|err| VaultError::Io {
                path: path.to_path_buf(),
                source: err.into(),
            })?;
        let content = self.read_content(path)?;
        Ok(self.extractor.extract(path, &content, to_utc(modified)))
    }

    fn read_candidate(&self, candidate: &NoteCandidate) -> Option<Note> {
        match self.read_content(&candidate.path) {
            Ok(content) => Some(self.extractor.extract(
                &candidate.path,
                &content,
                to_utc(candidate.modified),
            )),
            Err(err) => {
                tracing::warn!(error = %err, "skipping unreadable note");
                None
            }
        }
    }
}

fn to_utc(ts: SystemTime) -> DateTime<Utc> {
    DateTime::<Utc>::from(ts)
}

fn report(operation: &str, outcome: Result<ReadState, VaultError>) -> bool {
    match outcome {
        Ok(state) => {
            tracing::debug!(operation, ?state, "read state updated");
            true
        }
        Err(err) => {
            tracing::warn!(operation, error = %err, "read state update failed");
            false
        }
    }
}
