//! Shared models for note listing and vault statistics.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Title used when the file name yields no usable stem.
pub const UNTITLED: &str = "Untitled";
/// Excerpt used when no prose line survives filtering.
pub const NO_CONTENT: &str = "No content available";

/// One note as surfaced to the caller.
///
/// Rebuilt on every scan; `is_read` is derived from file content and never
/// stored anywhere else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// File stem, or [`UNTITLED`].
    pub title: String,
    /// Markdown-stripped preview, or [`NO_CONTENT`].
    pub excerpt: String,
    /// `[[wiki]]` tags in order of appearance, duplicates kept.
    pub tags: Vec<String>,
    /// Canonical external link, empty when none.
    pub url: String,
    /// Derived preview image, empty when none.
    pub thumbnail_url: String,
    /// Whether the read marker is present.
    pub is_read: bool,
    /// Source file.
    pub file_path: PathBuf,
    /// Filesystem modification time at scan time.
    pub modified_at: DateTime<Utc>,
}

/// Aggregate counts over every eligible note in the vault.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaultStats {
    /// Every eligible note file, readable or not.
    pub total_notes: usize,
    /// Readable notes carrying the read marker.
    pub read_notes: usize,
    /// `total_notes - read_notes`.
    pub unread_notes: usize,
    /// `min(total_notes, max_notes)`.
    pub showing_notes: usize,
    /// Vault root.
    pub vault_path: PathBuf,
}

impl VaultStats {
    /// Zero counts for `vault_path`.
    #[must_use]
    pub fn empty(vault_path: PathBuf) -> Self {
        Self {
            total_notes: 0,
            read_notes: 0,
            unread_notes: 0,
            showing_notes: 0,
            vault_path,
        }
    }
}

/// Read state of a note after a mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadState {
    /// Marker present.
    Read,
    /// Marker absent.
    Unread,
}

impl ReadState {
    /// `true` for [`ReadState::Read`].
    #[must_use]
    pub fn is_read(self) -> bool {
        matches!(self, Self::Read)
    }
}
