use std::path::{Path, PathBuf};
use std::time::SystemTime;
use walkdir::WalkDir;

use super::error::VaultError;
use crate::extractor::is_note_file_name;

/// Eligible note file plus the mtime used for ranking.
#[derive(Debug, Clone)]
pub(super) struct NoteCandidate {
    pub path: PathBuf,
    pub modified: SystemTime,
}

pub(super) fn validate_root(root: &Path) -> Result<(), VaultError> {
    if !root.exists() {
        return Err(VaultError::NotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(VaultError::NotADirectory(root.to_path_buf()));
    }
    Ok(())
}

/// Direct children of `root` that are visible `.md` regular files, in file
/// name order.
pub(super) fn list_note_files(root: &Path) -> Result<Vec<PathBuf>, VaultError> {
    validate_root(root)?;
    let mut out = Vec::new();
    for entry in WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.depth() == 0 => {
                return Err(VaultError::Enumerate {
                    path: root.to_path_buf(),
                    source: err.into(),
                });
            }
            Err(err) => {
                tracing::warn!(error = %err, "skipping unreadable vault entry");
                continue;
            }
        };
        let path = entry.path();
        if is_note_file_name(path) && path.is_file() {
            out.push(path.to_path_buf());
        }
    }
    Ok(out)
}

/// Eligible notes sorted newest first; equal mtimes fall back to file name.
///
/// A file whose metadata cannot be read is dropped here.
pub(super) fn collect_candidates(root: &Path) -> Result<Vec<NoteCandidate>, VaultError> {
    let mut candidates: Vec<NoteCandidate> = list_note_files(root)?
        .into_iter()
        .filter_map(|path| match std::fs::metadata(&path).and_then(|m| m.modified()) {
            Ok(modified) => Some(NoteCandidate { path, modified }),
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "skipping note without mtime");
                None
            }
        })
        .collect();
    candidates.sort_by(|a, b| {
        b.modified
            .cmp(&a.modified)
            .then_with(|| a.path.file_name().cmp(&b.path.file_name()))
    });
    Ok(candidates)
}
