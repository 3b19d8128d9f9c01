//! Atomic text replacement.

use std::fs as std_fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::error::IoError;

/// Write text content atomically:
/// - resolve symlinks so the linked file is replaced, not the link
/// - write to a hidden temp file in the resolved file's directory
/// - carry over the permissions of the file being replaced
/// - fsync the temp file
/// - rename it over the target
///
/// The temp name starts with `.` so directory scans that skip hidden files
/// never pick it up.
///
/// # Errors
/// Returns `IoError::Write` when any step fails; the temp file is removed on
/// a best-effort basis.
pub fn atomic_write_text<P: AsRef<Path>>(path: P, content: &str) -> Result<(), IoError> {
    let path = path.as_ref();
    let write_err = |source: std::io::Error| IoError::Write {
        path: path.to_path_buf(),
        source,
    };

    let target = resolve_target(path).map_err(write_err)?;
    let parent = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let file_name = target
        .file_name()
        .and_then(|name| name.to_str())
        .filter(|name| !name.is_empty())
        .unwrap_or("note.md");
    let temp_path = parent.join(format!(".{}.{}.tmp", file_name, uuid::Uuid::new_v4()));

    let permissions = match std_fs::metadata(&target) {
        Ok(metadata) => Some(metadata.permissions()),
        Err(err) if err.kind() == ErrorKind::NotFound => None,
        Err(err) => return Err(write_err(err)),
    };

    let result = std_fs::File::create(&temp_path)
        .and_then(|mut temp_file| {
            temp_file.write_all(content.as_bytes())?;
            if let Some(permissions) = permissions {
                temp_file.set_permissions(permissions)?;
            }
            temp_file.sync_all()
        })
        .and_then(|()| std_fs::rename(&temp_path, &target));

    if let Err(err) = result {
        if let Err(cleanup_err) = std_fs::remove_file(&temp_path) {
            tracing::debug!(
                temp = %temp_path.display(),
                error = %cleanup_err,
                "temp file cleanup skipped"
            );
        }
        return Err(write_err(err));
    }

    Ok(())
}

/// Follow symlinks to the file that actually holds the content. A target
/// that does not exist yet is written at `path` as given.
fn resolve_target(path: &Path) -> std::io::Result<PathBuf> {
    match std_fs::canonicalize(path) {
        Ok(resolved) => Ok(resolved),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(path.to_path_buf()),
        Err(err) => Err(err),
    }
}
