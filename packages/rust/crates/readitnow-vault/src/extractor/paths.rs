use std::path::Path;

use crate::models::UNTITLED;

/// Extension of note files, compared ASCII case-insensitively.
pub const NOTE_EXTENSION: &str = "md";

pub(super) fn title_from_stem(path: &Path) -> Option<String> {
    let stem = path.file_stem()?.to_string_lossy();
    if stem.trim().is_empty() {
        None
    } else {
        Some(stem.into_owned())
    }
}

pub(super) fn extract_title(path: &Path) -> String {
    title_from_stem(path).unwrap_or_else(|| UNTITLED.to_string())
}

/// Whether the file name marks a note the vault should list.
///
/// Hidden names (leading `.`) are excluded, which also keeps in-flight
/// atomic-write temp files out of scans.
#[must_use]
pub fn is_note_file_name(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|v| v.to_str()) else {
        return false;
    };
    if name.starts_with('.') {
        return false;
    }
    path.extension()
        .and_then(|v| v.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(NOTE_EXTENSION))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_drops_extension_only() {
        assert_eq!(
            extract_title(Path::new("/vault/How Rust Works.v2.md")),
            "How Rust Works.v2"
        );
    }

    #[test]
    fn title_falls_back_when_stem_missing() {
        assert_eq!(extract_title(Path::new("/")), UNTITLED);
    }

    #[test]
    fn note_file_filter() {
        assert!(is_note_file_name(Path::new("a.md")));
        assert!(is_note_file_name(Path::new("b.MD")));
        assert!(!is_note_file_name(Path::new(".hidden.md")));
        assert!(!is_note_file_name(Path::new("c.txt")));
        assert!(!is_note_file_name(Path::new("README")));
    }
}
