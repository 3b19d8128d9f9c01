//! The `[[readitnow/read]]` token: detection and in-text mutation.

use regex::{Captures, Regex};
use std::sync::LazyLock;

use super::compile_regex;

/// Literal token persisted inside a note to mark it as read.
pub const READ_MARKER: &str = "[[readitnow/read]]";

static READ_MARKER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| compile_regex(r"(?i)\[\[readitnow/read\]\]"));
static READ_MARKER_WITH_SPACE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| compile_regex(r"(?i)\s*\[\[readitnow/read\]\]\s*"));
static TRAILING_BLANK_LINES_REGEX: LazyLock<Regex> =
    LazyLock::new(|| compile_regex(r"\n\s*\n\s*$"));

/// Case-insensitive presence check.
#[must_use]
pub fn has_read_marker(content: &str) -> bool {
    READ_MARKER_REGEX.is_match(content)
}

/// Content with the marker appended, or `None` when it is already there.
///
/// Non-blank content gets a blank line before the marker.
#[must_use]
pub fn append_read_marker(content: &str) -> Option<String> {
    if has_read_marker(content) {
        return None;
    }
    if content.trim().is_empty() {
        Some(READ_MARKER.to_string())
    } else {
        Some(format!("{content}\n\n{READ_MARKER}"))
    }
}

/// Content with every marker occurrence and its surrounding whitespace
/// removed, trailing blank lines collapsed, and the result trimmed.
///
/// A marker between two pieces of text leaves one separator behind (a
/// newline if the removed whitespace spanned lines, else a space) so the
/// neighbours are not glued together.
#[must_use]
pub fn strip_read_marker(content: &str) -> String {
    let stripped = READ_MARKER_WITH_SPACE_REGEX.replace_all(content, |caps: &Captures| {
        if caps[0].contains('\n') { "\n" } else { " " }
    });
    let collapsed = TRAILING_BLANK_LINES_REGEX.replace(&stripped, "\n");
    collapsed.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_mixed_case_marker() {
        assert!(has_read_marker("body\n[[ReadItNow/Read]]"));
        assert!(!has_read_marker("body\n[[readitnow/unread]]"));
    }

    #[test]
    fn append_adds_blank_line_separator() {
        assert_eq!(
            append_read_marker("# Title\nBody").as_deref(),
            Some("# Title\nBody\n\n[[readitnow/read]]")
        );
    }

    #[test]
    fn append_on_blank_content_is_bare_marker() {
        assert_eq!(append_read_marker("  \n").as_deref(), Some(READ_MARKER));
    }

    #[test]
    fn append_is_noop_when_present() {
        assert_eq!(append_read_marker("x [[READITNOW/READ]]"), None);
    }

    #[test]
    fn strip_removes_all_occurrences() {
        let content = "# Title\n\n[[readitnow/read]]\nBody\n\n[[ReadItNow/Read]]\n\n";
        assert_eq!(strip_read_marker(content), "# Title\nBody");
    }

    #[test]
    fn strip_inline_marker_keeps_words_apart() {
        assert_eq!(
            strip_read_marker("see [[readitnow/read]] later"),
            "see later"
        );
    }

    #[test]
    fn strip_undoes_append() {
        let original = "# Title\n\nBody text";
        let marked = append_read_marker(original).unwrap();
        assert_eq!(strip_read_marker(&marked), original);
    }

    #[test]
    fn strip_without_marker_only_trims() {
        assert_eq!(strip_read_marker("\n  Body\n\n\n"), "Body");
    }
}
