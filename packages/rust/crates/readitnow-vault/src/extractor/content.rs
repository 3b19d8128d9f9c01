use regex::Regex;
use std::sync::LazyLock;

use super::compile_regex;
use crate::models::NO_CONTENT;

static WIKI_TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| compile_regex(r"\[\[([^\]]+)\]\]"));
static WIKI_ONLY_LINE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| compile_regex(r"^\s*\[\[.*\]\]\s*$"));
static HEADING_PREFIX_REGEX: LazyLock<Regex> = LazyLock::new(|| compile_regex(r"^#+\s*"));
static INLINE_LINK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| compile_regex(r"\[([^\]]+)\]\([^)]+\)"));
static BOLD_REGEX: LazyLock<Regex> = LazyLock::new(|| compile_regex(r"\*\*(.*?)\*\*"));
static ITALIC_REGEX: LazyLock<Regex> = LazyLock::new(|| compile_regex(r"\*(.*?)\*"));

fn is_link_shaped(inner: &str) -> bool {
    inner.contains("://") || inner.starts_with("http")
}

pub(super) fn extract_tags(content: &str) -> Vec<String> {
    WIKI_TOKEN_REGEX
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|inner| !is_link_shaped(inner))
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Strip heading markers, inline links, and emphasis from one trimmed line.
fn strip_markdown(line: &str) -> String {
    let line = HEADING_PREFIX_REGEX.replace(line, "");
    let line = INLINE_LINK_REGEX.replace_all(&line, "$1");
    let line = BOLD_REGEX.replace_all(&line, "$1");
    ITALIC_REGEX.replace_all(&line, "$1").into_owned()
}

fn excerpt_lines(content: &str, max_lines: usize) -> Vec<String> {
    content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter(|line| !WIKI_ONLY_LINE_REGEX.is_match(line))
        .map(|line| strip_markdown(line.trim()))
        .filter(|line| !line.is_empty())
        .take(max_lines.max(1))
        .collect()
}

pub(super) fn extract_excerpt(content: &str, max_lines: usize) -> String {
    let lines = excerpt_lines(content, max_lines);
    if lines.is_empty() {
        NO_CONTENT.to_string()
    } else {
        lines.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_keep_order_and_duplicates() {
        let tags = extract_tags("[[b]] text [[a]] more [[b]]");
        assert_eq!(tags, vec!["b", "a", "b"]);
    }

    #[test]
    fn tags_reject_link_shaped_tokens() {
        let tags = extract_tags("[[https://x.com]] [[http-thing]] [[ftp://host]] [[keep]]");
        assert_eq!(tags, vec!["keep"]);
    }

    #[test]
    fn tags_trim_and_drop_blank() {
        assert_eq!(extract_tags("[[  spaced  ]] [[   ]]"), vec!["spaced"]);
    }

    #[test]
    fn excerpt_strips_markdown() {
        let excerpt = extract_excerpt("# Title\n\n[[tag]]\nHello **world**.", 5);
        assert_eq!(excerpt, "Title Hello world.");
    }

    #[test]
    fn excerpt_collapses_links_and_italics() {
        let excerpt = extract_excerpt("See [the docs](https://docs.rs) and *this*.", 5);
        assert_eq!(excerpt, "See the docs and this.");
    }

    #[test]
    fn excerpt_respects_line_limit() {
        assert_eq!(extract_excerpt("one\ntwo\nthree", 2), "one two");
    }

    #[test]
    fn excerpt_skips_lines_emptied_by_stripping() {
        assert_eq!(extract_excerpt("###\n##   \nreal line", 1), "real line");
    }

    #[test]
    fn excerpt_sentinel_for_metadata_only_notes() {
        assert_eq!(extract_excerpt("\n  [[tag]]  \n\n", 5), NO_CONTENT);
        assert_eq!(extract_excerpt("", 5), NO_CONTENT);
    }
}
