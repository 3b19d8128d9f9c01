use regex::Regex;
use std::sync::LazyLock;

use super::compile_regex;

static MARKDOWN_LINK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| compile_regex(r"\[([^\]]+)\]\(([^)]+)\)"));
static IFRAME_SRC_REGEX: LazyLock<Regex> =
    LazyLock::new(|| compile_regex(r#"<iframe[^>]+src=['"]+([^'"]+)['"]+"#));
static BARE_URL_REGEX: LazyLock<Regex> = LazyLock::new(|| compile_regex(r"https?://[^\s)]+"));

/// One URL heuristic. Matchers run in order; the first `Some` wins.
type UrlMatcher = fn(&str, &[String]) -> Option<String>;

const URL_MATCHERS: &[UrlMatcher] = &[markdown_link_url, iframe_src_url, bare_url];

fn is_excluded(url: &str, excluded_hosts: &[String]) -> bool {
    excluded_hosts
        .iter()
        .filter(|host| !host.is_empty())
        .any(|host| url.contains(host.as_str()))
}

fn markdown_link_url(content: &str, excluded_hosts: &[String]) -> Option<String> {
    MARKDOWN_LINK_REGEX
        .captures_iter(content)
        .filter_map(|caps| caps.get(2))
        .map(|m| m.as_str().trim())
        .find(|url| !url.is_empty() && !is_excluded(url, excluded_hosts))
        .map(str::to_string)
}

fn iframe_src_url(content: &str, _excluded_hosts: &[String]) -> Option<String> {
    IFRAME_SRC_REGEX
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

fn bare_url(content: &str, _excluded_hosts: &[String]) -> Option<String> {
    let raw = BARE_URL_REGEX.find(content)?.as_str();
    let cleaned = raw.trim_end_matches(['.', ',', '%']);
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned.to_string())
    }
}

pub(super) fn extract_url(content: &str, excluded_hosts: &[String]) -> String {
    URL_MATCHERS
        .iter()
        .find_map(|matcher| matcher(content, excluded_hosts))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_hosts() -> Vec<String> {
        vec!["pic.twitter.com".to_string(), "://t.co/".to_string()]
    }

    #[test]
    fn markdown_link_beats_bare_url() {
        let content = "https://b.com first\n[A](https://a.com)";
        assert_eq!(extract_url(content, &default_hosts()), "https://a.com");
    }

    #[test]
    fn excluded_picture_link_is_skipped() {
        let content = "[pic](https://pic.twitter.com/abc) [post](https://blog.example/post)";
        assert_eq!(
            extract_url(content, &default_hosts()),
            "https://blog.example/post"
        );
    }

    #[test]
    fn iframe_src_before_bare_url() {
        let content = r#"<iframe width="560" src="https://www.youtube.com/embed/xyz"></iframe> https://other.example"#;
        assert_eq!(
            extract_url(content, &default_hosts()),
            "https://www.youtube.com/embed/xyz"
        );
    }

    #[test]
    fn bare_url_trailing_punctuation_stripped() {
        let content = "Read more at https://example.com/path.,% today";
        assert_eq!(
            extract_url(content, &default_hosts()),
            "https://example.com/path"
        );
    }

    #[test]
    fn only_excluded_links_fall_through_to_bare_url() {
        let content = "[img](https://t.co/xyz)";
        assert_eq!(extract_url(content, &default_hosts()), "https://t.co/xyz");
    }

    #[test]
    fn no_url_is_empty() {
        assert_eq!(extract_url("plain prose", &default_hosts()), "");
    }
}
