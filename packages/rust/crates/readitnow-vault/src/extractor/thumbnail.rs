use regex::Regex;
use std::sync::LazyLock;

use super::compile_regex;

static TWEET_PICTURE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| compile_regex(r"pic\.twitter\.com/([a-zA-Z0-9]+)"));
static WATCH_QUERY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| compile_regex(r"[?&]v=([a-zA-Z0-9_-]+)"));
static SHORT_VIDEO_REGEX: LazyLock<Regex> =
    LazyLock::new(|| compile_regex(r"youtu\.be/([a-zA-Z0-9_-]+)"));
static EMBED_VIDEO_REGEX: LazyLock<Regex> =
    LazyLock::new(|| compile_regex(r"youtube(?:-nocookie)?\.com/embed/([a-zA-Z0-9_-]+)"));

/// One thumbnail heuristic over `(content, resolved_url)`.
type ThumbnailMatcher = fn(&str, &str) -> Option<String>;

const THUMBNAIL_MATCHERS: &[ThumbnailMatcher] =
    &[tweet_picture, watch_page_video, embedded_video];

fn video_thumbnail(video_id: &str) -> String {
    format!("https://img.youtube.com/vi/{video_id}/mqdefault.jpg")
}

fn tweet_picture(content: &str, _url: &str) -> Option<String> {
    let media_id = TWEET_PICTURE_REGEX.captures(content)?.get(1)?.as_str();
    Some(format!("https://pbs.twimg.com/media/{media_id}.jpg"))
}

fn watch_page_video(_content: &str, url: &str) -> Option<String> {
    if url.contains("youtube.com") {
        let video_id = WATCH_QUERY_REGEX.captures(url)?.get(1)?.as_str();
        return Some(video_thumbnail(video_id));
    }
    let video_id = SHORT_VIDEO_REGEX.captures(url)?.get(1)?.as_str();
    Some(video_thumbnail(video_id))
}

fn embedded_video(content: &str, _url: &str) -> Option<String> {
    let video_id = EMBED_VIDEO_REGEX.captures(content)?.get(1)?.as_str();
    Some(video_thumbnail(video_id))
}

pub(super) fn extract_thumbnail(content: &str, url: &str) -> String {
    THUMBNAIL_MATCHERS
        .iter()
        .find_map(|matcher| matcher(content, url))
        .unwrap_or_default()
}
