//! Note metadata extraction.
//!
//! Every field is resolved independently by pure functions over the note
//! text. Heuristic fields (URL, thumbnail) run an ordered list of matchers
//! where the first hit wins; a field with no hit takes its documented
//! default, so extraction itself cannot fail.

mod content;
mod links;
pub mod marker;
mod paths;
mod thumbnail;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::models::Note;

use self::content::{extract_excerpt, extract_tags};
use self::links::extract_url;
use self::marker::has_read_marker;
use self::paths::extract_title;
use self::thumbnail::extract_thumbnail;

pub use self::paths::{NOTE_EXTENSION, is_note_file_name};

/// Default number of processed lines in an excerpt.
pub const DEFAULT_EXCERPT_LINES: usize = 5;

/// Markdown-link URL substrings that point at inline pictures rather than
/// the note's source.
pub const DEFAULT_EXCLUDED_LINK_HOSTS: &[&str] = &["pic.twitter.com", "://t.co/"];

pub(crate) fn compile_regex(pattern: &str) -> Regex {
    match Regex::new(pattern) {
        Ok(regex) => regex,
        Err(_compile_err) => match Regex::new(r"$^") {
            Ok(fallback) => fallback,
            Err(fallback_err) => panic!("hardcoded fallback regex must compile: {fallback_err}"),
        },
    }
}

/// Tunables for [`NoteExtractor`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractorOptions {
    /// Maximum processed lines joined into the excerpt (at least 1).
    pub excerpt_lines: usize,
    /// Markdown links whose URL contains any of these are not picked as the
    /// note URL.
    pub excluded_link_hosts: Vec<String>,
}

impl Default for ExtractorOptions {
    fn default() -> Self {
        Self {
            excerpt_lines: DEFAULT_EXCERPT_LINES,
            excluded_link_hosts: DEFAULT_EXCLUDED_LINK_HOSTS
                .iter()
                .map(|host| (*host).to_string())
                .collect(),
        }
    }
}

/// Stateless note extractor bound to a set of options.
#[derive(Debug, Clone, Default)]
pub struct NoteExtractor {
    options: ExtractorOptions,
}

impl NoteExtractor {
    /// Extractor using `options`.
    #[must_use]
    pub fn new(options: ExtractorOptions) -> Self {
        Self { options }
    }

    /// Build a complete [`Note`] from raw file content.
    #[must_use]
    pub fn extract(&self, path: &Path, content: &str, modified_at: DateTime<Utc>) -> Note {
        extract_note(path, content, modified_at, &self.options)
    }
}

/// Build a complete [`Note`] from raw file content.
///
/// The thumbnail rules see the URL resolved in the same pass.
#[must_use]
pub fn extract_note(
    path: &Path,
    content: &str,
    modified_at: DateTime<Utc>,
    options: &ExtractorOptions,
) -> Note {
    let url = extract_url(content, &options.excluded_link_hosts);
    let thumbnail_url = extract_thumbnail(content, &url);
    Note {
        title: extract_title(path),
        excerpt: extract_excerpt(content, options.excerpt_lines),
        tags: extract_tags(content),
        url,
        thumbnail_url,
        is_read: has_read_marker(content),
        file_path: path.to_path_buf(),
        modified_at,
    }
}
