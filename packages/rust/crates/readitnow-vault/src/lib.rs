//! readitnow-vault - Recent-notes engine for a ReadItLater-style vault.
//!
//! Module layout (by domain):
//! - `models`: `Note`, `VaultStats`, `ReadState`
//! - `extractor`: per-field metadata heuristics over raw note text
//! - `vault`: directory scan, statistics, read/unread mutations
//! - `config`: YAML settings (vault path, limits, link exclusions)
//!
//! # Examples
//!
//! ```rust
//! use chrono::Utc;
//! use std::path::Path;
//! use readitnow_vault::{ExtractorOptions, extract_note};
//!
//! let note = extract_note(
//!     Path::new("Inbox/Rust ownership.md"),
//!     "# Ownership\n\n[[rust]]\nRead [the book](https://doc.rust-lang.org/book/).",
//!     Utc::now(),
//!     &ExtractorOptions::default(),
//! );
//! assert_eq!(note.title, "Rust ownership");
//! assert_eq!(note.tags, vec!["rust"]);
//! assert_eq!(note.url, "https://doc.rust-lang.org/book/");
//! assert!(!note.is_read);
//! ```

pub mod config;
pub mod extractor;
pub mod models;
pub mod vault;

pub use config::{
    ConfigError, ReadItNowConfig, load_config, load_or_create_config, resolve_config_path,
    write_config,
};
pub use extractor::marker::{READ_MARKER, has_read_marker};
pub use extractor::{ExtractorOptions, NoteExtractor, extract_note};
pub use models::{NO_CONTENT, Note, ReadState, UNTITLED, VaultStats};
pub use vault::{VaultError, VaultManager, VaultOptions};
