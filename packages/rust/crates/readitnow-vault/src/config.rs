//! YAML configuration for the vault engine.
//!
//! Resolution order for the config file: explicit path, then
//! `$READITNOW_CONFIG`, then `<config_dir>/readitnow/config.yaml`.
//! `$READITNOW_VAULT_PATH` overrides `vault_path` after loading.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::extractor::{DEFAULT_EXCERPT_LINES, DEFAULT_EXCLUDED_LINK_HOSTS};
use crate::vault::{DEFAULT_MAX_FILE_BYTES, DEFAULT_MAX_NOTES};

/// Directory name under the platform config dir.
pub const APP_NAME: &str = "readitnow";
/// Config file name inside [`APP_NAME`].
pub const CONFIG_FILE_NAME: &str = "config.yaml";
/// Env var naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "READITNOW_CONFIG";
/// Env var overriding `vault_path`.
pub const VAULT_PATH_ENV: &str = "READITNOW_VAULT_PATH";

/// Configuration failures.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("Failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid YAML for [`ReadItNowConfig`].
    #[error("Failed to parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// Default config could not be written.
    #[error("Failed to write config {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A value is out of range.
    #[error("Invalid config: {0}")]
    Invalid(String),

    /// No explicit path and no platform config directory.
    #[error("No user config directory available")]
    NoConfigDir,
}

fn default_vault_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("vault")
        .join("ReadItLater Inbox")
}

fn default_max_notes() -> usize {
    DEFAULT_MAX_NOTES
}

fn default_excerpt_lines() -> usize {
    DEFAULT_EXCERPT_LINES
}

fn default_max_file_bytes() -> u64 {
    DEFAULT_MAX_FILE_BYTES
}

fn default_excluded_link_hosts() -> Vec<String> {
    DEFAULT_EXCLUDED_LINK_HOSTS
        .iter()
        .map(|host| (*host).to_string())
        .collect()
}

/// User settings consumed by the vault engine.
///
/// Keys the engine does not know about (UI keybindings, cache dirs) are
/// ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadItNowConfig {
    /// Vault root; `~` is expanded on load.
    #[serde(default = "default_vault_path")]
    pub vault_path: PathBuf,
    /// Notes listed per scan.
    #[serde(default = "default_max_notes")]
    pub max_notes: usize,
    /// Excerpt length in processed lines.
    #[serde(default = "default_excerpt_lines")]
    pub excerpt_lines: usize,
    /// Per-file read limit.
    #[serde(default = "default_max_file_bytes")]
    pub max_file_bytes: u64,
    /// Markdown-link URL substrings never picked as the note URL.
    #[serde(default = "default_excluded_link_hosts")]
    pub excluded_link_hosts: Vec<String>,
}

impl Default for ReadItNowConfig {
    fn default() -> Self {
        Self {
            vault_path: default_vault_path(),
            max_notes: default_max_notes(),
            excerpt_lines: default_excerpt_lines(),
            max_file_bytes: default_max_file_bytes(),
            excluded_link_hosts: default_excluded_link_hosts(),
        }
    }
}

impl ReadItNowConfig {
    /// Reject values the engine cannot work with.
    ///
    /// # Errors
    /// [`ConfigError::Invalid`] naming the offending key.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.excerpt_lines == 0 {
            return Err(ConfigError::Invalid(
                "excerpt_lines must be at least 1".to_string(),
            ));
        }
        if self.max_file_bytes == 0 {
            return Err(ConfigError::Invalid(
                "max_file_bytes must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    fn normalize(mut self) -> Self {
        if let Ok(raw) = std::env::var(VAULT_PATH_ENV) {
            let trimmed = raw.trim();
            if !trimmed.is_empty() {
                self.vault_path = PathBuf::from(trimmed);
            }
        }
        self.vault_path = expand_home(&self.vault_path);
        self
    }
}

/// Expand a leading `~` to the home directory.
#[must_use]
pub fn expand_home(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };
    match dirs::home_dir() {
        Some(home) => home.join(rest),
        None => path.to_path_buf(),
    }
}

/// `<config_dir>/readitnow/config.yaml`.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_NAME).join(CONFIG_FILE_NAME))
}

/// Pick the config file to use.
///
/// # Errors
/// [`ConfigError::NoConfigDir`] when nothing is given and the platform has
/// no config directory.
pub fn resolve_config_path(explicit: Option<&Path>) -> Result<PathBuf, ConfigError> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    if let Ok(raw) = std::env::var(CONFIG_PATH_ENV) {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            return Ok(expand_home(Path::new(trimmed)));
        }
    }
    default_config_path().ok_or(ConfigError::NoConfigDir)
}

/// Load and validate an existing config file.
///
/// # Errors
/// Read, parse, or validation failures.
pub fn load_config(path: &Path) -> Result<ReadItNowConfig, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config = if raw.trim().is_empty() {
        ReadItNowConfig::default()
    } else {
        serde_yaml::from_str::<ReadItNowConfig>(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?
    };
    let config = config.normalize();
    config.validate()?;
    Ok(config)
}

/// Write `config` as YAML, creating parent directories.
///
/// # Errors
/// [`ConfigError::Write`] on any filesystem failure.
pub fn write_config(path: &Path, config: &ReadItNowConfig) -> Result<(), ConfigError> {
    let write_err = |source: std::io::Error| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }
    let rendered = serde_yaml::to_string(config)
        .map_err(|err| write_err(std::io::Error::other(err)))?;
    std::fs::write(path, rendered).map_err(write_err)
}

/// Load the config, writing defaults first when the file is missing.
///
/// # Errors
/// See [`resolve_config_path`], [`write_config`], [`load_config`].
pub fn load_or_create_config(explicit: Option<&Path>) -> Result<ReadItNowConfig, ConfigError> {
    let path = resolve_config_path(explicit)?;
    if !path.is_file() {
        tracing::info!(path = %path.display(), "config not found, writing defaults");
        write_config(&path, &ReadItNowConfig::default())?;
    }
    load_config(&path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_yaml_uses_defaults() {
        let config: ReadItNowConfig =
            serde_yaml::from_str("vault_path: /notes\nmax_notes: 3\n").unwrap();
        assert_eq!(config.vault_path, PathBuf::from("/notes"));
        assert_eq!(config.max_notes, 3);
        assert_eq!(config.excerpt_lines, DEFAULT_EXCERPT_LINES);
        assert_eq!(config.excluded_link_hosts, default_excluded_link_hosts());
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let yaml = "vault_path: /notes\nkeybindings:\n  quit: q\nthumbnail_cache: /tmp/x\n";
        let config: ReadItNowConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.vault_path, PathBuf::from("/notes"));
    }

    #[test]
    fn zero_excerpt_lines_rejected() {
        let config = ReadItNowConfig {
            excerpt_lines: 0,
            ..ReadItNowConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn expand_home_leaves_plain_paths() {
        assert_eq!(expand_home(Path::new("/abs/x")), PathBuf::from("/abs/x"));
    }
}
