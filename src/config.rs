//! Builder configuration.
//!
//! Everything the manifest build needs travels in an explicit
//! [`ManifestConfig`] handed to the scan — no ambient globals — so runs
//! are deterministic and tests can inject throwaway roots with whatever
//! settings they need.
//!
//! The configuration surface is deliberately small:
//!
//! - `categories`: explicit allow-list (CLI `--categories` / `CATEGORIES`
//!   env). Unset means auto-detect top-level directories.
//! - `extensions`: image extension allow-list. The default covers the
//!   formats browsers render natively; `heic` is not in it and must be
//!   opted into.
//! - `include_empty`: whether auto-detected categories with no images
//!   appear in the manifest (explicitly listed ones always do).
//! - `featured_pattern`: regex for lead-image names, see [`crate::order`].
//! - `verbose`: diagnostic output (CLI `--verbose` / `VERBOSE` env).
//!
//! The ignore set is a fixed constant, not configuration: it names
//! tooling directories that never contain gallery content.

use crate::order;
use std::path::Path;
use thiserror::Error;

/// Extensions treated as images, lower-case, no dot.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "gif", "avif"];

/// Directories never scanned or auto-detected as categories:
/// version control metadata, CI config, editor settings, dependency caches.
pub const IGNORE_DIRS: &[&str] = &[".git", ".github", ".gitlab", ".vscode", "node_modules"];

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("extension allow-list is empty")]
    NoExtensions,
    #[error("invalid featured pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Settings for one manifest build.
#[derive(Debug, Clone)]
pub struct ManifestConfig {
    /// Explicit category names, in output order. `None` = auto-detect.
    pub categories: Option<Vec<String>>,
    /// Extension allow-list (compared case-insensitively).
    pub extensions: Vec<String>,
    /// Keep auto-detected categories that contain no images.
    pub include_empty: bool,
    /// Featured-name pattern; compiled once at the start of a build.
    pub featured_pattern: String,
    /// Diagnostic output verbosity.
    pub verbose: bool,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            categories: None,
            extensions: IMAGE_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            include_empty: true,
            featured_pattern: order::DEFAULT_FEATURED_PATTERN.to_string(),
            verbose: true,
        }
    }
}

impl ManifestConfig {
    /// Validate settings before touching the filesystem.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.extensions.is_empty() {
            return Err(ConfigError::NoExtensions);
        }
        regex::Regex::new(&self.featured_pattern)?;
        Ok(())
    }

    /// Whether a path's extension is in the allow-list (case-insensitive).
    pub fn matches_extension(&self, path: &Path) -> bool {
        let Some(ext) = path.extension() else {
            return false;
        };
        let ext = ext.to_string_lossy();
        self.extensions.iter().any(|e| ext.eq_ignore_ascii_case(e))
    }
}

/// Parse a comma-separated category list: entries are trimmed, blanks
/// dropped. An empty or all-blank list means "auto-detect".
pub fn parse_category_list(raw: &[String]) -> Option<Vec<String>> {
    let names: Vec<String> = raw
        .iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();
    if names.is_empty() { None } else { Some(names) }
}

/// Whether an entry name is excluded from scanning and auto-detection:
/// hidden (`.`-prefixed), underscore-prefixed, or in the ignore set.
pub fn is_excluded_name(name: &str) -> bool {
    name.starts_with('.') || name.starts_with('_') || IGNORE_DIRS.contains(&name)
}
