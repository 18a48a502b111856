//! Filesystem scanning and manifest construction.
//!
//! The heart of the tool: walks category directories under the scan
//! root, filters files by extension and exclusion rules, and assembles
//! the [`Manifest`] that [`crate::emit`] serializes.
//!
//! ## Directory Structure
//!
//! The scan root holds one directory per category; anything nested
//! inside a category belongs to it:
//!
//! ```text
//! photos/                          # Scan root
//! ├── manifest.json                # Output (never scanned — wrong extension)
//! ├── Events/                      # Category
//! │   ├── cover.jpg                # Featured → sorts first
//! │   ├── summer/party-01.jpg      # Nested files keep their subpath
//! │   ├── _drafts/wip.jpg          # Underscore-prefixed → pruned
//! │   └── .trash/old.jpg           # Hidden → pruned
//! ├── Fashion/
//! │   └── look2.webp
//! └── node_modules/                # Ignore set → never a category
//! ```
//!
//! ## Rules
//!
//! - Directories in the ignore set or starting with `.` or `_` are
//!   pruned entirely — never descended into — at every depth.
//! - Files starting with `.` or `_` are skipped.
//! - Only extensions in the config allow-list count as images.
//! - Every emitted path is relative to the scan root and uses `/`
//!   separators on every platform.
//! - A configured category whose directory is missing yields an empty
//!   list rather than an error; I/O failures inside an existing tree
//!   are fatal, since a partial manifest would mislead consumers.

use crate::config::{self, ManifestConfig};
use crate::order::{self, FeaturedMatcher};
use serde::Serialize;
use serde::ser::SerializeMap;
use std::fs;
use std::path::Path;
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("invalid featured pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// The output document: category name → sorted relative image paths.
///
/// Backed by a `Vec` rather than a map type because insertion order is
/// the document order — an explicit `CATEGORIES` list must round-trip
/// exactly as given. Keys are unique; inserting an existing category
/// replaces its list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    entries: Vec<(String, Vec<String>)>,
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a category, replacing any previous list under the same name.
    pub fn insert(&mut self, category: String, images: Vec<String>) {
        if let Some(existing) = self.entries.iter_mut().find(|(name, _)| *name == category) {
            existing.1 = images;
        } else {
            self.entries.push((category, images));
        }
    }

    pub fn get(&self, category: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, images)| images.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, images)| (name.as_str(), images.as_slice()))
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total image count across all categories.
    pub fn image_count(&self) -> usize {
        self.entries.iter().map(|(_, images)| images.len()).sum()
    }
}

impl Serialize for Manifest {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, images) in &self.entries {
            map.serialize_entry(name, images)?;
        }
        map.end()
    }
}

/// Build the manifest for a scan root: resolve categories, walk each,
/// sort, assemble.
pub fn build_manifest(root: &Path, config: &ManifestConfig) -> Result<Manifest, ScanError> {
    let matcher = FeaturedMatcher::new(&config.featured_pattern)?;
    let explicit = config.categories.is_some();

    let mut manifest = Manifest::new();
    for category in resolve_categories(root, config)? {
        let mut images = walk_category(root, &category, config)?;
        images.sort_by(|a, b| matcher.compare(a, b));

        // Empty-category policy only applies to auto-detected names;
        // an explicit list is emitted verbatim.
        if images.is_empty() && !explicit && !config.include_empty {
            continue;
        }
        manifest.insert(category, images);
    }
    Ok(manifest)
}

/// The set of categories to emit, in output order.
///
/// An explicit allow-list wins as-is. Otherwise top-level directories
/// under the root are auto-detected, minus ignored/hidden/underscore
/// names, in natural order.
pub fn resolve_categories(root: &Path, config: &ManifestConfig) -> Result<Vec<String>, ScanError> {
    if let Some(list) = &config.categories {
        return Ok(list.clone());
    }

    let mut names = Vec::new();
    for entry in fs::read_dir(root)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if config::is_excluded_name(&name) {
            continue;
        }
        names.push(name);
    }
    names.sort_by(|a, b| order::natural_cmp(a, b));
    Ok(names)
}

/// Recursively collect relative image paths under one category.
///
/// A missing or non-directory category yields an empty list. Excluded
/// directories are pruned without being descended into, so permission
/// problems inside ignored trees never surface.
pub fn walk_category(
    root: &Path,
    category: &str,
    config: &ManifestConfig,
) -> Result<Vec<String>, ScanError> {
    let dir = root.join(category);
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut images = Vec::new();
    let walker = WalkDir::new(&dir).follow_links(false).into_iter();
    for entry in walker.filter_entry(|e| {
        // Depth 0 is the category directory itself; exclusion rules
        // apply to its contents.
        e.depth() == 0 || !config::is_excluded_name(&e.file_name().to_string_lossy())
    }) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        if !config.matches_extension(entry.path()) {
            continue;
        }
        let rel = entry.path().strip_prefix(root).unwrap();
        images.push(manifest_path(rel));
    }
    Ok(images)
}

/// Render a relative path with `/` separators regardless of host
/// conventions.
fn manifest_path(rel: &Path) -> String {
    rel.iter()
        .map(|seg| seg.to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
