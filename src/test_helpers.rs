//! Shared test utilities for the gal-manifest test suite.
//!
//! Fixture trees are built programmatically on a `TempDir` — the
//! scanner only looks at names and extensions, so placeholder content
//! stands in for real image bytes.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = image_root(&["Events/cover.jpg", "Events/sub/a.webp"]);
//! let manifest = build_manifest(tmp.path(), &ManifestConfig::default()).unwrap();
//! assert_eq!(category_images(&manifest, "Events").len(), 2);
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::scan::Manifest;

/// Create a temp scan root containing the given relative files.
///
/// Parent directories are created as needed; each file gets placeholder
/// content. `image_root(&[])` is just an empty root.
pub fn image_root(files: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for rel in files {
        touch(tmp.path(), rel);
    }
    tmp
}

/// Create one file (and its parents) under `root`.
pub fn touch(root: &Path, rel: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, "fake image").unwrap();
}

/// Image paths of a category. Panics with context if the category is
/// not in the manifest.
pub fn category_images<'a>(manifest: &'a Manifest, category: &str) -> Vec<&'a str> {
    manifest
        .get(category)
        .unwrap_or_else(|| {
            let names: Vec<&str> = manifest.iter().map(|(name, _)| name).collect();
            panic!("category '{category}' not found. Available: {names:?}")
        })
        .iter()
        .map(|s| s.as_str())
        .collect()
}
