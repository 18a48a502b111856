//! Manifest serialization and the write-if-changed output step.
//!
//! The manifest is consumed by static front-ends, so the document
//! format is fixed: 2-space-indented JSON with a single trailing
//! newline. The file is rewritten only when its bytes actually change
//! — the manifest usually lives in version control next to the images,
//! and a byte-identical rewrite would churn timestamps and history for
//! nothing.

use crate::scan::Manifest;
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EmitError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result of a conditional write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The file was created or its content replaced.
    Written,
    /// The file already held exactly this content; nothing touched.
    Unchanged,
}

/// Render the manifest as the output document: pretty JSON plus a
/// trailing newline. An empty manifest renders as `{}`.
pub fn to_json_document(manifest: &Manifest) -> Result<String, EmitError> {
    let mut json = serde_json::to_string_pretty(manifest)?;
    json.push('\n');
    Ok(json)
}

/// Write `document` to `path` only if the current content differs.
///
/// A missing file counts as changed; any other read failure is an
/// error rather than a blind overwrite.
pub fn write_if_changed(path: &Path, document: &str) -> Result<WriteOutcome, EmitError> {
    match fs::read(path) {
        Ok(prev) if prev == document.as_bytes() => return Ok(WriteOutcome::Unchanged),
        Ok(_) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(e.into()),
    }
    fs::write(path, document)?;
    Ok(WriteOutcome::Written)
}
