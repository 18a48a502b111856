//! CLI output formatting.
//!
//! Output is information-centric: each category leads with its
//! positional index, name, and image count; individual image paths are
//! shown as indented context lines when verbose. Warnings (missing
//! category directories, an entirely empty manifest) appear inline so
//! a quiet run still explains an empty output file.
//!
//! ```text
//! Categories
//! 001 Events (3 images)
//!     Events/cover.jpg
//!     Events/party-01.jpg
//!     Events/party-02.jpg
//! 002 Missing (0 images, directory not found)
//!
//! Wrote photos/manifest.json
//! ```
//!
//! Each piece has a `format_*` function (returns `Vec<String>` or
//! `String`) for testability and a `print_*` wrapper that writes to
//! stdout. Format functions are pure — no I/O, no side effects.

use crate::emit::WriteOutcome;
use crate::scan::Manifest;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Format the category inventory for a completed scan.
///
/// When `verbose` is false only warnings survive, so a silenced run
/// prints nothing on the happy path.
pub fn format_build_output(manifest: &Manifest, root: &Path, verbose: bool) -> Vec<String> {
    let mut lines = Vec::new();

    if manifest.is_empty() {
        lines.push("Warning: no categories found, writing an empty manifest".to_string());
        return lines;
    }

    if verbose {
        lines.push("Categories".to_string());
    }
    for (i, (category, images)) in manifest.iter().enumerate() {
        let missing = !root.join(category).is_dir();
        if verbose {
            let detail = if missing {
                format!("({} images, directory not found)", images.len())
            } else if images.len() == 1 {
                "(1 image)".to_string()
            } else {
                format!("({} images)", images.len())
            };
            lines.push(format!("{} {} {}", format_index(i + 1), category, detail));
            for image in images {
                lines.push(format!("    {}", image));
            }
        } else if missing {
            lines.push(format!("Warning: category '{category}' directory not found"));
        }
    }

    lines
}

/// One-line report of the conditional write.
pub fn format_outcome(path: &Path, outcome: WriteOutcome) -> String {
    match outcome {
        WriteOutcome::Written => format!("Wrote {}", path.display()),
        WriteOutcome::Unchanged => format!("{} (no changes)", path.display()),
    }
}

/// Print build output to stdout.
pub fn print_build_output(manifest: &Manifest, root: &Path, verbose: bool) {
    for line in format_build_output(manifest, root, verbose) {
        println!("{}", line);
    }
}
