//! # gal-manifest
//!
//! Image manifest generator for static photo galleries. Walks a
//! directory tree where each top-level folder is a category, and writes
//! a `manifest.json` mapping every category to its sorted list of
//! relative image paths:
//!
//! ```json
//! {
//!   "Events": ["Events/cover.jpg", "Events/summer/party-01.jpg"],
//!   "Fashion": ["Fashion/look1.webp"]
//! }
//! ```
//!
//! Static sites and front-ends can't list directories server-side; the
//! manifest is that listing, precomputed at publish time. The file is
//! rewritten only when its content changes, so committing it next to
//! the images doesn't churn history.
//!
//! # Pipeline
//!
//! One linear batch pass, fully synchronous:
//!
//! ```text
//! resolve categories → walk each → filter → sort → serialize → compare → write
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Directory walking, category resolution, the `Manifest` type |
//! | [`order`] | Featured-name scoring and natural path comparison |
//! | [`config`] | The explicit `ManifestConfig` passed into every build |
//! | [`emit`] | JSON rendering and the write-if-changed output step |
//! | [`output`] | CLI diagnostics — category inventory and write outcome |
//!
//! # Design Decisions
//!
//! ## Filesystem Is the Data Source
//!
//! There is no database and no front-matter: a category is a folder, an
//! image is a file with an image extension. Hidden (`.`) and
//! underscore-prefixed names are working files and stay out of the
//! manifest at every depth, as do version-control and tooling
//! directories.
//!
//! ## Featured Images by Naming Convention
//!
//! Files named like a cover (`cover`, `hero`, or a zero-padded leading
//! number such as `0012.jpg`) sort to the front of their category so
//! front-ends can use the first entry as the lead image. The pattern is
//! a plain regex in the config — sites with their own convention
//! override it rather than renaming their archives.
//!
//! ## Sequential by Design
//!
//! The walk is depth-first, single-threaded, and deterministic apart
//! from directory enumeration order, which the final sort erases. At
//! the scale of a photo library the filesystem is not a bottleneck
//! worth parallelism.

pub mod config;
pub mod emit;
pub mod order;
pub mod output;
pub mod scan;

#[cfg(test)]
pub(crate) mod test_helpers;
