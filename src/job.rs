//! Compiled-in job paths.
//!
//! The tool is a one-shot utility: the source logo and both destinations are
//! fixed at build time. Destination directories must already exist; nothing is
//! created on the way.

use std::path::PathBuf;

/// Source logo image (any format the `image` crate can decode).
pub const SOURCE_IMAGE: &str = "assets/logo-source.jpeg";

/// Transparent PNG destination, overwritten if present.
pub const DEST_PNG: &str = "public/logo.png";

/// SVG wrapper destination, overwritten if present.
pub const DEST_SVG: &str = "public/logo.svg";

/// The three paths a single processing run reads and writes.
#[derive(Debug, Clone)]
pub struct JobPaths {
    pub source: PathBuf,
    pub png: PathBuf,
    pub svg: PathBuf,
}

impl Default for JobPaths {
    fn default() -> Self {
        Self {
            source: PathBuf::from(SOURCE_IMAGE),
            png: PathBuf::from(DEST_PNG),
            svg: PathBuf::from(DEST_SVG),
        }
    }
}
