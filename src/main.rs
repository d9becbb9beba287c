//! Logoprep - one-shot logo background cleanup.
//!
//! Converts a single logo image into a transparent-background PNG and an SVG
//! wrapper that embeds the PNG as a base64 data URI. All paths are compiled-in
//! constants (see [`job`]); the binary takes no arguments.

mod job;
mod logger;
mod logo;

use anyhow::Result;
use job::JobPaths;

fn main() -> Result<()> {
    logo::process_logo(&JobPaths::default())
}
