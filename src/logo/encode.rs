//! PNG encoding.

use std::io::Cursor;

use anyhow::{Context, Result};
use image::{ImageFormat, RgbaImage};

/// Encode an RGBA image as PNG bytes in memory.
///
/// The pipeline writes this single buffer to the PNG destination and embeds
/// it in the SVG wrapper, so both outputs always carry identical bytes.
pub(super) fn encode_png(img: &RgbaImage) -> Result<Vec<u8>> {
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Png)
        .context("failed to encode PNG")?;
    Ok(buf.into_inner())
}
