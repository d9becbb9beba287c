//! SVG wrapper generation.
//!
//! The SVG is a raster embed, not vector art: a fixed-size `<svg>` root with a
//! single `<image>` element carrying the PNG as a base64 data URI.

use base64::prelude::*;

/// Wrap PNG bytes in an SVG document sized to the image's pixel dimensions.
pub(super) fn wrap_png(width: u32, height: u32, png: &[u8]) -> String {
    let payload = BASE64_STANDARD.encode(png);
    format!(
        r#"<svg width="{width}" height="{height}" viewBox="0 0 {width} {height}" xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink">
    <image width="{width}" height="{height}" xlink:href="data:image/png;base64,{payload}"/>
</svg>"#
    )
}
