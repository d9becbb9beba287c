//! The one-shot processing pipeline.

use std::fs;

use anyhow::{Context, Result};

use crate::job::JobPaths;
use crate::log;
use crate::logo::{encode, svg, transparency};

/// Run the full pipeline: decode, filter, write PNG, write SVG wrapper.
///
/// A missing source file is reported and swallowed: no outputs are produced
/// and the process still exits cleanly. Every other failure propagates.
pub fn process_logo(paths: &JobPaths) -> Result<()> {
    log!("logo"; "processing {}", paths.source.display());

    if !paths.source.exists() {
        log!("error"; "source file not found at {}", paths.source.display());
        return Ok(());
    }

    let mut img = image::open(&paths.source)
        .with_context(|| format!("failed to decode {}", paths.source.display()))?
        .to_rgba8();

    transparency::clear_near_white(&mut img);

    let png = encode::encode_png(&img)?;
    fs::write(&paths.png, &png)
        .with_context(|| format!("failed to write {}", paths.png.display()))?;
    log!("png"; "saved transparent PNG to {}", paths.png.display());

    let document = svg::wrap_png(img.width(), img.height(), &png);
    fs::write(&paths.svg, document)
        .with_context(|| format!("failed to write {}", paths.svg.display()))?;
    log!("svg"; "saved SVG to {}", paths.svg.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use base64::prelude::*;
    use image::{Rgba, RgbaImage};
    use tempfile::TempDir;

    use super::process_logo;
    use crate::job::JobPaths;

    fn make_paths(dir: &Path) -> JobPaths {
        JobPaths {
            source: dir.join("source.png"),
            png: dir.join("logo.png"),
            svg: dir.join("logo.svg"),
        }
    }

    /// White border around a solid blue core.
    fn write_source(path: &Path) {
        let mut img = RgbaImage::from_pixel(4, 4, Rgba([255, 255, 255, 255]));
        for x in 1..=2 {
            for y in 1..=2 {
                img.put_pixel(x, y, Rgba([0, 0, 200, 255]));
            }
        }
        img.save(path).unwrap();
    }

    #[test]
    fn writes_transparent_png_and_svg_wrapper() {
        let dir = TempDir::new().unwrap();
        let paths = make_paths(dir.path());
        write_source(&paths.source);

        process_logo(&paths).unwrap();

        let out = image::open(&paths.png).unwrap().to_rgba8();
        assert_eq!(out.dimensions(), (4, 4));
        assert_eq!(out.get_pixel(0, 0), &Rgba([255, 255, 255, 0]));
        assert_eq!(out.get_pixel(1, 1), &Rgba([0, 0, 200, 255]));

        let svg = fs::read_to_string(&paths.svg).unwrap();
        assert!(svg.starts_with(r#"<svg width="4" height="4" viewBox="0 0 4 4""#));
    }

    #[test]
    fn svg_payload_matches_png_file_bytes() {
        let dir = TempDir::new().unwrap();
        let paths = make_paths(dir.path());
        write_source(&paths.source);

        process_logo(&paths).unwrap();

        let svg = fs::read_to_string(&paths.svg).unwrap();
        let start = svg.find("base64,").unwrap() + "base64,".len();
        let end = start + svg[start..].find('"').unwrap();
        let payload = BASE64_STANDARD.decode(&svg[start..end]).unwrap();

        assert_eq!(payload, fs::read(&paths.png).unwrap());
    }

    #[test]
    fn missing_source_produces_no_outputs() {
        let dir = TempDir::new().unwrap();
        let paths = make_paths(dir.path());

        process_logo(&paths).unwrap();

        assert!(!paths.png.exists());
        assert!(!paths.svg.exists());
    }

    #[test]
    fn reruns_produce_identical_png_bytes() {
        let dir = TempDir::new().unwrap();
        let paths = make_paths(dir.path());
        write_source(&paths.source);

        process_logo(&paths).unwrap();
        let first = fs::read(&paths.png).unwrap();

        process_logo(&paths).unwrap();
        assert_eq!(fs::read(&paths.png).unwrap(), first);
    }

    #[test]
    fn existing_outputs_are_overwritten() {
        let dir = TempDir::new().unwrap();
        let paths = make_paths(dir.path());
        write_source(&paths.source);
        fs::write(&paths.png, b"stale").unwrap();
        fs::write(&paths.svg, b"stale").unwrap();

        process_logo(&paths).unwrap();

        assert!(image::open(&paths.png).is_ok());
        assert!(fs::read_to_string(&paths.svg).unwrap().starts_with("<svg"));
    }
}
