//! Near-white transparency filter.

use image::RgbaImage;
use rayon::prelude::*;

/// Channel intensity above which a pixel counts as near-white.
pub(super) const NEAR_WHITE_THRESHOLD: u8 = 240;

const PARALLEL_PIXEL_THRESHOLD: usize = 32 * 1024;

/// Replace every near-white pixel with fully transparent white.
///
/// Pure per-pixel map with no spatial context: a pixel is cleared iff all of
/// red, green and blue exceed [`NEAR_WHITE_THRESHOLD`]. Every other pixel keeps
/// all four channels, including its original alpha.
pub(super) fn clear_near_white(img: &mut RgbaImage) {
    let pixel_count = img.width() as usize * img.height() as usize;
    let raw: &mut [u8] = img;

    if pixel_count >= PARALLEL_PIXEL_THRESHOLD {
        raw.par_chunks_exact_mut(4).for_each(clear_pixel);
    } else {
        raw.chunks_exact_mut(4).for_each(clear_pixel);
    }
}

#[inline]
fn clear_pixel(pixel: &mut [u8]) {
    if pixel[0] > NEAR_WHITE_THRESHOLD
        && pixel[1] > NEAR_WHITE_THRESHOLD
        && pixel[2] > NEAR_WHITE_THRESHOLD
    {
        pixel.copy_from_slice(&[255, 255, 255, 0]);
    }
}
