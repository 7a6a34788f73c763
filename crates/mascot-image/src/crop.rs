//! Cropping the character out of the decorative border.

use image::DynamicImage;
use tracing::debug;

/// Left edge as a fraction of the source width.
const LEFT: f64 = 0.15;
/// Right edge as a fraction of the source width.
const RIGHT: f64 = 0.85;
/// Top edge as a fraction of the source height.
const TOP: f64 = 0.10;
/// Bottom edge as a fraction of the source height.
const BOTTOM: f64 = 0.72;

/// Pixel rectangle `(x, y, width, height)` of the character area.
///
/// Each edge is `floor(fraction * dimension)`.
pub fn crop_box(width: u32, height: u32) -> (u32, u32, u32, u32) {
    let edge = |dim: u32, frac: f64| (f64::from(dim) * frac).floor() as u32;

    let left = edge(width, LEFT);
    let right = edge(width, RIGHT);
    let top = edge(height, TOP);
    let bottom = edge(height, BOTTOM);

    (left, top, right - left, bottom - top)
}

/// Crop to the character area, discarding the background margins.
pub fn crop_character(img: &DynamicImage) -> DynamicImage {
    let (x, y, w, h) = crop_box(img.width(), img.height());
    debug!(
        orig_w = img.width(),
        orig_h = img.height(),
        x,
        y,
        w,
        h,
        "Cropping to character area"
    );
    img.crop_imm(x, y, w, h)
}
