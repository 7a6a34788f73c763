//! Aspect-preserving downscale into a bounding box.
//!
//! Uses Lanczos3 filtering so the later threshold step sees an
//! alias-free image.

use image::DynamicImage;
use image::imageops::FilterType;
use tracing::debug;

/// Compute the size an image of `width`x`height` shrinks to so that it
/// fits inside `max_w`x`max_h`.
///
/// Never upscales. The free dimension is rounded to whichever of floor
/// or ceil keeps the aspect ratio closest to the source, and is at least 1.
pub fn thumbnail_size(width: u32, height: u32, max_w: u32, max_h: u32) -> (u32, u32) {
    if width <= max_w && height <= max_h {
        return (width, height);
    }

    let aspect = f64::from(width) / f64::from(height);
    let (bw, bh) = (f64::from(max_w), f64::from(max_h));

    if bw / bh >= aspect {
        // Height-bound: pick the width whose ratio to max_h is nearest.
        let new_w = closest(bh * aspect, |n| (aspect - n / bh).abs());
        (new_w, max_h)
    } else {
        let new_h = closest(bw / aspect, |n| {
            if n == 0.0 { 0.0 } else { (aspect - bw / n).abs() }
        });
        (max_w, new_h)
    }
}

fn closest(value: f64, error: impl Fn(f64) -> f64) -> u32 {
    let (lo, hi) = (value.floor(), value.ceil());
    let best = if error(hi) < error(lo) { hi } else { lo };
    (best as u32).max(1)
}

/// Shrink an image to fit within `max_w`x`max_h`, keeping its aspect ratio.
///
/// Returns the original image unchanged if it already fits.
pub fn fit_within(img: &DynamicImage, max_w: u32, max_h: u32) -> DynamicImage {
    let (orig_w, orig_h) = (img.width(), img.height());
    let (new_width, new_height) = thumbnail_size(orig_w, orig_h, max_w, max_h);

    if (new_width, new_height) == (orig_w, orig_h) {
        debug!(orig_w, orig_h, "Image already fits, skipping resize");
        return img.clone();
    }

    debug!(
        orig_w,
        orig_h,
        new_width,
        new_height,
        "Resizing image to fit canvas"
    );

    img.resize_exact(new_width, new_height, FilterType::Lanczos3)
}
