//! Weighted grayscale and contrast helpers shared by both binarizers.

use image::{GrayImage, Luma, RgbaImage};
use tracing::debug;

/// Red and green carry the character; blue is mostly background.
const WEIGHT_R: f64 = 0.4;
const WEIGHT_G: f64 = 0.4;
const WEIGHT_B: f64 = 0.2;

/// Blue-suppressing luminance of one pixel.
pub fn weighted_luma(r: u8, g: u8, b: u8) -> f64 {
    WEIGHT_R * f64::from(r) + WEIGHT_G * f64::from(g) + WEIGHT_B * f64::from(b)
}

/// Convert to grayscale with [`weighted_luma`], then stretch the result so
/// the darkest pixel becomes 0 and the brightest 255.
///
/// A uniform image has no span; it maps to all zeros. Alpha is ignored.
pub fn normalized_grayscale(img: &RgbaImage) -> GrayImage {
    let (width, height) = img.dimensions();

    let values: Vec<f64> = img
        .pixels()
        .map(|p| weighted_luma(p.0[0], p.0[1], p.0[2]))
        .collect();

    let min_val = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max_val = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = if max_val > min_val {
        max_val - min_val
    } else {
        1.0
    };
    debug!(width, height, min_val, max_val, "Normalizing weighted grayscale");

    GrayImage::from_fn(width, height, |x, y| {
        let v = values[y as usize * width as usize + x as usize];
        Luma([((v - min_val) / span * 255.0).round().clamp(0.0, 255.0) as u8])
    })
}

/// Mean gray level, rounded half up.
pub fn mean_level(img: &GrayImage) -> u8 {
    let count = u64::from(img.width()) * u64::from(img.height());
    if count == 0 {
        return 0;
    }
    let sum: u64 = img.pixels().map(|p| u64::from(p.0[0])).sum();
    ((sum as f64 / count as f64) + 0.5).floor().min(255.0) as u8
}

/// Push every pixel away from the image mean by `factor`.
///
/// `out = clamp(mean + factor * (v - mean), 0, 255)`, truncated.
pub fn enhance_contrast(img: &GrayImage, factor: f32) -> GrayImage {
    let mean = f32::from(mean_level(img));
    debug!(mean, factor, "Enhancing contrast");

    let mut output = img.clone();
    for pixel in output.pixels_mut() {
        let v = f32::from(pixel.0[0]);
        let stretched = (mean + factor * (v - mean)).clamp(0.0, 255.0);
        *pixel = Luma([stretched as u8]);
    }
    output
}
