//! Binarization of grayscale images.
//!
//! Provides Floyd-Steinberg error-diffusion dithering and simple threshold conversion.

use image::GrayImage;
use tracing::debug;

use crate::MonoImage;

/// Quantization midpoint for error diffusion.
const MIDPOINT: f32 = 127.5;

/// Apply Floyd-Steinberg dithering to a grayscale image.
///
/// Pixels are visited in row-major order. Error distribution pattern:
/// - Right:        7/16
/// - Bottom-left:  3/16
/// - Bottom:       5/16
/// - Bottom-right: 1/16
pub fn floyd_steinberg_dither(img: &GrayImage) -> MonoImage {
    let (width, height) = img.dimensions();
    debug!(width, height, "Applying Floyd-Steinberg dithering");

    // Accumulated error can leave [0, 255] before a pixel is visited.
    let mut buffer: Vec<Vec<f32>> = (0..height)
        .map(|y| {
            (0..width)
                .map(|x| f32::from(img.get_pixel(x, y).0[0]))
                .collect()
        })
        .collect();

    let mut output = MonoImage::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let old_pixel = buffer[y as usize][x as usize].clamp(0.0, 255.0);
            let white = old_pixel > MIDPOINT;
            let new_pixel = if white { 255.0 } else { 0.0 };
            output.set(x, y, white);

            distribute_error(&mut buffer, x, y, width, height, old_pixel - new_pixel);
        }
    }

    debug!(white = output.count_white(), "Floyd-Steinberg dithering complete");
    output
}

/// Distribute quantization error to neighboring pixels not yet visited.
fn distribute_error(
    buffer: &mut [Vec<f32>],
    x: u32,
    y: u32,
    width: u32,
    height: u32,
    error: f32,
) {
    let xu = x as usize;
    let yu = y as usize;

    // Right: 7/16
    if x + 1 < width {
        buffer[yu][xu + 1] += error * 7.0 / 16.0;
    }
    // Bottom-left: 3/16
    if x > 0 && y + 1 < height {
        buffer[yu + 1][xu - 1] += error * 3.0 / 16.0;
    }
    // Bottom: 5/16
    if y + 1 < height {
        buffer[yu + 1][xu] += error * 5.0 / 16.0;
    }
    // Bottom-right: 1/16
    if x + 1 < width && y + 1 < height {
        buffer[yu + 1][xu + 1] += error / 16.0;
    }
}

/// Simple threshold conversion without dithering.
///
/// Pixels strictly brighter than `threshold` become white, others black.
/// A threshold of 255 or more gives all black; a negative one all white.
pub fn threshold_convert(img: &GrayImage, threshold: i32) -> MonoImage {
    let (width, height) = img.dimensions();
    debug!(width, height, threshold, "Applying threshold conversion");

    MonoImage::from_fn(width, height, |x, y| {
        i32::from(img.get_pixel(x, y).0[0]) > threshold
    })
}
