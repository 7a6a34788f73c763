//! RGBA canvas to 1-bit conversion.

use std::fmt;

use image::RgbaImage;
use tracing::debug;

use crate::MonoImage;
use crate::dither::{floyd_steinberg_dither, threshold_convert};
use crate::gray::{enhance_contrast, normalized_grayscale};

/// Default cut-off for [`Method::Threshold`].
pub const DEFAULT_THRESHOLD: i32 = 100;

/// Contrast factor applied before thresholding.
const THRESHOLD_CONTRAST: f32 = 2.5;

/// Contrast factor applied before dithering. Milder, since diffusion
/// already preserves tone.
const DITHER_CONTRAST: f32 = 2.0;

/// Binarization strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Hard cut: white where the enhanced level is above `threshold`.
    Threshold { threshold: i32 },
    /// Floyd-Steinberg error diffusion.
    Dither,
}

impl Default for Method {
    fn default() -> Self {
        Method::Threshold {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Threshold { threshold } => write!(f, "threshold={threshold}"),
            Method::Dither => f.write_str("Floyd-Steinberg dithering"),
        }
    }
}

/// Reduce the composed canvas to black and white.
pub fn to_monochrome(canvas: &RgbaImage, method: Method) -> MonoImage {
    debug!(%method, width = canvas.width(), height = canvas.height(), "Converting to monochrome");
    let gray = normalized_grayscale(canvas);

    match method {
        Method::Threshold { threshold } => {
            let enhanced = enhance_contrast(&gray, THRESHOLD_CONTRAST);
            threshold_convert(&enhanced, threshold)
        }
        Method::Dither => {
            let enhanced = enhance_contrast(&gray, DITHER_CONTRAST);
            floyd_steinberg_dither(&enhanced)
        }
    }
}
