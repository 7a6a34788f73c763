//! Image pipeline for turning the mascot artwork into 1-bit e-ink bitmaps.
//!
//! Provides loading, cropping, aspect-preserving fit onto a fixed canvas,
//! weighted grayscale with contrast stretch, threshold and Floyd-Steinberg
//! binarization, and the "worried" expression overlay.

pub mod compose;
pub mod convert;
pub mod crop;
pub mod dither;
pub mod gray;
pub mod load;
pub mod mono;
pub mod resize;
pub mod worried;

use std::path::PathBuf;

// Re-exports for convenience
pub use compose::center_on_canvas;
pub use convert::{DEFAULT_THRESHOLD, Method, to_monochrome};
pub use crop::crop_character;
pub use dither::{floyd_steinberg_dither, threshold_convert};
pub use gray::{enhance_contrast, normalized_grayscale};
pub use load::load_image;
pub use mono::MonoImage;
pub use resize::{fit_within, thumbnail_size};
pub use worried::generate_worried;

/// Canvas width in pixels (`MASCOT_W` in the generated header).
pub const CANVAS_WIDTH: u32 = 100;

/// Canvas height in pixels (`MASCOT_H` in the generated header).
pub const CANVAS_HEIGHT: u32 = 130;

/// Background fill for the canvas. The source art sits on a blue field.
pub const BACKGROUND: image::Rgba<u8> = image::Rgba([0, 0, 255, 255]);

/// Errors that can occur while reading the source artwork.
#[derive(Debug, thiserror::Error)]
pub enum MascotImageError {
    #[error("Failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Result type alias for mascot-image operations.
pub type Result<T> = std::result::Result<T, MascotImageError>;
