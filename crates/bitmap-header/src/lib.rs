//! Packed 1-bit bitmaps and their C header representation.
//!
//! Packs [`mascot_image::MonoImage`] rows MSB-first (1 = white), renders
//! `PROGMEM` byte arrays for the e-ink firmware, and encodes matching
//! 1-bit PNG previews.

pub mod emit;
pub mod pack;
pub mod preview;

// Re-exports for convenience
pub use emit::{NamedBitmap, render_header};
pub use pack::{PackedBitmap, bytes_per_row, pack, unpack};
pub use preview::encode_preview;

/// Errors that can occur while producing header artifacts.
#[derive(Debug, thiserror::Error)]
pub enum HeaderError {
    #[error("PNG encoding error: {0}")]
    Png(#[from] png::EncodingError),
}

/// Result type alias for bitmap-header operations.
pub type Result<T> = std::result::Result<T, HeaderError>;
