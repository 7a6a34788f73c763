//! 1-bit PNG previews of packed bitmaps.
//!
//! A 1-bit grayscale PNG stores rows MSB-first with 1 = white and each row
//! padded to a whole byte, which is exactly the [`PackedBitmap`] layout.

use tracing::debug;

use crate::{PackedBitmap, Result};

/// Encode `bitmap` as a 1-bit grayscale PNG.
pub fn encode_preview(bitmap: &PackedBitmap) -> Result<Vec<u8>> {
    let mut output = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut output, bitmap.width(), bitmap.height());
        encoder.set_color(png::ColorType::Grayscale);
        encoder.set_depth(png::BitDepth::One);

        let mut writer = encoder.write_header()?;
        writer.write_image_data(bitmap.bytes())?;
        writer.finish()?;
    }

    debug!(
        width = bitmap.width(),
        height = bitmap.height(),
        size = output.len(),
        "Encoded preview PNG"
    );
    Ok(output)
}
