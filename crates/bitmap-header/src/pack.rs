//! MSB-first bit packing.

use mascot_image::MonoImage;
use tracing::debug;

/// Bytes needed for one row of `width` pixels. Rows never share a byte.
pub fn bytes_per_row(width: u32) -> usize {
    width.div_ceil(8) as usize
}

/// Row-major packed 1-bit image: bit 7 of each byte is the leftmost pixel,
/// 1 = white, 0 = black. Bits past the row width are 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedBitmap {
    width: u32,
    height: u32,
    bytes: Vec<u8>,
}

impl PackedBitmap {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Bytes of row `y`.
    pub fn row(&self, y: u32) -> &[u8] {
        let stride = bytes_per_row(self.width);
        let start = y as usize * stride;
        &self.bytes[start..start + stride]
    }
}

/// Pack up to 8 pixels into one byte (MSB first, white = 1).
fn byte_encode_msb(pixels: &[bool]) -> u8 {
    pixels
        .iter()
        .enumerate()
        .filter(|&(_, &white)| white)
        .fold(0u8, |acc, (i, _)| acc | (0x80 >> i))
}

/// Pack a monochrome image row by row.
pub fn pack(img: &MonoImage) -> PackedBitmap {
    let (width, height) = img.dimensions();
    let stride = bytes_per_row(width);

    let mut bytes = Vec::with_capacity(stride * height as usize);
    if width > 0 {
        for y in 0..height {
            bytes.extend(img.row(y).chunks(8).map(byte_encode_msb));
        }
    }
    debug!(width, height, len = bytes.len(), "Packed bitmap");

    PackedBitmap {
        width,
        height,
        bytes,
    }
}

/// Inverse of [`pack`]; padding bits are ignored.
pub fn unpack(packed: &PackedBitmap) -> MonoImage {
    let stride = bytes_per_row(packed.width);
    MonoImage::from_fn(packed.width, packed.height, |x, y| {
        let byte = packed.bytes[y as usize * stride + (x / 8) as usize];
        byte & (0x80 >> (x % 8)) != 0
    })
}
