//! C header rendering.

use tracing::debug;

use crate::PackedBitmap;

/// Byte literals per line in the array initializer.
const BYTES_PER_LINE: usize = 16;

/// A packed bitmap with the C identifier it is emitted under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedBitmap {
    pub name: String,
    pub bitmap: PackedBitmap,
}

impl NamedBitmap {
    pub fn new(name: impl Into<String>, bitmap: PackedBitmap) -> Self {
        Self {
            name: name.into(),
            bitmap,
        }
    }

    /// Render as a commented `PROGMEM` array declaration (no trailing newline).
    ///
    /// ```text
    /// // hiki_normal: 100x130, 1690 bytes
    /// static const unsigned char hiki_normal[] PROGMEM = {
    ///     0xFF, 0x00, ...,
    /// };
    /// ```
    pub fn to_c_array(&self) -> String {
        let bytes = self.bitmap.bytes();

        let mut lines = vec![
            format!(
                "// {}: {}x{}, {} bytes",
                self.name,
                self.bitmap.width(),
                self.bitmap.height(),
                bytes.len()
            ),
            format!("static const unsigned char {}[] PROGMEM = {{", self.name),
        ];
        for chunk in bytes.chunks(BYTES_PER_LINE) {
            let hex_vals: Vec<String> = chunk.iter().map(|b| format!("0x{b:02X}")).collect();
            lines.push(format!("    {},", hex_vals.join(", ")));
        }
        lines.push("};".to_string());
        lines.join("\n")
    }
}

/// Render the complete header: include guard, banner, size macros and one
/// array per bitmap, separated by blank lines.
pub fn render_header(source_name: &str, width: u32, height: u32, bitmaps: &[NamedBitmap]) -> String {
    debug!(source_name, width, height, count = bitmaps.len(), "Rendering header");

    let mut out = format!(
        "#pragma once\n\
         // Auto-generated by png-to-bitmap from {source_name}\n\
         // Mascot bitmaps for e-ink display (400x300, monochrome)\n\
         // Format: MSB-first, 1=WHITE 0=BLACK (matches Paint_DrawImage)\n\
         \n\
         #define MASCOT_W {width}\n\
         #define MASCOT_H {height}\n"
    );

    for bitmap in bitmaps {
        out.push('\n');
        out.push_str(&bitmap.to_c_array());
        out.push('\n');
    }

    out
}
