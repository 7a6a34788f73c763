//! "Worried" expression: dashed worry lines across the forehead.

use tracing::debug;

use crate::MonoImage;

/// Rows of the two worry lines as fractions of the image height.
const LINE_ROWS: [f64; 2] = [0.12, 0.15];
/// Horizontal extent of the lines as fractions of the image width.
const LINE_START: f64 = 0.30;
const LINE_END: f64 = 0.70;
/// Every `DASH_PERIOD`th column is left untouched.
const DASH_PERIOD: u32 = 3;

fn scaled(dim: u32, frac: f64) -> u32 {
    (f64::from(dim) * frac).round() as u32
}

/// Derive the worried variant from the normal bitmap.
///
/// On rows `round(0.12h)` and `round(0.15h)`, columns `round(0.3w)` up to
/// (excluding) `round(0.7w)` are set black wherever `x % 3 != 0`. All other
/// pixels are copied unchanged.
pub fn generate_worried(normal: &MonoImage) -> MonoImage {
    let (w, h) = normal.dimensions();
    let mut worried = normal.clone();

    let x_start = scaled(w, LINE_START);
    let x_end = scaled(w, LINE_END).min(w);

    for frac in LINE_ROWS {
        let y = scaled(h, frac);
        if y >= h {
            continue;
        }
        debug!(y, x_start, x_end, "Drawing worry line");
        for x in x_start..x_end {
            if x % DASH_PERIOD != 0 {
                worried.set(x, y, false);
            }
        }
    }

    worried
}
