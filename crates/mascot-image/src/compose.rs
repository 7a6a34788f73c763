//! Canvas composition: center the scaled character on a fixed-size field.

use image::{DynamicImage, Rgba, RgbaImage};
use tracing::debug;

/// Paste `img` centered onto a `width`x`height` canvas filled with `background`.
///
/// The offset is `((width - w) / 2, (height - h) / 2)` with floor division.
/// Pasted pixels replace the canvas pixels as-is, including alpha.
pub fn center_on_canvas(
    img: &DynamicImage,
    width: u32,
    height: u32,
    background: Rgba<u8>,
) -> RgbaImage {
    let mut canvas = RgbaImage::from_pixel(width, height, background);

    let top = img.to_rgba8();
    let x_off = width.saturating_sub(top.width()) / 2;
    let y_off = height.saturating_sub(top.height()) / 2;
    debug!(width, height, x_off, y_off, "Centering image on canvas");

    for (dx, dy, pixel) in top.enumerate_pixels() {
        let target_x = x_off + dx;
        let target_y = y_off + dy;
        if target_x < width && target_y < height {
            canvas.put_pixel(target_x, target_y, *pixel);
        }
    }

    canvas
}
