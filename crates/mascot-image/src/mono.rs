//! 1-bit image buffer.

/// Owned black/white image, row-major, `true` = white.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonoImage {
    width: u32,
    height: u32,
    pixels: Vec<bool>,
}

impl MonoImage {
    /// All-black image of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![false; width as usize * height as usize],
        }
    }

    /// Build an image by evaluating `f(x, y)` (true = white) for every pixel.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> bool) -> Self {
        let mut pixels = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn index(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) out of bounds for {}x{}",
            self.width,
            self.height
        );
        y as usize * self.width as usize + x as usize
    }

    /// Whether the pixel at `(x, y)` is white. Panics when out of bounds.
    pub fn is_white(&self, x: u32, y: u32) -> bool {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at `(x, y)`. Panics when out of bounds.
    pub fn set(&mut self, x: u32, y: u32, white: bool) {
        let idx = self.index(x, y);
        self.pixels[idx] = white;
    }

    /// One row of pixels, left to right.
    pub fn row(&self, y: u32) -> &[bool] {
        let start = self.index(0, y);
        &self.pixels[start..start + self.width as usize]
    }

    pub fn count_white(&self) -> usize {
        self.pixels.iter().filter(|&&p| p).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_all_black() {
        let img = MonoImage::new(4, 3);
        assert_eq!(img.dimensions(), (4, 3));
        assert_eq!(img.count_white(), 0);
    }

    #[test]
    fn from_fn_is_row_major() {
        let img = MonoImage::from_fn(3, 2, |x, y| x == 2 && y == 1);
        assert!(img.is_white(2, 1));
        assert!(!img.is_white(1, 1));
        assert_eq!(img.row(1), &[false, false, true]);
        assert_eq!(img.count_white(), 1);
    }

    #[test]
    fn set_toggles_single_pixel() {
        let mut img = MonoImage::new(2, 2);
        img.set(1, 0, true);
        assert!(img.is_white(1, 0));
        img.set(1, 0, false);
        assert_eq!(img, MonoImage::new(2, 2));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn out_of_bounds_panics() {
        let img = MonoImage::new(2, 2);
        img.is_white(2, 0);
    }
}
