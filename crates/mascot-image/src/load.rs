//! Source artwork loading.

use std::path::Path;

use image::{DynamicImage, ImageReader};
use tracing::debug;

use crate::{MascotImageError, Result};

/// Decode the raster at `path`, keeping its native color type.
///
/// The format is sniffed from the file contents, so a mislabelled
/// extension still decodes.
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    let reader = ImageReader::open(path)
        .map_err(|source| MascotImageError::Open {
            path: path.to_path_buf(),
            source,
        })?
        .with_guessed_format()
        .map_err(|source| MascotImageError::Open {
            path: path.to_path_buf(),
            source,
        })?;

    let img = reader.decode().map_err(|source| MascotImageError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(
        width = img.width(),
        height = img.height(),
        color = ?img.color(),
        "Decoded source image"
    );
    Ok(img)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};
    use std::path::PathBuf;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("mascot-image-load-{}-{name}", std::process::id()))
    }

    #[test]
    fn test_load_missing_file_is_open_error() {
        let path = scratch_path("does-not-exist.png");
        let err = load_image(&path).unwrap_err();
        assert!(matches!(err, MascotImageError::Open { .. }), "got {err:?}");
    }

    #[test]
    fn test_load_garbage_is_decode_error() {
        let path = scratch_path("garbage.png");
        std::fs::write(&path, b"definitely not a raster image").unwrap();
        let err = load_image(&path).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(matches!(err, MascotImageError::Decode { .. }), "got {err:?}");
    }

    #[test]
    fn test_load_png_keeps_dimensions_and_color() {
        let path = scratch_path("ok.png");
        let img = RgbImage::from_pixel(7, 5, Rgb([10, 20, 30]));
        img.save(&path).unwrap();

        let loaded = load_image(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!((loaded.width(), loaded.height()), (7, 5));
        assert_eq!(loaded.color(), image::ColorType::Rgb8);
        assert_eq!(loaded.to_rgb8().get_pixel(3, 2), &Rgb([10, 20, 30]));
    }
}
