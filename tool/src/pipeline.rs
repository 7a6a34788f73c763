//! End-to-end conversion: source artwork to header text and previews.
//!
//! Everything is computed in memory first; files are only touched by
//! [`write_artifacts`], after the whole pipeline has succeeded.

use std::path::{Path, PathBuf};

use anyhow::Context;
use bitmap_header::{NamedBitmap, bytes_per_row, encode_preview, pack, render_header};
use image::{DynamicImage, RgbaImage};
use mascot_image::{
    BACKGROUND, CANVAS_HEIGHT, CANVAS_WIDTH, Method, center_on_canvas, crop_character, fit_within,
    generate_worried, to_monochrome,
};
use tracing::{info, warn};

use crate::config::ToolConfig;

/// C identifier of the default expression.
pub const NORMAL_NAME: &str = "hiki_normal";
/// C identifier of the worried expression.
pub const WORRIED_NAME: &str = "hiki_worried";

/// All outputs of one run, ready to be written.
#[derive(Debug, Clone)]
pub struct Artifacts {
    pub normal: NamedBitmap,
    pub worried: NamedBitmap,
    pub header: String,
    pub normal_preview: Vec<u8>,
    pub worried_preview: Vec<u8>,
}

/// Crop, shrink and center the source artwork on the mascot canvas.
pub fn compose_canvas(source: &DynamicImage) -> RgbaImage {
    let cropped = crop_character(source);
    info!("  Cropped: {}x{}", cropped.width(), cropped.height());

    let scaled = fit_within(&cropped, CANVAS_WIDTH, CANVAS_HEIGHT);
    let canvas = center_on_canvas(&scaled, CANVAS_WIDTH, CANVAS_HEIGHT, BACKGROUND);
    info!("  Canvas: {CANVAS_WIDTH}x{CANVAS_HEIGHT}");
    canvas
}

/// Run the monochrome, worried, packing and emitting stages on a composed canvas.
pub fn artifacts_from_canvas(
    canvas: &RgbaImage,
    method: Method,
    source_name: &str,
) -> anyhow::Result<Artifacts> {
    let mono = to_monochrome(canvas, method);
    info!("  Method: {method}");

    let worried = generate_worried(&mono);

    let normal = NamedBitmap::new(NORMAL_NAME, pack(&mono));
    let worried = NamedBitmap::new(WORRIED_NAME, pack(&worried));

    let normal_preview =
        encode_preview(&normal.bitmap).context("Failed to encode normal preview")?;
    let worried_preview =
        encode_preview(&worried.bitmap).context("Failed to encode worried preview")?;

    let header = render_header(
        source_name,
        canvas.width(),
        canvas.height(),
        &[normal.clone(), worried.clone()],
    );

    Ok(Artifacts {
        normal,
        worried,
        header,
        normal_preview,
        worried_preview,
    })
}

/// Run the full pipeline on decoded source artwork.
pub fn build_artifacts(
    source: &DynamicImage,
    method: Method,
    source_name: &str,
) -> anyhow::Result<Artifacts> {
    let canvas = compose_canvas(source);
    artifacts_from_canvas(&canvas, method, source_name)
}

/// Sibling path an output is staged at before it is renamed into place.
fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

fn remove_staged(staged: &[PathBuf]) {
    for tmp in staged {
        if let Err(e) = std::fs::remove_file(tmp) {
            warn!("Failed to remove {}: {e}", tmp.display());
        }
    }
}

/// Write both previews and the header.
///
/// Each output is first written to a `.tmp` file beside its target. Targets
/// are only replaced once all three staged writes have succeeded, so a
/// missing or unwritable directory leaves no output behind.
pub fn write_artifacts(artifacts: &Artifacts, config: &ToolConfig) -> anyhow::Result<()> {
    let outputs: [(&Path, &[u8]); 3] = [
        (config.preview_normal.as_path(), artifacts.normal_preview.as_slice()),
        (config.preview_worried.as_path(), artifacts.worried_preview.as_slice()),
        (config.header.as_path(), artifacts.header.as_bytes()),
    ];

    let mut staged = Vec::with_capacity(outputs.len());
    for &(path, data) in &outputs {
        let tmp = staging_path(path);
        if let Err(e) = std::fs::write(&tmp, data) {
            remove_staged(&staged);
            return Err(e).with_context(|| format!("Failed to write {}", path.display()));
        }
        staged.push(tmp);
    }

    for (i, (path, _)) in outputs.iter().enumerate() {
        if let Err(e) = std::fs::rename(&staged[i], path) {
            remove_staged(&staged[i..]);
            return Err(e).with_context(|| format!("Failed to write {}", path.display()));
        }
    }

    info!("  Preview: {}", config.preview_normal.display());
    info!("  Worried preview: {}", config.preview_worried.display());
    info!("  Header: {}", config.header.display());

    let bytes_per = bytes_per_row(CANVAS_WIDTH) * CANVAS_HEIGHT as usize;
    info!("  Size per bitmap: {bytes_per} bytes");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage, Rgba};

    const EXPECTED_LEN: usize = 130 * 13;

    fn scratch_dir(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("png-to-bitmap-{}-{name}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    /// White disc on a blue field, roughly like the real artwork.
    fn mascot_like_source() -> DynamicImage {
        let img = RgbImage::from_fn(400, 400, |x, y| {
            let (dx, dy) = (x as i32 - 200, y as i32 - 160);
            if dx * dx + dy * dy < 90 * 90 {
                Rgb([250, 240, 230])
            } else {
                Rgb([20, 40, 220])
            }
        });
        DynamicImage::ImageRgb8(img)
    }

    #[test]
    fn compose_canvas_has_fixed_size_and_blue_border() {
        // 400x400 -> 280x248 crop -> 100x89 thumbnail -> y offset 20
        let canvas = compose_canvas(&mascot_like_source());
        assert_eq!(canvas.dimensions(), (100, 130));
        assert_eq!(canvas.get_pixel(50, 0), &BACKGROUND);
        assert_eq!(canvas.get_pixel(50, 19), &BACKGROUND);
        assert_ne!(canvas.get_pixel(50, 20), &BACKGROUND);
        assert_eq!(canvas.get_pixel(50, 129), &BACKGROUND);
    }

    #[test]
    fn uniform_canvas_packs_to_all_black() {
        // No foreground: the normalization span collapses and every level is 0.
        let canvas = RgbaImage::from_pixel(100, 130, Rgba([255, 255, 255, 255]));
        let artifacts = artifacts_from_canvas(&canvas, Method::default(), "blank.png").unwrap();

        assert_eq!(artifacts.normal.bitmap.len(), EXPECTED_LEN);
        assert!(artifacts.normal.bitmap.bytes().iter().all(|&b| b == 0x00));
        assert_eq!(artifacts.worried.bitmap, artifacts.normal.bitmap);
    }

    #[test]
    fn mascot_source_produces_two_full_size_arrays() {
        for method in [Method::default(), Method::Dither] {
            let artifacts = build_artifacts(&mascot_like_source(), method, "hiki-ava.png").unwrap();

            assert_eq!(artifacts.normal.bitmap.len(), EXPECTED_LEN);
            assert_eq!(artifacts.worried.bitmap.len(), EXPECTED_LEN);
            assert_eq!(artifacts.header.matches("static const unsigned char").count(), 2);
            assert!(artifacts.header.contains("// hiki_normal: 100x130, 1690 bytes\n"));
            assert!(artifacts.header.contains("// hiki_worried: 100x130, 1690 bytes\n"));
            assert!(artifacts.header.contains("#define MASCOT_W 100\n#define MASCOT_H 130\n"));
            assert!(artifacts.header.starts_with("#pragma once\n"));
        }
    }

    #[test]
    fn threshold_mascot_is_white_inside_black_outside() {
        let artifacts = build_artifacts(&mascot_like_source(), Method::default(), "x.png").unwrap();
        let mono = bitmap_header::unpack(&artifacts.normal.bitmap);
        // Disc center lands near (50, 65) on the canvas; corners are background.
        assert!(mono.is_white(50, 65));
        assert!(!mono.is_white(0, 0));
        assert!(!mono.is_white(99, 129));
    }

    #[test]
    fn worried_differs_only_on_forehead_rows() {
        let artifacts = build_artifacts(&mascot_like_source(), Method::default(), "x.png").unwrap();
        let normal = &artifacts.normal.bitmap;
        let worried = &artifacts.worried.bitmap;
        for y in 0..130 {
            if y != 16 && y != 20 {
                assert_eq!(normal.row(y), worried.row(y), "row {y}");
            }
        }
    }

    #[test]
    fn write_artifacts_writes_all_three_files() {
        let dir = scratch_dir("write");
        std::fs::create_dir_all(dir.join("src")).unwrap();
        std::fs::create_dir_all(dir.join("tools")).unwrap();
        let config = ToolConfig::with_root(&dir);

        let artifacts = build_artifacts(&mascot_like_source(), Method::Dither, "hiki-ava.png").unwrap();
        write_artifacts(&artifacts, &config).unwrap();

        let header = std::fs::read_to_string(&config.header).unwrap();
        assert_eq!(header, artifacts.header);
        let preview = image::open(&config.preview_normal).unwrap();
        assert_eq!((preview.width(), preview.height()), (100, 130));
        assert!(config.preview_worried.exists());
        assert!(!staging_path(&config.header).exists());
        assert!(!staging_path(&config.preview_normal).exists());

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn write_artifacts_leaves_nothing_when_header_dir_missing() {
        let dir = scratch_dir("partial");
        std::fs::create_dir_all(dir.join("tools")).unwrap();
        let config = ToolConfig::with_root(&dir);

        let artifacts = build_artifacts(&mascot_like_source(), Method::default(), "hiki-ava.png").unwrap();
        let err = write_artifacts(&artifacts, &config).unwrap_err();
        assert!(err.to_string().contains("hiki_bitmaps.h"), "{err:#}");

        assert!(!config.header.exists());
        assert!(!config.preview_normal.exists());
        assert!(!config.preview_worried.exists());
        let leftovers: Vec<_> = std::fs::read_dir(dir.join("tools")).unwrap().collect();
        assert!(leftovers.is_empty(), "{leftovers:?}");

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn staging_path_is_sibling() {
        assert_eq!(
            staging_path(Path::new("/fw/src/hiki_bitmaps.h")),
            Path::new("/fw/src/hiki_bitmaps.h.tmp")
        );
    }

    #[test]
    fn write_artifacts_missing_directory_is_error() {
        let dir = scratch_dir("missing");
        let config = ToolConfig::with_root(&dir.join("nope"));

        let artifacts = artifacts_from_canvas(
            &RgbaImage::from_pixel(100, 130, BACKGROUND),
            Method::default(),
            "x.png",
        )
        .unwrap();
        let err = write_artifacts(&artifacts, &config).unwrap_err();
        assert!(err.to_string().contains("Failed to write"), "{err:#}");

        std::fs::remove_dir_all(&dir).ok();
    }
}
