//! Per-pixel comparison between two screenshots

use image::{Rgba, RgbaImage};
use niffy_core::{NiffyError, Result};
use std::path::Path;
use tracing::debug;

/// Raw outcome of one pixel comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffStats {
    /// Number of pixels whose RGBA values differ
    pub differing_pixels: u64,
    /// Total number of pixels compared
    pub total_pixels: u64,
}

/// Color used to mark differing pixels in the visualization
const HIGHLIGHT: Rgba<u8> = Rgba([255, 0, 0, 255]);

/// Compare two PNG files pixel by pixel and write a diff visualization.
///
/// Matching pixels are rendered as a darkened copy of the base image so the
/// page stays recognizable for context; differing pixels are painted red.
/// Both images must have identical dimensions.
///
/// # Arguments
/// * `base_path` - screenshot of the known-good host
/// * `test_path` - screenshot of the candidate host
/// * `diff_path` - where the visualization PNG is written (overwritten if present)
pub fn compare_files(base_path: &Path, test_path: &Path, diff_path: &Path) -> Result<DiffStats> {
    let base = load_rgba(base_path)?;
    let test = load_rgba(test_path)?;

    if base.dimensions() != test.dimensions() {
        return Err(NiffyError::DimensionMismatch {
            base: base.dimensions(),
            test: test.dimensions(),
        });
    }

    let (width, height) = base.dimensions();
    let mut diff = RgbaImage::new(width, height);
    let mut differing_pixels: u64 = 0;

    for (x, y, base_pixel) in base.enumerate_pixels() {
        let test_pixel = test.get_pixel(x, y);
        if base_pixel == test_pixel {
            let Rgba([r, g, b, _]) = *base_pixel;
            diff.put_pixel(x, y, Rgba([r / 4, g / 4, b / 4, 255]));
        } else {
            differing_pixels += 1;
            diff.put_pixel(x, y, HIGHLIGHT);
        }
    }

    diff.save(diff_path)
        .map_err(|e| NiffyError::Diff(format!("Failed to write {}: {}", diff_path.display(), e)))?;

    let total_pixels = u64::from(width) * u64::from(height);
    debug!(
        "Compared {}x{}: {} of {} pixels differ",
        width, height, differing_pixels, total_pixels
    );

    Ok(DiffStats {
        differing_pixels,
        total_pixels,
    })
}

fn load_rgba(path: &Path) -> Result<RgbaImage> {
    let img = image::open(path)
        .map_err(|e| NiffyError::Diff(format!("Failed to open {}: {}", path.display(), e)))?;
    Ok(img.to_rgba8())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write_solid(dir: &Path, name: &str, width: u32, height: u32, color: [u8; 4]) -> PathBuf {
        let img = RgbaImage::from_pixel(width, height, Rgba(color));
        let path = dir.join(name);
        img.save(&path).unwrap();
        path
    }

    #[test]
    fn test_identical_images_have_no_differences() {
        let dir = tempfile::tempdir().unwrap();
        let base = write_solid(dir.path(), "base.png", 40, 25, [255, 255, 255, 255]);
        let test = write_solid(dir.path(), "test.png", 40, 25, [255, 255, 255, 255]);
        let diff_path = dir.path().join("diff.png");

        let stats = compare_files(&base, &test, &diff_path).unwrap();
        assert_eq!(stats.differing_pixels, 0);
        assert_eq!(stats.total_pixels, 1000);
        assert!(diff_path.exists());
    }

    #[test]
    fn test_counts_differing_pixels() {
        let dir = tempfile::tempdir().unwrap();
        let base = write_solid(dir.path(), "base.png", 10, 10, [255, 255, 255, 255]);

        // Paint a 10x3 band a different color: 30 of 100 pixels.
        let mut img = RgbaImage::from_pixel(10, 10, Rgba([255, 255, 255, 255]));
        for y in 0..3 {
            for x in 0..10 {
                img.put_pixel(x, y, Rgba([0, 128, 0, 255]));
            }
        }
        let test = dir.path().join("test.png");
        img.save(&test).unwrap();

        let diff_path = dir.path().join("diff.png");
        let stats = compare_files(&base, &test, &diff_path).unwrap();
        assert_eq!(stats.differing_pixels, 30);
        assert_eq!(stats.total_pixels, 100);
    }

    #[test]
    fn test_diff_artifact_highlights_differences() {
        let dir = tempfile::tempdir().unwrap();
        let base = write_solid(dir.path(), "base.png", 4, 4, [200, 200, 200, 255]);
        let mut img = RgbaImage::from_pixel(4, 4, Rgba([200, 200, 200, 255]));
        img.put_pixel(2, 1, Rgba([0, 0, 0, 255]));
        let test = dir.path().join("test.png");
        img.save(&test).unwrap();

        let diff_path = dir.path().join("diff.png");
        compare_files(&base, &test, &diff_path).unwrap();

        let diff = image::open(&diff_path).unwrap().to_rgba8();
        assert_eq!(*diff.get_pixel(2, 1), Rgba([255, 0, 0, 255]));
        // Matching pixels are darkened base, not black or highlight.
        assert_eq!(*diff.get_pixel(0, 0), Rgba([50, 50, 50, 255]));
    }

    #[test]
    fn test_dimension_mismatch_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let base = write_solid(dir.path(), "base.png", 10, 10, [255, 255, 255, 255]);
        let test = write_solid(dir.path(), "test.png", 10, 12, [255, 255, 255, 255]);
        let diff_path = dir.path().join("diff.png");

        let err = compare_files(&base, &test, &diff_path).unwrap_err();
        assert!(matches!(
            err,
            NiffyError::DimensionMismatch {
                base: (10, 10),
                test: (10, 12)
            }
        ));
    }

    #[test]
    fn test_unreadable_input_is_a_diff_error() {
        let dir = tempfile::tempdir().unwrap();
        let base = write_solid(dir.path(), "base.png", 4, 4, [255, 255, 255, 255]);
        let missing = dir.path().join("missing.png");
        let diff_path = dir.path().join("diff.png");

        let err = compare_files(&base, &missing, &diff_path).unwrap_err();
        assert!(matches!(err, NiffyError::Diff(_)));
    }
}
