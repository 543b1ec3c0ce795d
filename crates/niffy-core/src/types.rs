//! Shared vocabulary types for the comparison pipeline

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Which of the two hosts an operation runs against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HostRole {
    /// The known-good host
    Base,
    /// The candidate host under test
    Test,
}

impl HostRole {
    /// Label used in logs and passed to interaction callbacks
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Test => "test",
        }
    }
}

impl fmt::Display for HostRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which image artifact a filesystem path refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageKind {
    /// Screenshot of the base host
    Base,
    /// Screenshot of the test host
    Test,
    /// Visualization of the differing pixels
    Diff,
}

impl ImageKind {
    /// File name of this artifact inside the resolved directory
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Base => "base.png",
            Self::Test => "test.png",
            Self::Diff => "diff.png",
        }
    }
}

impl From<HostRole> for ImageKind {
    fn from(role: HostRole) -> Self {
        match role {
            HostRole::Base => Self::Base,
            HostRole::Test => Self::Test,
        }
    }
}

/// Outcome of one pixel comparison between a base and a test screenshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiffResult {
    /// Number of pixels that differ between the two screenshots
    pub differing_pixels: u64,
    /// Total number of pixels compared
    pub total_pixels: u64,
    /// Divergence on the 0-100 scale: `differing / total * 100`
    pub percentage: f64,
    /// Path of the written diff visualization
    pub diff_path: PathBuf,
}

impl DiffResult {
    /// Build a result from raw pixel counts, deriving the percentage
    pub fn new(differing_pixels: u64, total_pixels: u64, diff_path: PathBuf) -> Self {
        let percentage = differing_pixels as f64 / total_pixels as f64 * 100.0;
        Self {
            differing_pixels,
            total_pixels,
            percentage,
            diff_path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_derivation() {
        let result = DiffResult::new(300_000, 1_000_000, PathBuf::from("/tmp/diff.png"));
        assert_eq!(result.percentage, 30.0);
    }

    #[test]
    fn test_percentage_bounds() {
        for (differing, total) in [(0, 1), (1, 1), (1, 3), (999_999, 1_000_000)] {
            let result = DiffResult::new(differing, total, PathBuf::from("/tmp/diff.png"));
            assert!(result.percentage >= 0.0);
            assert!(result.percentage <= 100.0);
        }
    }

    #[test]
    fn test_identical_images_are_zero_percent() {
        let result = DiffResult::new(0, 1_000_000, PathBuf::from("/tmp/diff.png"));
        assert_eq!(result.percentage, 0.0);
    }

    #[test]
    fn test_image_kind_file_names() {
        assert_eq!(ImageKind::Base.file_name(), "base.png");
        assert_eq!(ImageKind::Test.file_name(), "test.png");
        assert_eq!(ImageKind::Diff.file_name(), "diff.png");
        assert_eq!(ImageKind::from(HostRole::Test), ImageKind::Test);
    }
}
