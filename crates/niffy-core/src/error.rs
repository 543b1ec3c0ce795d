//! Unified error types for Niffy

use std::path::PathBuf;
use thiserror::Error;

/// Unified error type for all Niffy operations
#[derive(Error, Debug)]
pub enum NiffyError {
    // Browser errors
    #[error("Browser error: {0}")]
    Browser(String),

    #[error("Navigation failed: {0}")]
    Navigation(String),

    #[error("Screenshot failed: {0}")]
    Screenshot(String),

    // Diff errors
    #[error("Diff error: {0}")]
    Diff(String),

    #[error("Dimension mismatch: base {}x{}, test {}x{}", base.0, base.1, test.0, test.1)]
    DimensionMismatch {
        base: (u32, u32),
        test: (u32, u32),
    },

    // Session misuse
    #[error("Session busy: another navigation or capture is in flight on this session")]
    SessionBusy,

    // Verdict: divergence above the configured threshold. Not a fault, but
    // the intentional failure signal carried to the invoking test layer.
    #[error("{}% different, open {}", floored_percentage(*percentage), diff_path.display())]
    ThresholdExceeded {
        percentage: f64,
        diff_path: PathBuf,
    },

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Generic
    #[error("{0}")]
    Other(String),
}

/// Result type alias using NiffyError
pub type Result<T> = std::result::Result<T, NiffyError>;

/// Floor a percentage to 4 decimal digits and render it without trailing
/// zeros, so `30.0` reads as `30` and `0.03125` as `0.0312` in messages.
pub fn floored_percentage(percentage: f64) -> String {
    let floored = (percentage * 10_000.0).floor() / 10_000.0;
    let rendered = format!("{:.4}", floored);
    rendered
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}
