//! Configuration for a Niffy comparison run
//!
//! One [`NiffyConfig`] describes one base-vs-test comparison session: the two
//! hosts, the browser window, the pass/fail threshold, where screenshot
//! artifacts land, and the stabilization timings used around navigation and
//! capture. Immutable after construction.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Configuration for one comparison session
///
/// Deserializable so a run can be described in JSON; every field except the
/// two hosts has a default matching the stock pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NiffyConfig {
    /// URL prefix of the known-good host, e.g. `https://example.com`
    pub base_host: String,

    /// URL prefix of the candidate host, e.g. `https://staging.example.com`
    pub test_host: String,

    /// Show a visible browser window instead of running headless
    #[serde(default)]
    pub show: bool,

    /// Browser window width in pixels
    #[serde(default = "default_width")]
    pub width: u32,

    /// Browser window height in pixels
    #[serde(default = "default_height")]
    pub height: u32,

    /// Maximum tolerated divergence, in percentage points on the 0-100
    /// scale. The default of 0.2 means a comparison passes while at most
    /// 0.2% of pixels differ; a percentage exactly equal to the threshold
    /// still passes.
    #[serde(default = "default_threshold")]
    pub threshold: f64,

    /// Root directory for screenshot and diff artifacts
    #[serde(default = "default_img_dir")]
    pub img_dir: PathBuf,

    /// Settle pause in milliseconds applied before a screenshot and around
    /// interaction callbacks, letting asynchronous page rendering finish
    #[serde(default = "default_settle_ms")]
    pub settle_ms: u64,

    /// Trailing settle pause in milliseconds after each screenshot
    #[serde(default = "default_post_capture_settle_ms")]
    pub post_capture_settle_ms: u64,
}

// Default value providers
fn default_width() -> u32 {
    1400
}

fn default_height() -> u32 {
    1000
}

fn default_threshold() -> f64 {
    0.2
}

fn default_img_dir() -> PathBuf {
    std::env::temp_dir().join("niffy")
}

fn default_settle_ms() -> u64 {
    1000
}

fn default_post_capture_settle_ms() -> u64 {
    250
}

impl NiffyConfig {
    /// Create a configuration for the given host pair with stock defaults
    pub fn new(base_host: impl Into<String>, test_host: impl Into<String>) -> Self {
        Self {
            base_host: base_host.into(),
            test_host: test_host.into(),
            show: false,
            width: default_width(),
            height: default_height(),
            threshold: default_threshold(),
            img_dir: default_img_dir(),
            settle_ms: default_settle_ms(),
            post_capture_settle_ms: default_post_capture_settle_ms(),
        }
    }

    /// Settle pause as a [`Duration`]
    pub fn settle(&self) -> Duration {
        Duration::from_millis(self.settle_ms)
    }

    /// Post-capture settle pause as a [`Duration`]
    pub fn post_capture_settle(&self) -> Duration {
        Duration::from_millis(self.post_capture_settle_ms)
    }
}
