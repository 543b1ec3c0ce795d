//! # niffy
//!
//! Visual regression testing: render the same page path on a known-good
//! "base" host and a candidate "test" host through one shared browser
//! session, screenshot both, pixel-diff the screenshots, and fail when the
//! divergence exceeds a configured threshold.
//!
//! # Example
//!
//! ```no_run
//! use niffy::{Interactions, Niffy, NiffyConfig};
//!
//! #[tokio::main]
//! async fn main() -> niffy::Result<()> {
//!     let config = NiffyConfig::new("https://example.com", "https://staging.example.com");
//!     let niffy = Niffy::launch(config).await?;
//!
//!     // Fails with "<pct>% different, open <diff path>" above the threshold.
//!     niffy.test("/news", &Interactions::none()).await?;
//!
//!     // Closes the browser and logs per-phase timings.
//!     niffy.end().await
//! }
//! ```
//!
//! # Artifacts
//!
//! Each comparison writes `base.png`, `test.png`, and `diff.png` under
//! `<img_dir><logical_path>/`, overwriting earlier runs of the same path.
//!
//! # Modules
//!
//! - [`pipeline`]: the [`Niffy`] orchestrator
//! - [`interactions`]: per-host interaction callbacks
//! - [`paths`]: artifact path resolution
//! - [`profile`]: per-phase wall-clock accounting

pub mod interactions;
pub mod paths;
pub mod pipeline;
pub mod profile;

pub use interactions::{InteractionFn, Interactions};
pub use pipeline::Niffy;
pub use profile::{Phase, Profiler};

// Re-export the shared vocabulary so callers depend on one crate.
pub use niffy_browser::{BrowserSession, PageDriver};
pub use niffy_core::{DiffResult, HostRole, ImageKind, NiffyConfig, NiffyError, Result};
