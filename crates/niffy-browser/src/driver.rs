//! The page-driving capability consumed by the comparison pipeline
//!
//! The orchestrator never talks to CDP directly; it is written against this
//! trait so the rendering engine stays an opaque collaborator and tests can
//! substitute a fake session.

use async_trait::async_trait;
use niffy_core::Result;
use std::path::Path;

/// Minimal page-driving capability: navigate, screenshot, close.
///
/// Implementations must tolerate sequential reuse across many navigations;
/// one driver value backs every navigation of a comparison session. Callers
/// must not issue concurrent operations against one driver.
#[async_trait]
pub trait PageDriver: Send + Sync {
    /// Navigate to `url` and wait until the navigation has committed.
    async fn goto(&self, url: &str) -> Result<()>;

    /// Capture a PNG screenshot of the current page into `path`,
    /// overwriting any existing file.
    async fn screenshot(&self, path: &Path) -> Result<()>;

    /// Tear down the underlying session. Further calls are invalid.
    async fn close(&mut self) -> Result<()>;
}
