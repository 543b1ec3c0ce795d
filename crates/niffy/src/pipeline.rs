//! The capture-and-compare orchestrator
//!
//! [`Niffy`] owns one shared page-driving session and runs every operation
//! against it sequentially: navigate the base host, screenshot, navigate the
//! test host, screenshot, pixel-diff the pair, and judge the divergence
//! against the configured threshold.

use crate::interactions::Interactions;
use crate::paths;
use crate::profile::{Phase, Profiler};
use futures::future::BoxFuture;
use niffy_browser::{BrowserSession, PageDriver};
use niffy_core::{DiffResult, HostRole, ImageKind, NiffyConfig, NiffyError, Result};
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::time::sleep;
use tracing::{debug, info};

/// One visual comparison session over a shared page-driving session.
///
/// All operations reuse the single session and must be serialized; a second
/// call while one is in flight fails fast with [`NiffyError::SessionBusy`]
/// rather than racing on the shared browser state.
pub struct Niffy<S: PageDriver> {
    session: S,
    config: NiffyConfig,
    profiler: Profiler,
    busy: AtomicBool,
}

/// Releases the busy flag when an operation completes or aborts
struct SessionGuard<'a> {
    busy: &'a AtomicBool,
}

impl Drop for SessionGuard<'_> {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::Release);
    }
}

impl Niffy<BrowserSession> {
    /// Launch a browser per the configuration and wrap it in a session
    pub async fn launch(config: NiffyConfig) -> Result<Self> {
        let session = BrowserSession::launch(&config).await?;
        Ok(Self::with_session(session, config))
    }
}

impl<S: PageDriver> Niffy<S> {
    /// Build a comparison session around an explicit page-driving handle
    pub fn with_session(session: S, config: NiffyConfig) -> Self {
        Self {
            session,
            config,
            profiler: Profiler::new(),
            busy: AtomicBool::new(false),
        }
    }

    pub fn config(&self) -> &NiffyConfig {
        &self.config
    }

    pub fn profiler(&self) -> &Profiler {
        &self.profiler
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    fn acquire(&self) -> Result<SessionGuard<'_>> {
        self.busy
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Acquire)
            .map_err(|_| NiffyError::SessionBusy)?;
        Ok(SessionGuard { busy: &self.busy })
    }

    /// Navigate both hosts to `path`, running any interactions, without
    /// capturing screenshots
    pub async fn goto(&self, path: &str, interactions: &Interactions<S>) -> Result<()> {
        let _guard = self.acquire()?;
        self.profiler.start(Phase::Goto);
        self.goto_host(HostRole::Base, path, interactions).await?;
        self.goto_host(HostRole::Test, path, interactions).await?;
        self.profiler.stop(Phase::Goto);
        Ok(())
    }

    /// Run a callback against the current session state without navigating
    pub async fn continue_with<F>(&self, f: F) -> Result<()>
    where
        F: for<'a> FnOnce(&'a S) -> BoxFuture<'a, Result<()>>,
    {
        let _guard = self.acquire()?;
        f(&self.session).await
    }

    /// Capture both hosts at `path` and return the pixel divergence
    pub async fn capture(&self, path: &str, interactions: &Interactions<S>) -> Result<DiffResult> {
        let _guard = self.acquire()?;
        self.capture_inner(path, interactions).await
    }

    /// Capture both hosts at `path` and fail when the divergence percentage
    /// exceeds the configured threshold (a percentage exactly equal to the
    /// threshold passes)
    pub async fn test(&self, path: &str, interactions: &Interactions<S>) -> Result<()> {
        let _guard = self.acquire()?;
        let result = self.capture_inner(path, interactions).await?;

        if result.percentage > self.config.threshold {
            return Err(NiffyError::ThresholdExceeded {
                percentage: result.percentage,
                diff_path: result.diff_path,
            });
        }

        info!(
            "{}: {} of {} pixels differ ({}%), within threshold",
            path, result.differing_pixels, result.total_pixels, result.percentage
        );
        Ok(())
    }

    /// Close the session and emit the accumulated profile report
    pub async fn end(mut self) -> Result<()> {
        self.session.close().await?;
        self.profiler.report();
        Ok(())
    }

    async fn capture_inner(
        &self,
        path: &str,
        interactions: &Interactions<S>,
    ) -> Result<DiffResult> {
        self.capture_host(HostRole::Base, path, interactions).await?;
        self.capture_host(HostRole::Test, path, interactions).await?;

        self.profiler.start(Phase::Diff);
        let base_png = paths::image_file_path(ImageKind::Base, path, &self.config.img_dir)?;
        let test_png = paths::image_file_path(ImageKind::Test, path, &self.config.img_dir)?;
        let diff_png = paths::image_file_path(ImageKind::Diff, path, &self.config.img_dir)?;
        let stats = niffy_diff::compare_files(&base_png, &test_png, &diff_png)?;
        self.profiler.stop(Phase::Diff);

        Ok(DiffResult::new(
            stats.differing_pixels,
            stats.total_pixels,
            diff_png,
        ))
    }

    async fn capture_host(
        &self,
        role: HostRole,
        path: &str,
        interactions: &Interactions<S>,
    ) -> Result<()> {
        self.profiler.start(Phase::Goto);
        self.goto_host(role, path, interactions).await?;
        self.profiler.stop(Phase::Goto);

        self.profiler.start(Phase::Capture);
        sleep(self.config.settle()).await;
        let shot = paths::image_file_path(role.into(), path, &self.config.img_dir)?;
        self.session.screenshot(&shot).await?;
        self.profiler.stop(Phase::Capture);

        sleep(self.config.post_capture_settle()).await;
        Ok(())
    }

    async fn goto_host(
        &self,
        role: HostRole,
        path: &str,
        interactions: &Interactions<S>,
    ) -> Result<()> {
        let host = match role {
            HostRole::Base => &self.config.base_host,
            HostRole::Test => &self.config.test_host,
        };
        let url = format!("{}{}", host, path);
        debug!("goto {} ({})", url, role);

        self.session.goto(&url).await?;

        if let Some(interaction) = interactions.for_role(role) {
            sleep(self.config.settle()).await;
            interaction(&self.session, role).await?;
            sleep(self.config.settle()).await;
        }

        Ok(())
    }
}
