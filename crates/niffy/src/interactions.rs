//! Per-host interaction callbacks
//!
//! A comparison step may need to act on the page between navigation and
//! screenshot (log in, dismiss a banner, open a menu). Callbacks are held as
//! an explicit base/test pair; when only a base callback is supplied it runs
//! against both hosts, and the callback can branch on the [`HostRole`] it
//! receives.

use futures::future::BoxFuture;
use niffy_core::{HostRole, Result};

/// An async callback run against the shared session for one host
pub type InteractionFn<S> =
    Box<dyn for<'a> Fn(&'a S, HostRole) -> BoxFuture<'a, Result<()>> + Send + Sync>;

/// Explicit base/test callback pair
pub struct Interactions<S> {
    base: Option<InteractionFn<S>>,
    test: Option<InteractionFn<S>>,
}

impl<S> Interactions<S> {
    /// No interaction on either host
    pub fn none() -> Self {
        Self {
            base: None,
            test: None,
        }
    }

    /// One callback for both hosts; it receives the role it runs under
    pub fn on_both<F>(f: F) -> Self
    where
        F: for<'a> Fn(&'a S, HostRole) -> BoxFuture<'a, Result<()>> + Send + Sync + 'static,
    {
        Self {
            base: Some(Box::new(f)),
            test: None,
        }
    }

    /// Distinct callbacks per host
    pub fn per_host<F, G>(base: F, test: G) -> Self
    where
        F: for<'a> Fn(&'a S, HostRole) -> BoxFuture<'a, Result<()>> + Send + Sync + 'static,
        G: for<'a> Fn(&'a S, HostRole) -> BoxFuture<'a, Result<()>> + Send + Sync + 'static,
    {
        Self {
            base: Some(Box::new(base)),
            test: Some(Box::new(test)),
        }
    }

    /// Callback to run for `role`; the test host falls back to the base
    /// callback when no test-specific one was supplied
    pub fn for_role(&self, role: HostRole) -> Option<&InteractionFn<S>> {
        match role {
            HostRole::Base => self.base.as_ref(),
            HostRole::Test => self.test.as_ref().or(self.base.as_ref()),
        }
    }
}

impl<S> Default for Interactions<S> {
    fn default() -> Self {
        Self::none()
    }
}
