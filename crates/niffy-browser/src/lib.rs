//! Browser automation for Niffy
//!
//! This crate drives Chrome/Chromium through the Chrome DevTools Protocol
//! (CDP) and exposes the narrow capability the comparison pipeline consumes:
//! navigate to a URL, screenshot the page to a file, close the session.
//!
//! # Modules
//!
//! - [`driver`]: the [`PageDriver`] trait — the navigate/screenshot seam the
//!   orchestrator is written against
//! - [`browser`]: [`BrowserSession`], the CDP-backed implementation
//!
//! # Requirements
//!
//! - Chrome or Chromium installed
//! - For connecting to an existing browser: `chrome --remote-debugging-port=9222`

pub mod browser;
pub mod driver;

pub use browser::BrowserSession;
pub use driver::PageDriver;
