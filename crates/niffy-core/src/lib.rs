//! # niffy-core
//!
//! Core types for Niffy, a visual regression testing pipeline.
//!
//! Niffy renders the same page path on two hosts (a known-good "base" and a
//! candidate "test"), screenshots both through one shared browser session,
//! pixel-diffs the screenshots, and fails when the divergence percentage
//! exceeds a configured threshold.
//!
//! This crate holds the pieces shared by every other Niffy crate:
//!
//! - [`NiffyError`] / [`Result`] — the unified error type
//! - [`NiffyConfig`] — construction-time configuration for one comparison run
//! - [`HostRole`], [`ImageKind`], [`DiffResult`] — shared vocabulary types

mod config;
mod error;
mod types;

pub use config::NiffyConfig;
pub use error::{NiffyError, Result};
pub use types::{DiffResult, HostRole, ImageKind};
