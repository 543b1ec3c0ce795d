//! Pixel-difference capability for Niffy
//!
//! Loads a base and a test screenshot, counts the pixels that differ, and
//! writes a visualization where differing pixels are highlighted in red over
//! a darkened rendition of the base image.

mod compare;

pub use compare::{compare_files, DiffStats};
