//! File operations module
//!
//! This module contains components for writing mirrored files.

mod actions;

pub use actions::{CopyOutcome, mirror_file};
