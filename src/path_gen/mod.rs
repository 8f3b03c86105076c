//! Path generation module
//!
//! This module contains components for computing mirror destinations.

mod transformer;

pub use transformer::{destination_path, substitute_root};
