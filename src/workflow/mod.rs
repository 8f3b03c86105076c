//! Workflow module
//!
//! This module contains components for orchestrating the mirror runs.

mod context;
mod engine;

pub use context::{MirrorContext, MirrorStats, PlannedCopy};
pub use engine::{MirrorOptions, RunOptions, mirror, print_plan, resolve_rules, run};
