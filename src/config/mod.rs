//! Configuration module
//!
//! This module contains components for loading and validating the rule file.

pub mod deserializer;
mod model;

pub use deserializer::{expand_path, load_config, parse_config, resolve_config_path};
pub use model::MirrorConfig;
