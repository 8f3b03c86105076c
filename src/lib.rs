//! Mirrors assembly sources between the `src` and `asm` trees.
//!
//! The forward rule copies every `src/**/*.S` to `asm/**/*.S`; the reverse
//! rule copies every `asm/**/*.asm` to `**/*.S` with the `asm` text removed
//! from the directory part. Contents are copied verbatim.

pub mod cli;
pub mod config;
pub mod constants;
pub mod discovery;
pub mod errors;
pub mod file_ops;
pub mod logging;
pub mod path_gen;
pub mod rules;
mod utils;
pub mod workflow;

pub mod prelude {
    pub use crate::cli::{get_log_file, get_matches, get_run_options, get_verbosity};
    pub use crate::errors::{
        Error, Result, config_parsing_error, file_operation_error, generic_error,
        invalid_filename_error, path_operation_error, traversal_error,
    };
    pub use crate::logging::{LogLevel, format_message, init_logger};
    pub use crate::rules::{Direction, RulesList, TransformRule};
    pub use crate::workflow::{MirrorContext, MirrorOptions, RunOptions, mirror, run};
}
