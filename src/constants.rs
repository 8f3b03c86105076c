//! Constants used throughout the application
//!
//! This module centralises all constants used in the application to make
//! them easier to manage and update.

/// Qualifier string used for application identification
pub const QUALIFIER: &str = "com";

/// Organisation name used for application identification
pub const ORGANIZATION: &str = "Ondřej Vágner";

/// Application name used for identification
///
/// Used to locate the platform configuration directory where configuration
/// and log files are looked up.
pub const APPLICATION: &str = "asm_mirror";

/// Root segment of the source tree
pub const SOURCE_ROOT: &str = "src";

/// Root segment of the assembly tree
pub const ASSEMBLY_ROOT: &str = "asm";

/// Extension of preprocessed assembly files in the source tree
pub const SOURCE_EXTENSION: &str = ".S";

/// Extension of files in the assembly tree
pub const ASSEMBLY_EXTENSION: &str = ".asm";

/// Directory that relative paths are resolved against by default
pub const DEFAULT_BASE_DIR: &str = ".";

/// Direction used when none is given on the command line
pub const DEFAULT_DIRECTION: &str = "forward";

/// Help text for the direction command-line option
pub const DIRECTION_HELP: &str = "Which built-in rule to run: forward (src -> asm), reverse (asm -> .S) or both";

/// Help text for the root command-line option
pub const ROOT_HELP: &str = "Walk this directory instead of the built-in rule's root";

/// Help text for the base directory command-line option
pub const BASE_DIR_HELP: &str = "Resolve relative paths against this directory";

/// Help text for the config command-line option
pub const CONFIG_HELP: &str = "Read mirror rules from a specific config file";

/// Help text for the dry-run command-line option
pub const DRY_RUN_HELP: &str = "Run without copying any files";

/// Help text for the verbose command-line option
pub const VERBOSE_HELP: &str = "Increase verbosity level (can be used multiple times)";

/// Help text for the log file command-line option
pub const LOG_FILE_HELP: &str = "Also write log messages to this file";

/// Help text for the local logging command-line option
pub const LOCAL_LOGGING_HELP: &str =
    "Place the log file relative to the working directory instead of the config directory";
