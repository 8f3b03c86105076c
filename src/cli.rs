use std::path::PathBuf;

use clap::{Arg, ArgMatches, command, crate_authors, crate_description, crate_name, crate_version};

use crate::constants::{
    BASE_DIR_HELP, CONFIG_HELP, DEFAULT_BASE_DIR, DEFAULT_DIRECTION, DIRECTION_HELP, DRY_RUN_HELP,
    LOCAL_LOGGING_HELP, LOG_FILE_HELP, ROOT_HELP, VERBOSE_HELP,
};
use crate::errors::{Result, generic_error};
use crate::logging::LogLevel;
use crate::rules::Direction;
use crate::utils::find_project_folder;
use crate::workflow::{MirrorOptions, RunOptions};

/// Builds the command-line interface
///
/// Defines the following arguments:
/// - `direction`: Which built-in rule to run
/// - `root`: Walk root override for the built-in rule
/// - `base_dir`: Directory relative paths are resolved against
/// - `config`: Path to a rule file
/// - `dry`: Run without copying any files
/// - `verbose`: Increase verbosity level
/// - `log_file` / `log_locally`: Optional log file and where it goes
pub fn build_command() -> clap::Command {
    // define arg for the built-in direction
    let arg_direction = Arg::new("direction")
        .short('d')
        .long("direction")
        .help(DIRECTION_HELP)
        .value_parser(["forward", "reverse", "both"])
        .default_value(DEFAULT_DIRECTION);

    // define arg for overriding the walk root
    let arg_root = Arg::new("root")
        .short('r')
        .long("root")
        .help(ROOT_HELP)
        .conflicts_with("config");

    // define arg for the base directory
    let arg_base_dir = Arg::new("base_dir")
        .short('C')
        .long("base-dir")
        .help(BASE_DIR_HELP)
        .default_value(DEFAULT_BASE_DIR);

    // define arg for reading rules from a specific config file
    let arg_config = Arg::new("config")
        .short('c')
        .long("config")
        .help(CONFIG_HELP);

    // define arg for dry run
    let arg_dry = Arg::new("dry")
        .short('n')
        .long("dry")
        .help(DRY_RUN_HELP)
        .action(clap::ArgAction::SetTrue);

    // define arg for verbosity level
    let arg_verbose = Arg::new("verbose")
        .short('v')
        .long("verbose")
        .help(VERBOSE_HELP)
        .action(clap::ArgAction::Count);

    // define arg for log file
    let log_file = Arg::new("log_file")
        .short('l')
        .long("log-file")
        .help(LOG_FILE_HELP);

    // define arg for local logging
    let log_locally = Arg::new("log_locally")
        .short('L')
        .long("log-locally")
        .help(LOCAL_LOGGING_HELP)
        .requires("log_file")
        .action(clap::ArgAction::SetTrue);

    command!()
        .author(crate_authors!())
        .about(crate_description!())
        .name(crate_name!())
        .version(crate_version!())
        .arg(arg_direction)
        .arg(arg_root)
        .arg(arg_base_dir)
        .arg(arg_config)
        .arg(arg_dry)
        .arg(log_file)
        .arg(log_locally)
        .arg(arg_verbose)
}

/// Parses the process arguments
pub fn get_matches() -> ArgMatches {
    build_command().get_matches()
}

/// Turns parsed arguments into run options
///
/// # Errors
/// Returns an error if the direction cannot be parsed
pub fn get_run_options(matches: &ArgMatches) -> Result<RunOptions> {
    let direction: Direction = matches
        .get_one::<String>("direction")
        .map(String::as_str)
        .unwrap_or(DEFAULT_DIRECTION)
        .parse()
        .map_err(|e: String| generic_error(&e))?;

    let base_dir = matches
        .get_one::<String>("base_dir")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_BASE_DIR));

    Ok(RunOptions {
        direction,
        root: matches.get_one::<String>("root").map(PathBuf::from),
        config_path: matches.get_one::<String>("config").map(PathBuf::from),
        mirror: MirrorOptions {
            base_dir,
            dry_run: matches.get_flag("dry"),
        },
    })
}

/// Gets the verbosity level from the number of -v/--verbose flags
pub fn get_verbosity(matches: &ArgMatches) -> LogLevel {
    let verbose_count = matches.get_count("verbose");
    LogLevel::from_occurrences(verbose_count)
}

/// Resolves the log file, if any
///
/// Without `--log-locally` the file is placed in the platform configuration
/// directory.
pub fn get_log_file(matches: &ArgMatches) -> Result<Option<PathBuf>> {
    let Some(filename) = matches.get_one::<String>("log_file") else {
        return Ok(None);
    };
    if matches.get_flag("log_locally") {
        Ok(Some(PathBuf::from(filename)))
    } else {
        let folder = find_project_folder()?;
        Ok(Some(folder.config_dir().join(filename)))
    }
}
