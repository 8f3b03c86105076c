//! File operation functionality
//!
//! This module contains the verbatim copy of one source file to its mirror
//! destination, creating directories on the way.

use std::fs::{File, create_dir_all};
use std::io;
use std::path::Path;

use fs_extra::error::{Error as CopyError, ErrorKind as CopyErrorKind};
use fs_extra::file::{CopyOptions, copy};
use log::debug;

use crate::errors::{Result, file_operation_error};

/// What happened to a single matching file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    /// Contents were written to the destination
    Copied,
    /// Source and destination are the same file, nothing was written
    InPlace,
    /// Dry run, nothing was written
    Planned,
}

/// Copies `source` to `destination` byte for byte
///
/// Every missing directory of the destination is created first. An existing
/// destination file is overwritten without a backup. When source and
/// destination name the same file it is left alone, as truncating the
/// destination would empty the source.
///
/// # Arguments
/// * `source` - The file to copy
/// * `destination` - Where the copy is written
/// * `run_execution` - Whether to actually touch the filesystem (true) or just simulate it (false)
///
/// # Errors
/// * Returns an error if a destination directory cannot be created
/// * Returns a `read` error naming the source if it cannot be opened
/// * Returns a `write` error naming the destination if it cannot be written
pub fn mirror_file(source: &Path, destination: &Path, run_execution: bool) -> Result<CopyOutcome> {
    if !run_execution {
        debug!(
            "Simulating copy: {} -> {}",
            source.display(),
            destination.display()
        );
        return Ok(CopyOutcome::Planned);
    }

    if let Some(parent) = destination.parent()
        && !parent.as_os_str().is_empty()
    {
        create_dir_all(parent)
            .map_err(|e| file_operation_error(e, parent.to_path_buf(), "create directory"))?;
    }

    if is_same_file(source, destination) {
        debug!("{} is already in place", source.display());
        return Ok(CopyOutcome::InPlace);
    }

    // Opening the source up front keeps read failures apart from write failures
    File::open(source).map_err(|e| file_operation_error(e, source.to_path_buf(), "read"))?;

    debug!(
        "Copying file: {} -> {}",
        source.display(),
        destination.display()
    );
    let options = CopyOptions::new().overwrite(true);
    copy(source, destination, &options).map_err(|e| {
        file_operation_error(into_io_error(e), destination.to_path_buf(), "write")
    })?;

    Ok(CopyOutcome::Copied)
}

/// Recovers the underlying io error from an fs_extra error
fn into_io_error(err: CopyError) -> io::Error {
    let message = err.to_string();
    match err.kind {
        CopyErrorKind::Io(source) => source,
        _ => io::Error::other(message),
    }
}

fn is_same_file(source: &Path, destination: &Path) -> bool {
    match (source.canonicalize(), destination.canonicalize()) {
        (Ok(source), Ok(destination)) => source == destination,
        _ => false,
    }
}
