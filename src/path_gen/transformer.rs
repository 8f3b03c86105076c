//! Destination path computation
//!
//! Destinations are computed by pure text substitution on the source path:
//! the rule's `root_from` text is replaced in every directory component and
//! the matched extension is swapped on the base name.

use std::ffi::{OsStr, OsString};
use std::path::{Component, Path, PathBuf};

use log::trace;

use crate::errors::{Result, path_operation_error};
#[cfg(not(unix))]
use crate::errors::invalid_filename_error;
use crate::rules::TransformRule;

/// Computes where a matching source file is mirrored to
///
/// Every occurrence of `root_from` in each directory component is replaced by
/// `root_to`, without regard to where the component sits in the path.
/// Components left empty by the substitution are dropped, so removing `asm`
/// from `asm/a` yields `a`. The base name keeps its stem and has the rule's
/// extension replaced by the target extension.
///
/// On Unix names are handled as raw bytes, so they need not be valid Unicode.
///
/// # Errors
/// * Returns an error if the path has no file name or if the name does not end
///   with the rule's extension
/// * Returns an error if a component is not valid Unicode on platforms
///   without byte paths
pub fn destination_path(source: &Path, rule: &TransformRule) -> Result<PathBuf> {
    let file_name = source
        .file_name()
        .ok_or_else(|| path_operation_error(source.to_path_buf(), "get filename of"))?;

    let mut name = strip_extension(file_name, &rule.extension, source)?
        .ok_or_else(|| path_operation_error(source.to_path_buf(), "match extension of"))?;
    name.push(rule.target_extension());

    let mut destination = match source.parent() {
        Some(parent) => substitute_root(parent, &rule.root_from, &rule.root_to)?,
        None => PathBuf::new(),
    };
    destination.push(name);

    trace!("{} -> {}", source.display(), destination.display());
    Ok(destination)
}

/// Replaces `from` with `to` in every normal component of `directory`
///
/// Root, prefix and `.`/`..` components are kept untouched. An empty `from`
/// leaves the directory as it is.
pub fn substitute_root(directory: &Path, from: &str, to: &str) -> Result<PathBuf> {
    if from.is_empty() {
        return Ok(directory.to_path_buf());
    }

    let mut result = PathBuf::new();
    for component in directory.components() {
        match component {
            Component::Normal(segment) => {
                let replaced = replace_in(segment, from, to, directory)?;
                if !replaced.is_empty() {
                    result.push(replaced);
                }
            }
            other => result.push(other.as_os_str()),
        }
    }
    Ok(result)
}

#[cfg(unix)]
fn replace_in(segment: &OsStr, from: &str, to: &str, _path: &Path) -> Result<OsString> {
    use std::os::unix::ffi::{OsStrExt, OsStringExt};

    let bytes = segment.as_bytes();
    let (from, to) = (from.as_bytes(), to.as_bytes());
    let mut replaced = Vec::with_capacity(bytes.len());
    let mut index = 0;
    while index < bytes.len() {
        if bytes[index..].starts_with(from) {
            replaced.extend_from_slice(to);
            index += from.len();
        } else {
            replaced.push(bytes[index]);
            index += 1;
        }
    }
    Ok(OsString::from_vec(replaced))
}

#[cfg(not(unix))]
fn replace_in(segment: &OsStr, from: &str, to: &str, path: &Path) -> Result<OsString> {
    let segment = segment
        .to_str()
        .ok_or_else(|| invalid_filename_error(path.to_path_buf()))?;
    Ok(OsString::from(segment.replace(from, to)))
}

#[cfg(unix)]
fn strip_extension(name: &OsStr, extension: &str, _path: &Path) -> Result<Option<OsString>> {
    use std::os::unix::ffi::OsStrExt;

    Ok(name
        .as_bytes()
        .strip_suffix(extension.as_bytes())
        .map(|stem| OsStr::from_bytes(stem).to_os_string()))
}

#[cfg(not(unix))]
fn strip_extension(name: &OsStr, extension: &str, path: &Path) -> Result<Option<OsString>> {
    let name = name
        .to_str()
        .ok_or_else(|| invalid_filename_error(path.to_path_buf()))?;
    Ok(name.strip_suffix(extension).map(OsString::from))
}
