//! Directory walking functionality
//!
//! This module contains the recursive walk that finds the files a rule applies to.

use std::path::{Path, PathBuf};

use log::{debug, trace, warn};
use walkdir::WalkDir;

use crate::errors::{Result, traversal_error};
use crate::rules::TransformRule;

/// Outcome of walking a rule's root directory
#[derive(Debug, Clone, Default)]
pub struct WalkResult {
    /// Regular files whose name ends with the rule's extension
    pub matched: Vec<PathBuf>,
    /// Number of regular files seen, matching or not
    pub files_visited: usize,
}

/// Walks `root` depth-first and collects the files matching `rule`
///
/// Symlinks are not followed. Directory entries are visited in whatever order
/// the filesystem lists them. A root that does not exist produces an empty
/// result rather than an error.
///
/// # Errors
/// Returns a traversal error if a directory below an existing root cannot be read
pub fn walk_matching(root: &Path, rule: &TransformRule) -> Result<WalkResult> {
    let mut result = WalkResult::default();

    if !root.exists() {
        warn!("Root directory {} does not exist, nothing to mirror", root.display());
        return Ok(result);
    }

    debug!("Walking {} for *{} files", root.display(), rule.extension);

    for entry in WalkDir::new(root) {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(root).to_path_buf();
            traversal_error(e, path)
        })?;

        if !entry.file_type().is_file() {
            continue;
        }
        result.files_visited += 1;

        if rule.matches(entry.file_name()) {
            trace!("Matched {}", entry.path().display());
            result.matched.push(entry.into_path());
        }
    }

    debug!(
        "Found {} matching files out of {} in {}",
        result.matched.len(),
        result.files_visited,
        root.display()
    );

    Ok(result)
}
