//! Workflow context
//!
//! This module defines the state collected while one rule is mirrored.

use std::path::PathBuf;

use crate::rules::TransformRule;

/// A copy that would happen without `--dry`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedCopy {
    /// The file that would be read
    pub source: PathBuf,
    /// The file that would be written
    pub destination: PathBuf,
    /// Title of the rule that matched the file
    pub rule_title: String,
}

/// Statistics about one mirror walk
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MirrorStats {
    /// Number of regular files seen under the root
    pub files_visited: usize,
    /// Number of files whose name ends with the rule's extension
    pub files_matched: usize,
    /// Number of files written
    pub files_copied: usize,
    /// Number of files whose destination is the source itself
    pub files_in_place: usize,
}

/// Context for mirroring a single rule
#[derive(Debug, Clone)]
pub struct MirrorContext {
    /// The rule being applied
    pub rule: TransformRule,
    /// Whether file operations are only simulated
    pub dry_run: bool,
    /// Statistics about the walk
    pub stats: MirrorStats,
    /// Planned copies for dry-run mode
    pub planned_copies: Vec<PlannedCopy>,
}

impl MirrorContext {
    pub fn new(rule: TransformRule, dry_run: bool) -> Self {
        MirrorContext {
            rule,
            dry_run,
            stats: MirrorStats::default(),
            planned_copies: Vec::new(),
        }
    }

    pub fn add_planned_copy(&mut self, source: PathBuf, destination: PathBuf) {
        self.planned_copies.push(PlannedCopy {
            source,
            destination,
            rule_title: self.rule.title.clone(),
        });
    }

    pub fn increment_files_copied(&mut self) {
        self.stats.files_copied += 1;
    }

    pub fn increment_files_in_place(&mut self) {
        self.stats.files_in_place += 1;
    }
}
