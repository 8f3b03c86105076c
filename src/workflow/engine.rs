//! Workflow engine
//!
//! This module contains the mirror operation and the run that applies it to
//! every selected rule.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use colored::Colorize;
use log::{debug, info};

use crate::config::{load_config, resolve_config_path};
use crate::constants::DEFAULT_BASE_DIR;
use crate::discovery::walk_matching;
use crate::errors::Result as MirrorResult;
use crate::file_ops::{CopyOutcome, mirror_file};
use crate::logging::format_message;
use crate::path_gen::destination_path;
use crate::rules::{Direction, RulesList, TransformRule};

use super::context::MirrorContext;

/// Options for a single mirror walk
#[derive(Debug, Clone)]
pub struct MirrorOptions {
    /// Directory relative paths are resolved against; never substituted
    pub base_dir: PathBuf,
    /// Whether to only report what would be copied
    pub dry_run: bool,
}

impl Default for MirrorOptions {
    fn default() -> Self {
        MirrorOptions {
            base_dir: PathBuf::from(DEFAULT_BASE_DIR),
            dry_run: false,
        }
    }
}

/// Options for a whole run
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Built-in rules to apply when no configuration file is given
    pub direction: Direction,
    /// Replaces the walk root of the built-in rule
    pub root: Option<PathBuf>,
    /// Rule file replacing the built-in rules
    pub config_path: Option<PathBuf>,
    /// Options passed to every walk
    pub mirror: MirrorOptions,
}

impl Default for RunOptions {
    fn default() -> Self {
        RunOptions {
            direction: Direction::Forward,
            root: None,
            config_path: None,
            mirror: MirrorOptions::default(),
        }
    }
}

/// Mirrors every file under `root_directory` that matches `rule`
///
/// For each matching file the destination is computed from the part of its
/// path below `options.base_dir`, missing directories are created and the
/// contents are copied verbatim, overwriting whatever was there. The first
/// failure aborts the walk; files already written stay in place.
///
/// A `root_directory` that does not exist mirrors nothing and is not an error.
///
/// # Errors
/// * Returns an error if a directory below the root cannot be read
/// * Returns an error if a destination directory cannot be created
/// * Returns an error if a source cannot be read or a destination cannot be written
pub fn mirror(
    root_directory: &Path,
    rule: &TransformRule,
    options: &MirrorOptions,
) -> MirrorResult<MirrorContext> {
    let mut context = MirrorContext::new(rule.clone(), options.dry_run);
    let walk_root = options.base_dir.join(root_directory);

    info!(
        "Mirroring *{} files under {}{}...",
        rule.extension,
        walk_root.display(),
        if options.dry_run { " (dry run)" } else { "" }
    );

    let walk = walk_matching(&walk_root, rule)?;
    context.stats.files_visited = walk.files_visited;
    context.stats.files_matched = walk.matched.len();

    for source in walk.matched {
        let destination = resolve_destination(&source, rule, &options.base_dir)?;

        match mirror_file(&source, &destination, !options.dry_run)? {
            CopyOutcome::Copied => context.increment_files_copied(),
            CopyOutcome::InPlace => context.increment_files_in_place(),
            CopyOutcome::Planned => context.add_planned_copy(source, destination),
        }
    }

    info!(
        "Rule '{}' finished: {} of {} files matched, {} copied",
        rule.title,
        context.stats.files_matched,
        context.stats.files_visited,
        context.stats.files_copied
    );

    Ok(context)
}

/// Substitutes only below the base directory so the base itself is never rewritten
fn resolve_destination(source: &Path, rule: &TransformRule, base_dir: &Path) -> MirrorResult<PathBuf> {
    match source.strip_prefix(base_dir) {
        Ok(relative) => Ok(base_dir.join(destination_path(relative, rule)?)),
        Err(_) => destination_path(source, rule),
    }
}

/// Picks the rules a run applies
///
/// A configuration file replaces the built-in rules entirely; otherwise the
/// direction's built-in rules are used, with the walk root overridden when a
/// root is given.
///
/// # Errors
/// * Returns an error if the configuration file cannot be loaded
/// * Returns an error if a root override is combined with more than one rule
pub fn resolve_rules(options: &RunOptions) -> Result<RulesList> {
    if let Some(config_path) = &options.config_path {
        if options.root.is_some() {
            return Err(anyhow!("--root cannot be combined with a configuration file"));
        }
        let config = load_config(resolve_config_path(config_path.clone())?)?;
        return Ok(config.rules);
    }

    let rules = options.direction.rules();
    match &options.root {
        None => Ok(rules),
        Some(root) if rules.len() == 1 => Ok(rules
            .into_iter()
            .map(|rule| rule.with_root(root.clone()))
            .collect()),
        Some(_) => Err(anyhow!(
            "--root needs a single direction, '{}' runs {} rules",
            options.direction,
            rules.len()
        )),
    }
}

/// Runs every selected rule in order
///
/// Rules run one after another against the same filesystem, so with
/// `Direction::Both` the reverse walk sees the tree the forward walk left.
///
/// # Returns
/// * `Result<Vec<MirrorContext>>` - One context per rule, in the order they ran
///
/// # Errors
/// * Returns the first error any rule hits; later rules do not run
pub fn run(options: &RunOptions) -> Result<Vec<MirrorContext>> {
    let rules = resolve_rules(options)?;
    debug!("Running {} rules", rules.len());

    let mut contexts = Vec::with_capacity(rules.len());
    for rule in &rules {
        let context = mirror(&rule.root, rule, &options.mirror)
            .with_context(|| format!("Rule '{}' failed", rule.title))?;
        contexts.push(context);
    }

    if options.mirror.dry_run {
        print_plan(&contexts);
    }

    Ok(contexts)
}

/// Prints the copies a dry run would have made
pub fn print_plan(contexts: &[MirrorContext]) {
    let planned: Vec<_> = contexts
        .iter()
        .flat_map(|context| context.planned_copies.iter())
        .collect();

    if planned.is_empty() {
        println!("\nNothing to mirror.");
        return;
    }

    println!("\nDetailed plan of copies:");
    println!("========================");
    for copy in &planned {
        let title = format_message(&copy.rule_title, &copy.rule_title.bold().blue().to_string());
        println!("Rule: {title}");
        println!("  From: {}", copy.source.display());
        println!("  To:   {}", copy.destination.display());
    }

    println!("\nSummary:");
    println!("--------");
    println!("  Files to be copied: {}", planned.len());
    println!("\nRun without --dry flag to execute these copies.");
}
