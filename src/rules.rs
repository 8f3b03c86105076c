//! Mirror rules
//!
//! A rule pairs the extension a walk looks for with the substitutions applied
//! to every matching path: a literal text replacement on the directory part
//! and an extension swap on the base name.

use std::ffi::OsStr;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::Deserialize;

use crate::config::deserializer::deserialize_expanded_pathbuf;
use crate::constants::{ASSEMBLY_EXTENSION, ASSEMBLY_ROOT, SOURCE_EXTENSION, SOURCE_ROOT};

pub type RulesList = Vec<TransformRule>;

/// A single (extension match, root substitution, extension substitution) rule
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TransformRule {
    /// Name shown in log messages and the dry-run plan
    pub title: String,
    /// Directory the walk starts from
    #[serde(deserialize_with = "deserialize_expanded_pathbuf")]
    pub root: PathBuf,
    /// Suffix a file name must end with to be mirrored (case-sensitive)
    pub extension: String,
    /// Text replaced in the directory part of every matching path
    #[serde(default)]
    pub root_from: String,
    /// Replacement for `root_from`; empty removes the text
    #[serde(default)]
    pub root_to: String,
    /// Suffix that replaces `extension` on the base name, defaults to `extension`
    #[serde(default)]
    pub target_extension: Option<String>,
}

impl TransformRule {
    /// `src/**/*.S` is copied to `asm/**/*.S`
    pub fn forward() -> Self {
        TransformRule {
            title: "forward".to_string(),
            root: PathBuf::from(SOURCE_ROOT),
            extension: SOURCE_EXTENSION.to_string(),
            root_from: SOURCE_ROOT.to_string(),
            root_to: ASSEMBLY_ROOT.to_string(),
            target_extension: Some(SOURCE_EXTENSION.to_string()),
        }
    }

    /// `asm/**/*.asm` is copied to `**/*.S`
    ///
    /// The `asm` text is removed rather than replaced with `src`, so this is
    /// not the inverse of [`TransformRule::forward`].
    pub fn reverse() -> Self {
        TransformRule {
            title: "reverse".to_string(),
            root: PathBuf::from(ASSEMBLY_ROOT),
            extension: ASSEMBLY_EXTENSION.to_string(),
            root_from: ASSEMBLY_ROOT.to_string(),
            root_to: String::new(),
            target_extension: Some(SOURCE_EXTENSION.to_string()),
        }
    }

    /// Replace the walk root, keeping every substitution as it is
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    /// Whether a file name ends with the rule's extension
    ///
    /// The suffix is compared on the raw name, so names that are not valid
    /// Unicode still match.
    pub fn matches(&self, file_name: impl AsRef<OsStr>) -> bool {
        file_name
            .as_ref()
            .as_encoded_bytes()
            .ends_with(self.extension.as_bytes())
    }

    /// The extension written on destination files
    pub fn target_extension(&self) -> &str {
        self.target_extension.as_deref().unwrap_or(&self.extension)
    }
}

/// Which built-in rules a run applies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// `src` -> `asm`, `.S` kept
    Forward,
    /// `asm` removed, `.asm` -> `.S`
    Reverse,
    /// Forward followed by reverse
    Both,
}

impl Direction {
    /// The built-in rules for this direction, in the order they run
    pub fn rules(&self) -> RulesList {
        match self {
            Direction::Forward => vec![TransformRule::forward()],
            Direction::Reverse => vec![TransformRule::reverse()],
            Direction::Both => vec![TransformRule::forward(), TransformRule::reverse()],
        }
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "forward" => Ok(Direction::Forward),
            "reverse" => Ok(Direction::Reverse),
            "both" => Ok(Direction::Both),
            _ => Err(format!("Unknown direction: {s}")),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Forward => "forward",
            Direction::Reverse => "reverse",
            Direction::Both => "both",
        };
        write!(f, "{name}")
    }
}
