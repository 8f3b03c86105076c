//! File discovery module
//!
//! This module contains components for walking directory trees and finding files.

mod scanner;

pub use scanner::{WalkResult, walk_matching};
