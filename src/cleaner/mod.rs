//! Cleaner module - scan-and-act engine for dependency folders
//!
//! This module locates dependency and virtual-environment folders like
//! node_modules, venv, .venv under a root directory and either records them
//! in the root's ignore manifest or deletes them recursively.

pub mod config;
pub mod deleter;
pub mod error;
pub mod manifest;
pub mod patterns;
pub mod scanner;
pub mod stats;

pub use config::Config;
pub use deleter::delete_tree;
pub use error::SweepError;
pub use manifest::{manifest_entry, Manifest};
pub use patterns::TargetMatcher;
pub use scanner::Scanner;
pub use stats::Stats;
