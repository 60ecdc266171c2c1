//! # check-file-changed
//!
//! A change-detection gate for CI pipelines. Changed files are classified
//! into named groups by case-insensitive regular expressions, and groups are
//! mapped to the workflows that need to run.
//!
//! ## Usage
//!
//! ```bash
//! check-file-changed set-output [--change-ref HEAD] [--base-ref HEAD^1] [--config-file config.toml]
//! check-file-changed coverage [--path-to-repo .] [--config-file config.toml]
//! ```
//!
//! ## Modules
//!
//! - `config` - Groups, workflows, loading and validation of the configuration
//! - `coverage` - Audit of every tracked file against the configuration
//! - `changes` - Affected workflows and the `output-NN` flags for a change set
//! - `git` - Tracked file listing and diffs between references
//! - `subprocess` - Process execution behind a mockable trait
//! - `output` - Colored console output and CI integration
//! - `app` - Application configuration, logging and fatal error handling
//! - `cli` - Argument parsing and command implementations
//! - `error` - Unified error type and error codes

pub mod app;
pub mod changes;
pub mod cli;
pub mod config;
pub mod coverage;
pub mod error;
pub mod git;
pub mod output;
pub mod subprocess;

pub use error::{CheckerError, Result};
