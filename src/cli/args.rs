//! CLI argument structures
//!
//! This module defines the command-line interface of check-file-changed:
//! the top-level [`Cli`] and its two subcommands.

use crate::cli::validation::config_path;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Decide which CI workflows a change set affects
#[derive(Parser, Debug)]
#[command(name = "check-file-changed")]
#[command(about = "check-file-changed - Run only the CI workflows affected by a change", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace, -vvv for all)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check which files in the repository are covered by the configured groups
    #[command(name = "coverage")]
    Coverage {
        /// Repository to list tracked files from
        #[arg(long, default_value = ".")]
        path_to_repo: PathBuf,

        /// Configuration file with workflows and groups
        #[arg(long, default_value = "config.toml", value_parser = config_path)]
        config_file: PathBuf,
    },

    /// Detect changed files and set the CI step outputs
    #[command(name = "set-output")]
    SetOutput {
        /// The latest commit of the change
        #[arg(long, default_value = "HEAD")]
        change_ref: String,

        /// The latest commit of the target branch
        #[arg(long, default_value = "HEAD^1")]
        base_ref: String,

        /// Configuration file with workflows and groups
        #[arg(long, default_value = "config.toml", value_parser = config_path)]
        config_file: PathBuf,
    },
}
