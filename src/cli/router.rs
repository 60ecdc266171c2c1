//! Command routing and execution
//!
//! This module handles routing CLI commands to their respective implementations.

use crate::app::AppConfig;
use crate::cli::args::Commands;
use crate::cli::commands::{run_coverage_command, run_set_output_command};
use anyhow::Result;

/// Execute a CLI command and return the process exit code
pub async fn execute_command(command: Commands, config: &AppConfig) -> Result<i32> {
    match command {
        Commands::Coverage {
            path_to_repo,
            config_file,
        } => run_coverage_command(&path_to_repo, &config_file, config).await,
        Commands::SetOutput {
            change_ref,
            base_ref,
            config_file,
        } => {
            run_set_output_command(&config_file, &change_ref, &base_ref, config).await?;
            Ok(0)
        }
    }
}
