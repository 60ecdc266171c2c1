//! CLI command handlers
//!
//! Argument parsing, input validation, routing and the two commands.

pub mod args;
pub mod commands;
pub mod router;
pub mod validation;

pub use args::{Cli, Commands};
pub use router::execute_command;
pub use validation::config_path;
