//! Configuration error types

use super::names::{join_sorted, GroupName, WorkflowName};
use crate::error::{CheckerError, ErrorCode};
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading and validating the configuration document
///
/// Any of these aborts loading; a partially valid configuration is never used.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Expect only 'workflow' and 'group' toplevel sections")]
    InvalidToplevel,

    #[error("Invalid value for {entity}: expected {expected}")]
    InvalidValue {
        entity: String,
        expected: &'static str,
    },

    #[error("Expect only 'examples' and 'patterns' got {} for [group.{group}]", format_key_set(.keys))]
    InvalidGroupKeys { group: GroupName, keys: Vec<String> },

    #[error("Examples could not be empty for group: {0}")]
    EmptyExamples(GroupName),

    #[error("Patterns could not be empty for group: {0}")]
    EmptyPatterns(GroupName),

    #[error("Invalid pattern '{pattern}' in group '{group}': {source}")]
    InvalidPattern {
        group: GroupName,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("'{group}' example '{example}' does not match any pattern: {}", format_pattern_list(.patterns))]
    ExampleMismatch {
        group: GroupName,
        example: String,
        patterns: Vec<String>,
    },

    #[error("Workflow '{workflow}' has unknown groups: {}", join_sorted(.groups))]
    UnknownGroups {
        workflow: WorkflowName,
        groups: Vec<GroupName>,
    },

    #[error("Unused groups: {}", join_sorted(.0))]
    UnusedGroups(Vec<GroupName>),
}

fn format_key_set(keys: &[String]) -> String {
    let mut keys: Vec<&str> = keys.iter().map(String::as_str).collect();
    keys.sort_unstable();
    let quoted: Vec<String> = keys.iter().map(|k| format!("'{k}'")).collect();
    format!("{{{}}}", quoted.join(", "))
}

fn format_pattern_list(patterns: &[String]) -> String {
    let quoted: Vec<String> = patterns.iter().map(|p| format!("'{p}'")).collect();
    format!("[{}]", quoted.join(", "))
}

impl ConfigError {
    /// Registry code for this error
    pub fn code(&self) -> u16 {
        match self {
            ConfigError::Read { source, .. } if source.kind() == std::io::ErrorKind::NotFound => {
                ErrorCode::CONFIG_NOT_FOUND
            }
            ConfigError::Read { .. } => ErrorCode::CONFIG_UNREADABLE,
            ConfigError::Parse(_) => ErrorCode::CONFIG_INVALID_TOML,
            ConfigError::InvalidToplevel | ConfigError::InvalidValue { .. } => {
                ErrorCode::CONFIG_INVALID_STRUCTURE
            }
            ConfigError::InvalidGroupKeys { .. }
            | ConfigError::EmptyExamples(_)
            | ConfigError::EmptyPatterns(_) => ErrorCode::CONFIG_INVALID_GROUP,
            ConfigError::InvalidPattern { .. } => ErrorCode::CONFIG_INVALID_PATTERN,
            ConfigError::ExampleMismatch { .. } => ErrorCode::CONFIG_EXAMPLE_MISMATCH,
            ConfigError::UnknownGroups { .. } => ErrorCode::CONFIG_UNKNOWN_GROUP,
            ConfigError::UnusedGroups(_) => ErrorCode::CONFIG_UNUSED_GROUP,
        }
    }
}

/// Convert ConfigError to CheckerError
impl From<ConfigError> for CheckerError {
    fn from(err: ConfigError) -> Self {
        CheckerError::config(err.code(), err.to_string()).with_source(err)
    }
}
