//! Crate-wide error type
//!
//! Module errors ([`ConfigError`](crate::config::ConfigError),
//! [`GitError`](crate::git::GitError)) convert into [`CheckerError`], which
//! carries a registry code and decides the process exit code.

use std::path::PathBuf;
use thiserror::Error;

pub mod codes;

pub use codes::{describe_error_code, ErrorCode};

type Source = Box<dyn std::error::Error + Send + Sync>;

/// Exit code for fatal errors that are not a [`CheckerError`]
///
/// Codes 1-3 are coverage results, so fatal errors start at 4.
pub const GENERAL_ERROR_EXIT_CODE: i32 = 7;

#[derive(Error, Debug)]
pub enum CheckerError {
    #[error("[E{code:04}] Configuration error: {message}")]
    Config {
        code: u16,
        message: String,
        #[source]
        source: Option<Source>,
    },

    #[error("[E{code:04}] CI output error: {message}")]
    Output {
        code: u16,
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<Source>,
    },

    #[error("[E{code:04}] Git {operation} failed: {message}")]
    Git {
        code: u16,
        message: String,
        operation: &'static str,
        #[source]
        source: Option<Source>,
    },
}

impl CheckerError {
    pub fn config(code: u16, message: impl Into<String>) -> Self {
        Self::Config {
            code,
            message: message.into(),
            source: None,
        }
    }

    pub fn output(code: u16, message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::Output {
            code,
            message: message.into(),
            path,
            source: None,
        }
    }

    pub fn git(code: u16, message: impl Into<String>, operation: &'static str) -> Self {
        Self::Git {
            code,
            message: message.into(),
            operation,
            source: None,
        }
    }

    /// Attach the underlying cause
    pub fn with_source(mut self, cause: impl Into<Source>) -> Self {
        match &mut self {
            Self::Config { source, .. } | Self::Output { source, .. } | Self::Git { source, .. } => {
                *source = Some(cause.into());
            }
        }
        self
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config { .. } => 4,
            Self::Output { .. } => 5,
            Self::Git { .. } => 6,
        }
    }

    pub fn code(&self) -> u16 {
        match self {
            Self::Config { code, .. } | Self::Output { code, .. } | Self::Git { code, .. } => *code,
        }
    }

    /// One-line message for the terminal
    pub fn user_message(&self) -> String {
        match self {
            Self::Config { message, .. } => format!("Configuration problem: {message}"),
            Self::Output {
                message,
                path: Some(path),
                ..
            } => format!("{message}: {}", path.display()),
            Self::Output { message, .. } => message.clone(),
            Self::Git {
                message, operation, ..
            } => format!("Git {operation} failed: {message}"),
        }
    }

    /// Full source chain plus the code description, shown with `-v`
    pub fn developer_message(&self) -> String {
        let mut message = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            message.push_str(&format!("\n  caused by: {cause}"));
            source = cause.source();
        }
        message.push_str(&format!("\n  ({})", describe_error_code(self.code())));
        message
    }
}

pub type Result<T> = std::result::Result<T, CheckerError>;
