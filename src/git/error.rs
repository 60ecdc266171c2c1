//! Git operation error types

use crate::error::{CheckerError, ErrorCode};
use crate::subprocess::ProcessError;
use thiserror::Error;

/// Git-specific errors
#[derive(Debug, Error)]
pub enum GitError {
    #[error("Not a git repository: {0}")]
    NotARepository(String),

    #[error("Invalid git reference: {0}")]
    InvalidReference(String),

    #[error("git {command} exited with code {code}: {stderr}")]
    CommandFailed {
        command: String,
        code: i32,
        stderr: String,
    },

    #[error("Failed to run git: {0}")]
    Process(#[from] ProcessError),
}

impl GitError {
    /// Classify a failed git invocation by its stderr
    pub fn from_failure(command: &str, code: i32, stderr: &str) -> Self {
        let stderr = stderr.trim();
        if stderr.contains("not a git repository") {
            GitError::NotARepository(stderr.to_string())
        } else if stderr.contains("bad revision")
            || stderr.contains("unknown revision")
            || stderr.contains("Not a valid object name")
            || stderr.contains("not a tree object")
        {
            GitError::InvalidReference(stderr.to_string())
        } else {
            GitError::CommandFailed {
                command: command.to_string(),
                code,
                stderr: stderr.to_string(),
            }
        }
    }
}

/// Convert GitError to CheckerError
impl From<GitError> for CheckerError {
    fn from(err: GitError) -> Self {
        let (code, operation) = match &err {
            GitError::NotARepository(_) => (ErrorCode::GIT_REPO_NOT_FOUND, "repository check"),
            GitError::InvalidReference(_) => (ErrorCode::GIT_INVALID_REF, "reference parsing"),
            GitError::CommandFailed { .. } => (ErrorCode::GIT_COMMAND_FAILED, "command execution"),
            GitError::Process(_) => (ErrorCode::GIT_SPAWN_FAILED, "process spawn"),
        };

        CheckerError::git(code, err.to_string(), operation).with_source(err)
    }
}
