use thiserror::Error;

/// Failure to run a process at all; a non-zero exit is not an error here
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("Command not found: {0}")]
    CommandNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Process output is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("Unexpected command: {0}")]
    UnexpectedCommand(String),
}
