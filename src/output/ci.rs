//! CI environment detection and the step output file

use crate::error::{CheckerError, ErrorCode};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const GITHUB_ACTIONS_VAR: &str = "GITHUB_ACTIONS";
pub const GITHUB_OUTPUT_VAR: &str = "GITHUB_OUTPUT";

/// Where the tool is running
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CiEnvironment {
    #[default]
    Local,
    GitHub {
        output_file: Option<PathBuf>,
    },
}

impl CiEnvironment {
    /// Detect from the process environment
    pub fn detect() -> Self {
        Self::from_vars(
            std::env::var(GITHUB_ACTIONS_VAR).ok().as_deref(),
            std::env::var_os(GITHUB_OUTPUT_VAR).map(PathBuf::from),
        )
    }

    /// GitHub Actions is recognized only when `GITHUB_ACTIONS` is exactly `true`
    pub fn from_vars(github_actions: Option<&str>, output_file: Option<PathBuf>) -> Self {
        if github_actions == Some("true") {
            Self::GitHub { output_file }
        } else {
            Self::Local
        }
    }

    pub fn is_github(&self) -> bool {
        matches!(self, Self::GitHub { .. })
    }

    /// Append `text` verbatim to the step output file when running on GitHub
    ///
    /// Returns `Ok(false)` outside CI, where outputs are only printed.
    pub fn write_outputs(&self, text: &str) -> Result<bool, CheckerError> {
        match self {
            Self::Local => {
                debug!("Not running in GitHub Actions, outputs are not written");
                Ok(false)
            }
            Self::GitHub { output_file: None } => Err(CheckerError::output(
                ErrorCode::OUTPUT_NOT_CONFIGURED,
                format!("{GITHUB_ACTIONS_VAR} is set but {GITHUB_OUTPUT_VAR} is not"),
                None,
            )),
            Self::GitHub {
                output_file: Some(path),
            } => {
                append(path, text).map_err(|e| {
                    CheckerError::output(
                        ErrorCode::OUTPUT_WRITE_FAILED,
                        "Failed to write step outputs",
                        Some(path.clone()),
                    )
                    .with_source(e)
                })?;
                info!("Wrote step outputs to {}", path.display());
                Ok(true)
            }
        }
    }
}

fn append(path: &Path, text: &str) -> std::io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(text.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_detection() {
        assert_eq!(CiEnvironment::from_vars(None, None), CiEnvironment::Local);
        assert_eq!(
            CiEnvironment::from_vars(Some("false"), None),
            CiEnvironment::Local
        );
        assert!(CiEnvironment::from_vars(Some("true"), None).is_github());
    }

    #[test]
    fn test_local_does_not_write() {
        assert!(!CiEnvironment::Local.write_outputs("output-01=true").unwrap());
    }

    #[test]
    fn test_github_appends_verbatim() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("output");
        std::fs::write(&path, "existing=1\n").unwrap();

        let ci = CiEnvironment::from_vars(Some("true"), Some(path.clone()));
        assert!(ci.write_outputs("output-01=true\noutput-02=false").unwrap());

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "existing=1\noutput-01=true\noutput-02=false"
        );
    }

    #[test]
    fn test_github_without_output_file() {
        let ci = CiEnvironment::from_vars(Some("true"), None);
        let err = ci.write_outputs("output-01=true").unwrap_err();
        assert!(err.to_string().contains(GITHUB_OUTPUT_VAR));
        assert_eq!(err.code(), ErrorCode::OUTPUT_NOT_CONFIGURED);
    }
}
