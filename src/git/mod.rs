//! Git collaborators: tracked file listing and changed files between two refs

pub mod error;
pub mod parsers;

pub use error::GitError;
pub use parsers::{parse_changed_files, parse_file_listing};

use crate::subprocess::{ProcessCommandBuilder, ProcessOutput, ProcessRunner};
use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;

/// Read-only git queries needed by the checks
#[async_trait]
pub trait GitReader: Send + Sync {
    /// Every file tracked at `HEAD`, relative to the repository root
    async fn list_files(&self, repo: &Path) -> Result<Vec<String>, GitError>;

    /// Files that differ between `change` and `base`
    ///
    /// May end with an empty entry; callers must tolerate it.
    async fn changed_files(
        &self,
        repo: &Path,
        change: &str,
        base: &str,
    ) -> Result<Vec<String>, GitError>;
}

/// Production implementation of git queries
pub struct GitCommandRunner {
    process_runner: Arc<dyn ProcessRunner>,
}

impl GitCommandRunner {
    pub fn new(process_runner: Arc<dyn ProcessRunner>) -> Self {
        Self { process_runner }
    }

    /// Run git with `args` in `path`, failing on a non-zero exit
    async fn run_git_command(&self, path: &Path, args: &[&str]) -> Result<ProcessOutput, GitError> {
        let command = ProcessCommandBuilder::new("git")
            .args(args)
            .current_dir(path)
            .build();

        let output = self.process_runner.run(command).await?;
        if output.status.success() {
            Ok(output)
        } else {
            let subcommand = args.first().copied().unwrap_or_default();
            Err(GitError::from_failure(
                subcommand,
                output.status.code().unwrap_or(-1),
                &output.stderr,
            ))
        }
    }
}

#[async_trait]
impl GitReader for GitCommandRunner {
    async fn list_files(&self, repo: &Path) -> Result<Vec<String>, GitError> {
        let output = self
            .run_git_command(
                repo,
                &["ls-tree", "--full-tree", "--name-only", "-r", "HEAD"],
            )
            .await?;
        let files = parse_file_listing(&output.stdout);
        tracing::debug!("git ls-tree listed {} files", files.len());
        Ok(files)
    }

    async fn changed_files(
        &self,
        repo: &Path,
        change: &str,
        base: &str,
    ) -> Result<Vec<String>, GitError> {
        let output = self
            .run_git_command(repo, &["diff-tree", "--name-only", "-r", change, base])
            .await?;
        let files = parse_changed_files(&output.stdout);
        tracing::debug!("git diff-tree {}..{} returned {} entries", base, change, files.len());
        Ok(files)
    }
}
