//! Common test utilities and helpers

#![allow(dead_code)]

use anyhow::{bail, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Workflows `wa`, `wb` and `wab` over groups `a` and `b`
pub const SAMPLE_CONFIG: &str = r#"
[workflow]
wa = ["a"]
wb = ["b"]
wab = ["a", "b"]

[group.a]
examples = ["file_a"]
patterns = ["^file_a$"]

[group.b]
examples = ["file_b"]
patterns = ["^file_b$"]
"#;

/// Test repository builder backed by a temporary directory
pub struct TestRepoBuilder {
    temp_dir: TempDir,
    files: Vec<(PathBuf, String)>,
}

impl TestRepoBuilder {
    pub fn new() -> Result<Self> {
        Ok(Self {
            temp_dir: TempDir::new()?,
            files: Vec::new(),
        })
    }

    /// Add a file to the initial commit
    pub fn with_file(mut self, path: impl AsRef<Path>, content: &str) -> Self {
        self.files
            .push((path.as_ref().to_path_buf(), content.to_string()));
        self
    }

    /// Initialize git, write the files and commit them
    pub fn build(self) -> Result<TestRepo> {
        let repo = TestRepo {
            temp_dir: self.temp_dir,
        };
        repo.git(&["init", "--quiet"])?;
        repo.git(&["config", "user.email", "test@example.com"])?;
        repo.git(&["config", "user.name", "Test User"])?;
        repo.git(&["config", "commit.gpgsign", "false"])?;

        for (path, content) in &self.files {
            repo.write_file(path, content)?;
        }
        repo.commit_all("initial")?;
        Ok(repo)
    }
}

/// A committed git repository that is removed on drop
pub struct TestRepo {
    temp_dir: TempDir,
}

impl TestRepo {
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn write_file(&self, path: impl AsRef<Path>, content: &str) -> Result<PathBuf> {
        let full_path = self.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&full_path, content)?;
        Ok(full_path)
    }

    pub fn commit_all(&self, message: &str) -> Result<()> {
        self.git(&["add", "--all"])?;
        self.git(&["commit", "--quiet", "--allow-empty", "-m", message])
    }

    /// Run git in the repository and fail on a non-zero exit
    pub fn git(&self, args: &[&str]) -> Result<()> {
        let output = Command::new("git")
            .current_dir(self.path())
            .args(args)
            .output()?;
        if !output.status.success() {
            bail!(
                "git {:?} failed: {}",
                args,
                String::from_utf8_lossy(&output.stderr)
            );
        }
        Ok(())
    }
}
