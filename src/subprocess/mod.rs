//! Subprocess execution behind a trait so git calls can be mocked in tests

pub mod builder;
pub mod error;
pub mod mock;
pub mod runner;


pub use builder::ProcessCommandBuilder;
pub use error::ProcessError;
pub use mock::{MockCommandConfig, MockProcessRunner};
pub use runner::{ExitStatus, ProcessCommand, ProcessOutput, ProcessRunner, TokioProcessRunner};

use crate::git::GitCommandRunner;
use std::sync::Arc;

/// Hands out collaborators that share one process runner
#[derive(Clone)]
pub struct SubprocessManager {
    runner: Arc<dyn ProcessRunner>,
}

impl SubprocessManager {
    pub fn new(runner: Arc<dyn ProcessRunner>) -> Self {
        Self { runner }
    }

    pub fn production() -> Self {
        Self::new(Arc::new(TokioProcessRunner))
    }

    /// A manager backed by a mock, plus a handle to configure it
    pub fn mock() -> (Self, MockProcessRunner) {
        let mock = MockProcessRunner::new();
        (Self::new(Arc::new(mock.clone())), mock)
    }

    pub fn git(&self) -> GitCommandRunner {
        GitCommandRunner::new(Arc::clone(&self.runner))
    }
}
