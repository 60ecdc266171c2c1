use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use super::error::ProcessError;
use super::runner::{ExitStatus, ProcessCommand, ProcessOutput, ProcessRunner};

type ArgsMatcher = Box<dyn Fn(&[String]) -> bool + Send + Sync>;

/// Process runner that replays canned responses and records every call
///
/// Clones share state, so a test keeps one handle while the code under test
/// owns another.
#[derive(Clone, Default)]
pub struct MockProcessRunner {
    responses: Arc<Mutex<Vec<CannedResponse>>>,
    calls: Arc<Mutex<Vec<ProcessCommand>>>,
}

struct CannedResponse {
    program: String,
    args_matcher: Option<ArgsMatcher>,
    output: ProcessOutput,
}

impl CannedResponse {
    fn matches(&self, command: &ProcessCommand) -> bool {
        self.program == command.program
            && self
                .args_matcher
                .as_ref()
                .map_or(true, |matcher| matcher(&command.args))
    }
}

/// Builder for one canned response, registered by [`MockCommandConfig::finish`]
pub struct MockCommandConfig {
    runner: MockProcessRunner,
    response: CannedResponse,
}

impl MockProcessRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start describing the response to a call of `program`
    pub fn expect_command(&mut self, program: &str) -> MockCommandConfig {
        MockCommandConfig {
            runner: self.clone(),
            response: CannedResponse {
                program: program.to_string(),
                args_matcher: None,
                output: ProcessOutput {
                    status: ExitStatus::Success,
                    stdout: String::new(),
                    stderr: String::new(),
                    duration: Duration::ZERO,
                },
            },
        }
    }

    /// Every command run so far, in call order
    pub fn get_call_history(&self) -> Vec<ProcessCommand> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProcessRunner for MockProcessRunner {
    async fn run(&self, command: ProcessCommand) -> Result<ProcessOutput, ProcessError> {
        self.calls.lock().unwrap().push(command.clone());

        self.responses
            .lock()
            .unwrap()
            .iter()
            .find(|response| response.matches(&command))
            .map(|response| response.output.clone())
            .ok_or_else(|| ProcessError::UnexpectedCommand(command.display()))
    }
}

impl MockCommandConfig {
    /// Only answer calls whose arguments satisfy `matcher`
    pub fn with_args<F>(mut self, matcher: F) -> Self
    where
        F: Fn(&[String]) -> bool + Send + Sync + 'static,
    {
        self.response.args_matcher = Some(Box::new(matcher));
        self
    }

    pub fn returns_stdout(mut self, stdout: &str) -> Self {
        self.response.output.stdout = stdout.to_string();
        self
    }

    pub fn returns_stderr(mut self, stderr: &str) -> Self {
        self.response.output.stderr = stderr.to_string();
        self
    }

    pub fn returns_exit_code(mut self, code: i32) -> Self {
        self.response.output.status = match code {
            0 => ExitStatus::Success,
            code => ExitStatus::Error(code),
        };
        self
    }

    pub fn finish(self) {
        self.runner.responses.lock().unwrap().push(self.response);
    }
}
