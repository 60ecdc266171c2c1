//! Change detection: from changed paths to per-workflow output flags

use crate::config::{Configuration, GroupName, WorkflowName};
use std::collections::BTreeSet;
use std::fmt;
use tracing::debug;

/// Prefix of every output key; the orchestrator addresses flags by position
pub const OUTPUT_PREFIX: &str = "output-";

/// Output key for the workflow at 1-based `position`, e.g. `output-03`
pub fn output_key(position: usize) -> String {
    format!("{OUTPUT_PREFIX}{position:02}")
}

/// Whether one workflow is affected, keyed by its declaration position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowFlag {
    pub position: usize,
    pub workflow: WorkflowName,
    pub affected: bool,
}

impl WorkflowFlag {
    pub fn key(&self) -> String {
        output_key(self.position)
    }
}

impl fmt::Display for WorkflowFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key(), self.affected)
    }
}

/// Groups and workflows touched by a change set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeReport {
    pub matched_groups: BTreeSet<GroupName>,
    pub affected_workflows: BTreeSet<WorkflowName>,
    /// One flag per workflow, in declaration order
    pub flags: Vec<WorkflowFlag>,
}

impl ChangeReport {
    /// `output-NN=<bool>` lines joined by newlines, without a trailing newline
    pub fn render_output(&self) -> String {
        self.flags
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn is_affected(&self, workflow: &str) -> bool {
        self.affected_workflows.contains(workflow)
    }
}

/// Classify `changed_files` and decide which workflows they affect
///
/// Duplicates collapse and unmatched entries (including the blank line git
/// leaves at the end of its output) contribute nothing.
pub fn report<S: AsRef<str>>(config: &Configuration, changed_files: &[S]) -> ChangeReport {
    let matched_groups: BTreeSet<GroupName> = changed_files
        .iter()
        .filter_map(|path| config.classify(path.as_ref()))
        .cloned()
        .collect();

    let affected_workflows = config.workflows_for(&matched_groups);

    let flags = config
        .workflow_names()
        .enumerate()
        .map(|(index, workflow)| WorkflowFlag {
            position: index + 1,
            workflow: workflow.clone(),
            affected: affected_workflows.contains(workflow),
        })
        .collect();

    debug!(
        "{} changed paths matched {} groups and affect {} workflows",
        changed_files.len(),
        matched_groups.len(),
        affected_workflows.len()
    );

    ChangeReport {
        matched_groups,
        affected_workflows,
        flags,
    }
}

/// GitHub Actions job snippet exposing each workflow flag under its name
///
/// `config_file_name` is the file name the job should pass as `config-file`.
pub fn render_workflow_template(config: &Configuration, config_file_name: &str) -> String {
    let mut lines = vec![
        "jobs:".to_string(),
        "  detect-changed-files:".to_string(),
        "    runs-on: ubuntu-latest".to_string(),
        "    steps:".to_string(),
        "      - id: set-files-changed".to_string(),
        "        uses: cjkjvfnby/run_only_needed_actions@v1".to_string(),
        "        with:".to_string(),
        format!("          config-file: \".github/workflows/{config_file_name}\""),
        "    outputs:".to_string(),
    ];

    for (index, workflow) in config.workflow_names().enumerate() {
        lines.push(format!(
            "      {workflow}: ${{{{ steps.set-files-changed.outputs.{} }}}}",
            output_key(index + 1)
        ));
    }

    lines.join("\n")
}
