//! Repository coverage audit
//!
//! Classifies every tracked file and then checks which patterns were never
//! exercised. Both findings are collected in full; neither stops the other.

use crate::config::{Configuration, GroupName, UnusedPattern, WorkflowName};
use std::collections::BTreeSet;
use tracing::debug;

/// Exit code contribution when at least one file matches no group
pub const MISSED_FILES_EXIT_CODE: i32 = 1;
/// Exit code contribution when at least one pattern matched nothing
pub const UNUSED_PATTERNS_EXIT_CODE: i32 = 2;

/// A file that belongs to a group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoveredFile {
    pub path: String,
    pub group: GroupName,
    pub workflows: BTreeSet<WorkflowName>,
}

/// Outcome of auditing a full file listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoverageReport {
    pub covered: Vec<CoveredFile>,
    pub missed: Vec<String>,
    pub unused_patterns: Vec<UnusedPattern>,
}

impl CoverageReport {
    pub fn total_files(&self) -> usize {
        self.covered.len() + self.missed.len()
    }

    pub fn is_fully_covered(&self) -> bool {
        self.missed.is_empty()
    }

    pub fn all_patterns_used(&self) -> bool {
        self.unused_patterns.is_empty()
    }

    /// Combined status: 0 when clean, +1 for missed files, +2 for unused patterns
    pub fn exit_code(&self) -> i32 {
        let mut code = 0;
        if !self.is_fully_covered() {
            code += MISSED_FILES_EXIT_CODE;
        }
        if !self.all_patterns_used() {
            code += UNUSED_PATTERNS_EXIT_CODE;
        }
        code
    }

    /// Missed files in sorted order, as printed in the summary
    pub fn sorted_missed(&self) -> Vec<&str> {
        let mut missed: Vec<&str> = self.missed.iter().map(String::as_str).collect();
        missed.sort_unstable();
        missed
    }
}

/// Classify every path in `files` and report coverage against `config`
///
/// Usage counters are accumulated on `config`, so the unused-pattern check
/// reflects every classification made on it so far. Audit a freshly loaded
/// configuration to get a report for exactly this listing.
pub fn audit<S: AsRef<str>>(config: &Configuration, files: &[S]) -> CoverageReport {
    let mut report = CoverageReport::default();

    for path in files {
        let path = path.as_ref();
        match config.classify(path) {
            Some(group) => report.covered.push(CoveredFile {
                path: path.to_string(),
                group: group.clone(),
                workflows: config.workflows_for([group]),
            }),
            None => report.missed.push(path.to_string()),
        }
    }

    report.unused_patterns = config.unused_patterns();
    debug!(
        "Coverage: {} covered, {} missed, {} unused patterns",
        report.covered.len(),
        report.missed.len(),
        report.unused_patterns.len()
    );
    report
}
