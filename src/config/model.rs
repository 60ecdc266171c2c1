//! The validated configuration model

use super::error::ConfigError;
use super::group::PatternGroup;
use super::names::{GroupName, WorkflowName};
use super::usage::PatternUsage;
use super::validator::ConfigValidator;
use std::collections::BTreeSet;

/// A workflow and the groups it depends on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workflow {
    pub name: WorkflowName,
    pub groups: BTreeSet<GroupName>,
}

impl Workflow {
    pub fn new<G>(name: impl Into<WorkflowName>, groups: impl IntoIterator<Item = G>) -> Self
    where
        G: Into<GroupName>,
    {
        Self {
            name: name.into(),
            groups: groups.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether this workflow depends on `group`
    pub fn depends_on(&self, group: &GroupName) -> bool {
        self.groups.contains(group)
    }
}

/// A pattern that never produced a match
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnusedPattern {
    pub group: GroupName,
    pub pattern: String,
}

/// Groups and workflows, validated and ready for classification
///
/// Group order is match priority and workflow order is output order; both
/// follow the configuration document.
#[derive(Debug)]
pub struct Configuration {
    workflows: Vec<Workflow>,
    groups: Vec<PatternGroup>,
    usage: PatternUsage,
}

impl Configuration {
    /// Validate `workflows` against `groups` and build the model
    pub fn new(workflows: Vec<Workflow>, groups: Vec<PatternGroup>) -> Result<Self, ConfigError> {
        ConfigValidator::validate(&workflows, &groups)?;

        let usage = PatternUsage::new(groups.iter().map(|g| g.patterns().len()));
        Ok(Self {
            workflows,
            groups,
            usage,
        })
    }

    pub fn workflows(&self) -> &[Workflow] {
        &self.workflows
    }

    pub fn groups(&self) -> &[PatternGroup] {
        &self.groups
    }

    pub fn usage(&self) -> &PatternUsage {
        &self.usage
    }

    pub fn workflow_names(&self) -> impl Iterator<Item = &WorkflowName> {
        self.workflows.iter().map(|w| &w.name)
    }

    pub fn group(&self, name: &str) -> Option<&PatternGroup> {
        self.groups.iter().find(|g| g.name().as_str() == name)
    }

    /// Patterns whose counters are still zero, in declaration order
    pub fn unused_patterns(&self) -> Vec<UnusedPattern> {
        self.usage
            .unused()
            .into_iter()
            .filter_map(|(g, p)| {
                let group = self.groups.get(g)?;
                let pattern = group.patterns().get(p)?;
                Some(UnusedPattern {
                    group: group.name().clone(),
                    pattern: pattern.as_str().to_string(),
                })
            })
            .collect()
    }
}
