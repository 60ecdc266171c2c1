use super::error::ConfigError;
use super::group::PatternGroup;
use super::model::Workflow;
use super::names::GroupName;
use std::collections::BTreeSet;

pub struct ConfigValidator;

impl ConfigValidator {
    /// Run every semantic check, stopping at the first violation
    pub fn validate(workflows: &[Workflow], groups: &[PatternGroup]) -> Result<(), ConfigError> {
        Self::validate_examples(groups)?;

        let declared: BTreeSet<&GroupName> = groups.iter().map(|g| g.name()).collect();
        Self::validate_references(workflows, &declared)?;
        Self::validate_usage(workflows, &declared)?;

        Ok(())
    }

    /// Every example must match at least one of its own group's patterns
    pub fn validate_examples(groups: &[PatternGroup]) -> Result<(), ConfigError> {
        for group in groups {
            for example in group.examples() {
                if !group.accepts(example) {
                    return Err(ConfigError::ExampleMismatch {
                        group: group.name().clone(),
                        example: example.clone(),
                        patterns: group.pattern_sources(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Workflows may only reference declared groups
    pub fn validate_references(
        workflows: &[Workflow],
        declared: &BTreeSet<&GroupName>,
    ) -> Result<(), ConfigError> {
        for workflow in workflows {
            let unknown: Vec<GroupName> = workflow
                .groups
                .iter()
                .filter(|g| !declared.contains(g))
                .cloned()
                .collect();

            if !unknown.is_empty() {
                return Err(ConfigError::UnknownGroups {
                    workflow: workflow.name.clone(),
                    groups: unknown,
                });
            }
        }
        Ok(())
    }

    /// Every declared group must be used by at least one workflow
    pub fn validate_usage(
        workflows: &[Workflow],
        declared: &BTreeSet<&GroupName>,
    ) -> Result<(), ConfigError> {
        let used: BTreeSet<&GroupName> = workflows.iter().flat_map(|w| &w.groups).collect();

        let unused: Vec<GroupName> = declared
            .iter()
            .filter(|g| !used.contains(*g))
            .map(|g| (*g).clone())
            .collect();

        if unused.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::UnusedGroups(unused))
        }
    }
}
