//! Reading the TOML configuration document
//!
//! The document has exactly two tables:
//!
//! ```toml
//! [workflow]
//! docs = ["readme"]
//!
//! [group.readme]
//! examples = ["README.md"]
//! patterns = ['^README\.md$']
//! ```

use super::error::ConfigError;
use super::group::PatternGroup;
use super::model::{Configuration, Workflow};
use super::names::{GroupName, WorkflowName};
use serde::Deserialize;
use std::path::Path;
use toml::{Table, Value};
use tracing::{debug, trace};

const WORKFLOW_SECTION: &str = "workflow";
const GROUP_SECTION: &str = "group";
const EXAMPLES_KEY: &str = "examples";
const PATTERNS_KEY: &str = "patterns";

#[derive(Debug, Deserialize)]
struct RawGroup {
    examples: Vec<String>,
    patterns: Vec<String>,
}

/// Read, parse and validate the configuration at `path`
pub fn load_from_path(path: &Path) -> Result<Configuration, ConfigError> {
    debug!("Loading configuration from {}", path.display());
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    load_from_str(&content)
}

/// Parse and validate a configuration document
pub fn load_from_str(content: &str) -> Result<Configuration, ConfigError> {
    let table: Table = toml::from_str(content)?;
    load_from_table(table)
}

/// Validate an already parsed document
pub fn load_from_table(mut table: Table) -> Result<Configuration, ConfigError> {
    let has_exact_sections = table.len() == 2
        && table.contains_key(WORKFLOW_SECTION)
        && table.contains_key(GROUP_SECTION);
    if !has_exact_sections {
        return Err(ConfigError::InvalidToplevel);
    }

    let workflows = table
        .remove(WORKFLOW_SECTION)
        .ok_or(ConfigError::InvalidToplevel)
        .and_then(extract_workflows)?;
    let groups = table
        .remove(GROUP_SECTION)
        .ok_or(ConfigError::InvalidToplevel)
        .and_then(extract_groups)?;

    let config = Configuration::new(workflows, groups)?;
    debug!(
        "Loaded {} workflows and {} groups",
        config.workflows().len(),
        config.groups().len()
    );
    Ok(config)
}

fn expect_table(value: Value, entity: impl Into<String>) -> Result<Table, ConfigError> {
    match value {
        Value::Table(table) => Ok(table),
        _ => Err(ConfigError::InvalidValue {
            entity: entity.into(),
            expected: "a table",
        }),
    }
}

fn extract_workflows(section: Value) -> Result<Vec<Workflow>, ConfigError> {
    let section = expect_table(section, "[workflow]")?;

    section
        .into_iter()
        .map(|(name, value)| -> Result<Workflow, ConfigError> {
            let groups = value.try_into::<Vec<String>>().map_err(|_| {
                ConfigError::InvalidValue {
                    entity: format!("[workflow].{name}"),
                    expected: "a list of group names",
                }
            })?;
            trace!("Workflow '{}' depends on {:?}", name, groups);
            Ok(Workflow::new(WorkflowName::new(name), groups))
        })
        .collect()
}

fn extract_groups(section: Value) -> Result<Vec<PatternGroup>, ConfigError> {
    let section = expect_table(section, "[group]")?;

    section
        .into_iter()
        .map(|(name, value)| -> Result<PatternGroup, ConfigError> {
            let entity = format!("[group.{name}]");
            let group = expect_table(value, entity.as_str())?;
            let name = GroupName::new(name);

            let has_exact_keys = group.len() == 2
                && group.contains_key(EXAMPLES_KEY)
                && group.contains_key(PATTERNS_KEY);
            if !has_exact_keys {
                return Err(ConfigError::InvalidGroupKeys {
                    group: name,
                    keys: group.keys().cloned().collect(),
                });
            }

            let raw = Value::Table(group)
                .try_into::<RawGroup>()
                .map_err(|_| ConfigError::InvalidValue {
                    entity,
                    expected: "'examples' and 'patterns' as lists of strings",
                })?;
            trace!(
                "Group '{}': {} examples, {} patterns",
                name,
                raw.examples.len(),
                raw.patterns.len()
            );

            PatternGroup::compile(name, raw.examples, &raw.patterns)
        })
        .collect()
}
