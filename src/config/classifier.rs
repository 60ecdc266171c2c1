//! Path classification and workflow lookup

use super::model::Configuration;
use super::names::{GroupName, WorkflowName};
use std::collections::BTreeSet;
use tracing::trace;

impl Configuration {
    /// Name of the first group, in declaration order, whose patterns match `path`
    ///
    /// A hit increments the counter of the first matching pattern of that
    /// group. Blank paths never match, even against a catch-all pattern, and
    /// unmatched paths leave every counter untouched.
    pub fn classify(&self, path: &str) -> Option<&GroupName> {
        if path.trim().is_empty() {
            trace!("Skipping blank path");
            return None;
        }

        for (group_index, group) in self.groups().iter().enumerate() {
            if let Some(pattern_index) = group.find_match(path) {
                self.usage().record(group_index, pattern_index);
                trace!(
                    "'{}' matched group '{}' by pattern #{}",
                    path,
                    group.name(),
                    pattern_index
                );
                return Some(group.name());
            }
        }
        trace!("'{}' matched no group", path);
        None
    }

    /// Every workflow depending on at least one of `groups`
    pub fn workflows_for<'a>(
        &self,
        groups: impl IntoIterator<Item = &'a GroupName>,
    ) -> BTreeSet<WorkflowName> {
        let groups: BTreeSet<&GroupName> = groups.into_iter().collect();
        if groups.is_empty() {
            return BTreeSet::new();
        }

        self.workflows()
            .iter()
            .filter(|w| groups.iter().any(|g| w.depends_on(g)))
            .map(|w| w.name.clone())
            .collect()
    }
}
