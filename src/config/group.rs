//! File groups: a named set of patterns plus examples that must match them

use super::error::ConfigError;
use super::names::GroupName;
use regex::{Regex, RegexBuilder};
use std::borrow::Cow;

/// A named classification bucket
///
/// Matching is pure: [`PatternGroup::find_match`] reports which pattern hit
/// without recording anything. Usage counting lives in
/// [`PatternUsage`](super::usage::PatternUsage), owned by the configuration.
#[derive(Debug, Clone)]
pub struct PatternGroup {
    name: GroupName,
    examples: Vec<String>,
    patterns: Vec<Regex>,
}

impl PatternGroup {
    /// Compile `patterns` case-insensitively and build the group
    ///
    /// Both lists must be non-empty. Examples are not checked here; that is
    /// part of configuration validation.
    pub(crate) fn compile(
        name: GroupName,
        examples: Vec<String>,
        patterns: &[String],
    ) -> Result<Self, ConfigError> {
        if examples.is_empty() {
            return Err(ConfigError::EmptyExamples(name));
        }
        if patterns.is_empty() {
            return Err(ConfigError::EmptyPatterns(name));
        }

        let patterns = patterns
            .iter()
            .map(|pattern| {
                RegexBuilder::new(pattern)
                    .case_insensitive(true)
                    .build()
                    .map_err(|source| ConfigError::InvalidPattern {
                        group: name.clone(),
                        pattern: pattern.clone(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            name,
            examples,
            patterns,
        })
    }

    pub fn name(&self) -> &GroupName {
        &self.name
    }

    pub fn examples(&self) -> &[String] {
        &self.examples
    }

    pub fn patterns(&self) -> &[Regex] {
        &self.patterns
    }

    /// Source text of every pattern, in declaration order
    pub fn pattern_sources(&self) -> Vec<String> {
        self.patterns.iter().map(|p| p.as_str().to_string()).collect()
    }

    /// Index of the first pattern that matches anywhere in `path`
    pub fn find_match(&self, path: &str) -> Option<usize> {
        let path = normalize_path(path);
        self.patterns.iter().position(|p| p.is_match(&path))
    }

    /// Whether any pattern matches `path`
    pub fn accepts(&self, path: &str) -> bool {
        self.find_match(path).is_some()
    }
}

/// Lexically normalize `path` to a forward-slash relative form
///
/// Backslashes become slashes, `.` segments and repeated separators are
/// dropped, so `./src//main.rs` and `src\\main.rs` both read `src/main.rs`.
/// `..` is kept as-is. A path with no segments left becomes `.`.
pub fn normalize_path(path: &str) -> Cow<'_, str> {
    let is_clean = !path.is_empty()
        && !path.contains('\\')
        && !path.ends_with('/')
        && path
            .split('/')
            .enumerate()
            .all(|(i, segment)| segment != "." && (i == 0 || !segment.is_empty()));
    if is_clean {
        return Cow::Borrowed(path);
    }

    let unified = path.replace('\\', "/");
    let segments: Vec<&str> = unified
        .split('/')
        .filter(|segment| !segment.is_empty() && *segment != ".")
        .collect();

    let normalized = match (unified.starts_with('/'), segments.is_empty()) {
        (true, _) => format!("/{}", segments.join("/")),
        (false, true) => ".".to_string(),
        (false, false) => segments.join("/"),
    };
    Cow::Owned(normalized)
}
