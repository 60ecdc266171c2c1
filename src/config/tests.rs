use super::*;
use std::fs;
use tempfile::TempDir;

fn load(conf: &str) -> Result<Configuration, ConfigError> {
    load_from_str(conf)
}

fn load_err(conf: &str) -> String {
    load(conf).unwrap_err().to_string()
}

#[test]
fn test_config_could_be_read() {
    let config = load(
        r#"
[workflow]
workflow_readme = ["readme"]
workflow_workflow_yml = ["workflow_yml"]
workflow_support = ["readme", "workflow_yml"]
workflow_all = ["all"]

[group.readme]
examples = ['README.md']
patterns = ['^README.md$']

[group.workflow_yml]
examples = [".github/workflows/check.yml", ".github/workflows/run_on_push.yml"]
patterns = ['^\.github/workflows/.*\.yml$']

[group.all]
examples = ["check_file_changed/config.toml"]
patterns = ['.*']
"#,
    )
    .unwrap();

    assert_eq!(
        config.workflows(),
        &[
            Workflow::new("workflow_readme", ["readme"]),
            Workflow::new("workflow_workflow_yml", ["workflow_yml"]),
            Workflow::new("workflow_support", ["readme", "workflow_yml"]),
            Workflow::new("workflow_all", ["all"]),
        ]
    );

    let names: Vec<&str> = config.groups().iter().map(|g| g.name().as_str()).collect();
    assert_eq!(names, ["readme", "workflow_yml", "all"]);

    let workflow_yml = config.group("workflow_yml").unwrap();
    assert_eq!(
        workflow_yml.examples(),
        [
            ".github/workflows/check.yml",
            ".github/workflows/run_on_push.yml"
        ]
    );
    assert_eq!(
        workflow_yml.pattern_sources(),
        vec![r"^\.github/workflows/.*\.yml$".to_string()]
    );
}

#[test]
fn test_declaration_order_is_preserved() {
    let config = load(
        r#"
[workflow]
zeta = ["z"]
alpha = ["a"]
mid = ["a", "z"]

[group.z]
examples = ["z"]
patterns = ["z"]

[group.a]
examples = ["a"]
patterns = ["a"]
"#,
    )
    .unwrap();

    let workflows: Vec<&str> = config.workflow_names().map(|w| w.as_str()).collect();
    assert_eq!(workflows, ["zeta", "alpha", "mid"]);
    let groups: Vec<&str> = config.groups().iter().map(|g| g.name().as_str()).collect();
    assert_eq!(groups, ["z", "a"]);
}

#[test]
fn test_validation_does_not_count_as_usage() {
    let config = load(
        r#"
[workflow]
w = ["a"]

[group.a]
examples = ["file_a"]
patterns = ["file_a"]
"#,
    )
    .unwrap();

    assert_eq!(config.usage().snapshot(), vec![vec![0]]);
    assert_eq!(
        config.unused_patterns(),
        vec![UnusedPattern {
            group: GroupName::new("a"),
            pattern: "file_a".to_string(),
        }]
    );
}

#[test]
fn test_toplevel_sections_must_be_exact() {
    let cases = [
        "[group.a]",
        "[workflow]",
        "[workflow]\n[group.a]\n[extra]\n",
        "workflow = {}\ngroup = {}\nextra = 1\n",
        "",
    ];
    for conf in cases {
        assert_eq!(
            load_err(conf),
            "Expect only 'workflow' and 'group' toplevel sections",
            "config: {conf:?}"
        );
    }
}

#[test]
fn test_group_keys_must_be_exact() {
    let cases = [
        (
            "[workflow]\n[group.a]\npatterns = ['file_a']\n",
            "Expect only 'examples' and 'patterns' got {'patterns'} for [group.a]",
        ),
        (
            "[workflow]\n[group.a]\nexamples = ['file_a']\n",
            "Expect only 'examples' and 'patterns' got {'examples'} for [group.a]",
        ),
        (
            "[workflow]\n[group.a]\nexamples = ['file_a']\npatterns = ['file_a']\nextra = ['hello']\n",
            "Expect only 'examples' and 'patterns' got {'examples', 'extra', 'patterns'} for [group.a]",
        ),
        (
            "[workflow]\n[group.a]\n",
            "Expect only 'examples' and 'patterns' got {} for [group.a]",
        ),
    ];
    for (conf, expected) in cases {
        assert_eq!(load_err(conf), expected, "config: {conf:?}");
    }
}

#[test]
fn test_empty_examples_and_patterns() {
    assert_eq!(
        load_err("[workflow]\n[group.a]\nexamples = []\npatterns = ['file_a']\n"),
        "Examples could not be empty for group: a"
    );
    assert_eq!(
        load_err("[workflow]\n[group.a]\nexamples = ['file_a']\npatterns = []\n"),
        "Patterns could not be empty for group: a"
    );
}

#[test]
fn test_example_must_match_own_patterns() {
    let err = load_err("[workflow]\n[group.a]\nexamples = ['file_a']\npatterns = ['file_b', 'other']\n");
    assert_eq!(
        err,
        "'a' example 'file_a' does not match any pattern: ['file_b', 'other']"
    );
}

#[test]
fn test_example_check_runs_before_reference_checks() {
    let err = load_err(
        r#"
[workflow]
wa = ["missing"]

[group.a]
examples = ["file_a"]
patterns = ["file_b"]
"#,
    );
    assert!(err.starts_with("'a' example 'file_a'"), "{err}");
}

#[test]
fn test_unknown_groups_are_sorted() {
    let err = load_err(
        r#"
[workflow]
wa = ["zz", "a", "b"]

[group.a]
examples = ["file_a"]
patterns = ["file_a"]
"#,
    );
    assert_eq!(err, "Workflow 'wa' has unknown groups: b, zz");
}

#[test]
fn test_unused_groups() {
    let err = load_err(
        r#"
[workflow]
wa = ["a"]

[group.a]
examples = ["file_a"]
patterns = ["file_a"]

[group.unused]
examples = ["unused"]
patterns = ["unused"]

[group.also_unused]
examples = ["x"]
patterns = ["x"]
"#,
    );
    assert_eq!(err, "Unused groups: also_unused, unused");
}

#[test]
fn test_wrong_value_types() {
    let err = load_err("workflow = 1\n[group.a]\nexamples = ['a']\npatterns = ['a']\n");
    assert_eq!(err, "Invalid value for [workflow]: expected a table");

    let err = load_err("[workflow]\nw = 'a'\n[group.a]\nexamples = ['a']\npatterns = ['a']\n");
    assert_eq!(
        err,
        "Invalid value for [workflow].w: expected a list of group names"
    );

    let err = load_err("[workflow]\nw = ['a']\n[group.a]\nexamples = 'a'\npatterns = ['a']\n");
    assert_eq!(
        err,
        "Invalid value for [group.a]: expected 'examples' and 'patterns' as lists of strings"
    );
}

#[test]
fn test_invalid_toml() {
    let err = load("[workflow").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_error_codes() {
    use crate::error::ErrorCode;

    assert_eq!(
        load("[group.a]").unwrap_err().code(),
        ErrorCode::CONFIG_INVALID_STRUCTURE
    );
    assert_eq!(
        load("[workflow]\nw = ['b']\n[group.a]\nexamples = ['a']\npatterns = ['a']\n")
            .unwrap_err()
            .code(),
        ErrorCode::CONFIG_UNKNOWN_GROUP
    );
}

#[test]
fn test_load_from_path() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(
        &path,
        "[workflow]\nw = ['a']\n[group.a]\nexamples = ['a.txt']\npatterns = ['\\.txt$']\n",
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.workflows().len(), 1);
    assert_eq!(config.classify("notes/b.TXT"), Some(&GroupName::new("a")));
}

#[test]
fn test_load_from_missing_path() {
    let temp_dir = TempDir::new().unwrap();
    let err = load_from_path(&temp_dir.path().join("missing.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
    assert_eq!(err.code(), crate::error::ErrorCode::CONFIG_NOT_FOUND);
}

#[test]
fn test_config_error_converts_to_checker_error() {
    let err: crate::error::CheckerError = load("[workflow]").unwrap_err().into();
    assert_eq!(err.exit_code(), 4);
    assert_eq!(
        err.user_message(),
        "Configuration problem: Expect only 'workflow' and 'group' toplevel sections"
    );
}
