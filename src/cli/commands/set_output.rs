//! `set-output` command: detect changed files and publish per-workflow flags

use crate::app::AppConfig;
use crate::changes::{self, render_workflow_template, ChangeReport};
use crate::config::{load_from_path, Configuration};
use crate::error::CheckerError;
use crate::git::GitReader;
use crate::output::{green, Color, Console};
use crate::subprocess::SubprocessManager;
use anyhow::Result;
use std::io::Write;
use std::path::Path;
use tracing::info;

const RULE_WIDTH: usize = 50;

/// The pair of git references to compare
#[derive(Debug, Clone, Copy)]
pub struct RefRange<'a> {
    pub change: &'a str,
    pub base: &'a str,
}

/// Execute the set-output command
pub async fn run_set_output_command(
    config_file: &Path,
    change_ref: &str,
    base_ref: &str,
    app_config: &AppConfig,
) -> Result<()> {
    let config = load_from_path(config_file).map_err(CheckerError::from)?;
    let config_file_name = config_file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let git = SubprocessManager::production().git();
    let mut console = Console::stdout(app_config.ci.is_github());

    let range = RefRange {
        change: change_ref,
        base: base_ref,
    };
    let report = detect_changes(
        &git,
        &app_config.working_dir,
        &config,
        &config_file_name,
        range,
        &mut console,
    )
    .await?;

    if app_config.ci.write_outputs(&report.render_output())? {
        info!("Published {} workflow flags", report.flags.len());
    }
    console.line(green("Done"))?;
    Ok(())
}

/// Print the job template, diff `range` in `repo` and report the affected workflows
pub async fn detect_changes<W: Write>(
    git: &dyn GitReader,
    repo: &Path,
    config: &Configuration,
    config_file_name: &str,
    range: RefRange<'_>,
    console: &mut Console<W>,
) -> Result<ChangeReport> {
    console.group("Template for workflow:", |c| {
        c.line("=".repeat(RULE_WIDTH))?;
        c.line(render_workflow_template(config, config_file_name))?;
        c.line("=".repeat(RULE_WIDTH))
    })?;

    let changed_files = git
        .changed_files(repo, range.change, range.base)
        .await
        .map_err(CheckerError::from)?;
    console.group("Getting changed files", |c| c.line(changed_files.join("\n")))?;

    let report = changes::report(config, &changed_files);
    console.group("Detected file Groups", |c| {
        c.list(&report.matched_groups, Color::Green)
    })?;

    console.line("Affected workflows:")?;
    console.list(&report.affected_workflows, Color::Green)?;
    console.blank()?;

    console.group("Generated output", |c| c.line(report.render_output()))?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::load_from_str;

    const CONFIG: &str = r#"
[workflow]
wa = ["a"]
wb = ["b"]
wab = ["a", "b"]

[group.a]
examples = ["file_a"]
patterns = ["file_a"]

[group.b]
examples = ["file_b"]
patterns = ["file_b"]
"#;

    const RANGE: RefRange<'static> = RefRange {
        change: "HEAD",
        base: "HEAD^1",
    };

    #[tokio::test]
    async fn test_detect_changes_prints_every_section() {
        let config = load_from_str(CONFIG).unwrap();
        let (manager, mut mock) = SubprocessManager::mock();
        mock.expect_command("git")
            .with_args(|args| args == ["diff-tree", "--name-only", "-r", "HEAD", "HEAD^1"])
            .returns_stdout("file_a\nunrelated\n")
            .finish();

        let mut console = Console::new(Vec::new(), false);
        let report = detect_changes(
            &manager.git(),
            Path::new("."),
            &config,
            "config.toml",
            RANGE,
            &mut console,
        )
        .await
        .unwrap();
        let out = String::from_utf8(console.into_inner()).unwrap();

        assert_eq!(
            report.render_output(),
            "output-01=true\noutput-02=false\noutput-03=true"
        );
        assert!(out.starts_with("Template for workflow::\n"));
        assert!(out.contains("config-file: \".github/workflows/config.toml\""));
        assert!(out.contains("Getting changed files:\nfile_a\nunrelated\n\n"));
        assert!(out.contains(&format!("Detected file Groups:\n - {}\n", green("a"))));
        assert!(out.contains(&format!(
            "Affected workflows:\n - {}\n - {}\n\n",
            green("wa"),
            green("wab")
        )));
        assert!(out.ends_with("Generated output:\noutput-01=true\noutput-02=false\noutput-03=true\n\n"));
    }

    #[tokio::test]
    async fn test_github_groups() {
        let config = load_from_str(CONFIG).unwrap();
        let (manager, mut mock) = SubprocessManager::mock();
        mock.expect_command("git").returns_stdout("\n").finish();

        let mut console = Console::new(Vec::new(), true);
        let report = detect_changes(
            &manager.git(),
            Path::new("."),
            &config,
            "config.toml",
            RANGE,
            &mut console,
        )
        .await
        .unwrap();
        let out = String::from_utf8(console.into_inner()).unwrap();

        assert!(report.affected_workflows.is_empty());
        assert!(out.contains("::group::Generated output\n"));
        assert_eq!(out.matches("::endgroup::").count(), 4);
    }

    #[tokio::test]
    async fn test_bad_reference_is_an_error() {
        let config = load_from_str(CONFIG).unwrap();
        let (manager, mut mock) = SubprocessManager::mock();
        mock.expect_command("git")
            .returns_exit_code(128)
            .returns_stderr("fatal: ambiguous argument 'nope': unknown revision")
            .finish();

        let mut console = Console::new(Vec::new(), false);
        let result = detect_changes(
            &manager.git(),
            Path::new("."),
            &config,
            "config.toml",
            RefRange {
                change: "nope",
                base: "HEAD",
            },
            &mut console,
        )
        .await;
        assert!(result.is_err());
    }
}
