//! `coverage` command: audit every tracked file against the configuration

use crate::app::AppConfig;
use crate::config::{load_from_path, Configuration};
use crate::coverage::{self, CoverageReport};
use crate::error::CheckerError;
use crate::git::GitReader;
use crate::output::{green, red, Color, Console};
use crate::subprocess::SubprocessManager;
use anyhow::Result;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Execute the coverage command and return the combined coverage exit code
pub async fn run_coverage_command(
    path_to_repo: &Path,
    config_file: &Path,
    app_config: &AppConfig,
) -> Result<i32> {
    let config = load_from_path(config_file).map_err(CheckerError::from)?;
    let repo = app_config.working_dir.join(path_to_repo);
    let git = SubprocessManager::production().git();
    let mut console = Console::stdout(app_config.ci.is_github());

    check_coverage(&git, &repo, &config, &mut console).await
}

/// List the files tracked in `repo`, audit them and print the report
pub async fn check_coverage<W: Write>(
    git: &dyn GitReader,
    repo: &Path,
    config: &Configuration,
    console: &mut Console<W>,
) -> Result<i32> {
    let files = git.list_files(repo).await.map_err(CheckerError::from)?;
    info!("Checking coverage of {} files in {}", files.len(), repo.display());

    let report = coverage::audit(config, &files);
    print_report(console, &report)?;
    Ok(report.exit_code())
}

fn print_report<W: Write>(console: &mut Console<W>, report: &CoverageReport) -> Result<()> {
    console.group("Covered files", |c| {
        c.line(format!("{:<60}  {:<20} {}", "path", "group", "workflows"))?;
        for file in &report.covered {
            let workflows = file
                .workflows
                .iter()
                .map(|w| w.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            c.line(green(&format!(
                "{:<60}  {:<20} {}",
                file.path, file.group, workflows
            )))?;
        }
        Ok(())
    })?;

    if report.is_fully_covered() {
        console.line(green("All files are covered!"))?;
    } else {
        console.line(red(&format!(
            "Missed files: {} from {}",
            report.missed.len(),
            report.total_files()
        )))?;
        console.list(report.sorted_missed(), Color::Red)?;
    }

    if report.all_patterns_used() {
        console.line(green("All patterns are in use!"))?;
    } else {
        console.line(red(&format!(
            "Found {} unused patterns:",
            report.unused_patterns.len()
        )))?;
        for unused in &report.unused_patterns {
            console.line(red(&format!(" - {:<20} '{}'", unused.group, unused.pattern)))?;
        }
    }

    Ok(())
}
