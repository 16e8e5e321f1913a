//! `rubric update` command - regenerate and store an assignment's rubric

use std::path::Path;

use rubric_core::bail_usage;
use rubric_core::config::RubricConfig;
use rubric_core::error::Result;
use rubric_core::records::escape_quotes;
use rubric_core::rubric::format_score;
use rubric_core::source::DirectorySource;
use rubric_core::store::JsonFileStore;
use rubric_core::update::{update_rubric, UpdateOutcome};

use crate::cli::{Cli, OutputFormat};
use crate::commands::render;

/// Execute the update command
pub fn execute(
    cli: &Cli,
    root: &Path,
    config: &RubricConfig,
    assignment_id: &str,
    repo_override: Option<&Path>,
) -> Result<()> {
    let assignment = config.assignment(assignment_id)?;

    let repo = repo_override
        .map(|repo| root.join(repo))
        .or_else(|| config.repo_for(assignment, root));
    let repo = match repo {
        Some(repo) => repo,
        None if assignment.main_file_path().is_some() => {
            bail_usage!("no repository for assignment; pass --repo or set `repo` in rubric.toml")
        }
        None => root.to_path_buf(),
    };

    let source = DirectorySource::new(repo);
    let store = JsonFileStore::new(config.store_dir(root));
    let outcome = update_rubric(assignment, &source, &store)?;

    match (&outcome, cli.format) {
        (UpdateOutcome::Skipped { assignment_id }, OutputFormat::Json) => {
            let output = serde_json::json!({
                "assignmentId": assignment_id,
                "status": "skipped",
                "reason": "no main file configured",
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        (UpdateOutcome::Skipped { assignment_id }, OutputFormat::Human) => {
            if !cli.quiet {
                println!("Skipped {}: no main file configured", assignment_id);
            }
        }
        (UpdateOutcome::Skipped { assignment_id }, OutputFormat::Records) => {
            println!(
                "H rubric=1 records=1 mode=update assignment=\"{}\" status=skipped",
                escape_quotes(assignment_id)
            );
        }
        (
            UpdateOutcome::Updated {
                record,
                diagnostics,
            },
            OutputFormat::Json,
        ) => {
            let output = serde_json::json!({
                "assignmentId": record.assignment_id,
                "status": "updated",
                "record": record,
                "totals": record.rubric.totals(),
                "diagnostics": diagnostics,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        (
            UpdateOutcome::Updated {
                record,
                diagnostics,
            },
            OutputFormat::Human,
        ) => {
            render::print_diagnostics(cli, diagnostics);
            if !cli.quiet {
                println!(
                    "Updated {}: {} questions, {} criteria (max {}, bonus {})",
                    record.assignment_id,
                    record.rubric.questions.len(),
                    record.rubric.criteria_count(),
                    format_score(record.rubric.max_score()),
                    format_score(record.rubric.bonus_score())
                );
            }
        }
        (
            UpdateOutcome::Updated {
                record,
                diagnostics,
            },
            OutputFormat::Records,
        ) => {
            println!(
                "H rubric=1 records=1 mode=update assignment=\"{}\" status=updated main_file=\"{}\" sha256={}",
                escape_quotes(&record.assignment_id),
                escape_quotes(&record.main_file),
                record.source_sha256
            );
            for line in render::rubric_records(&record.rubric, diagnostics) {
                println!("{}", line);
            }
        }
    }

    Ok(())
}
