//! `rubric list` command - list configured assignments

use std::path::Path;

use rubric_core::config::RubricConfig;
use rubric_core::error::Result;
use rubric_core::records::escape_quotes;
use rubric_core::store::{JsonFileStore, RubricStore};

use crate::cli::{Cli, OutputFormat};

/// Execute the list command
pub fn execute(cli: &Cli, root: &Path, config: &RubricConfig) -> Result<()> {
    let store = JsonFileStore::new(config.store_dir(root));

    let mut rows = Vec::with_capacity(config.assignments.len());
    for assignment in &config.assignments {
        let stored = store.load_rubric(&assignment.id)?.is_some();
        rows.push((assignment, stored));
    }

    match cli.format {
        OutputFormat::Json => {
            let output: Vec<_> = rows
                .iter()
                .map(|(assignment, stored)| {
                    serde_json::json!({
                        "id": assignment.id,
                        "mainFile": assignment.main_file_path(),
                        "stored": stored,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if rows.is_empty() {
                if !cli.quiet {
                    println!("No assignments configured");
                }
                return Ok(());
            }
            for (assignment, stored) in &rows {
                println!(
                    "{}  {}  {}",
                    assignment.id,
                    assignment.main_file_path().unwrap_or("-"),
                    if *stored { "stored" } else { "not stored" }
                );
            }
        }
        OutputFormat::Records => {
            println!("H rubric=1 records=1 mode=list assignments={}", rows.len());
            for (assignment, stored) in &rows {
                println!(
                    "A \"{}\" main_file=\"{}\" stored={}",
                    escape_quotes(&assignment.id),
                    escape_quotes(assignment.main_file_path().unwrap_or("-")),
                    stored
                );
            }
        }
    }

    Ok(())
}
