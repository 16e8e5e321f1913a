//! `rubric show` command - display a stored rubric

use std::path::Path;

use rubric_core::config::RubricConfig;
use rubric_core::error::{RubricError, Result};
use rubric_core::records::escape_quotes;
use rubric_core::store::{JsonFileStore, RubricStore};

use crate::cli::{Cli, OutputFormat};
use crate::commands::render;

/// Execute the show command
pub fn execute(cli: &Cli, root: &Path, config: &RubricConfig, assignment_id: &str) -> Result<()> {
    let store = JsonFileStore::new(config.store_dir(root));
    let record = store
        .load_rubric(assignment_id)?
        .ok_or_else(|| RubricError::RubricNotFound {
            id: assignment_id.to_string(),
        })?;

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
        OutputFormat::Human => {
            println!("Assignment: {}", record.assignment_id);
            println!("Source: {} ({})", record.main_file, record.dialect);
            println!("Extracted: {}", record.extracted_at.to_rfc3339());
            println!();
            render::print_rubric_human(&record.rubric);
        }
        OutputFormat::Records => {
            println!(
                "H rubric=1 records=1 mode=show assignment=\"{}\" main_file=\"{}\" sha256={}",
                escape_quotes(&record.assignment_id),
                escape_quotes(&record.main_file),
                record.source_sha256
            );
            for line in render::rubric_records(&record.rubric, &[]) {
                println!("{}", line);
            }
        }
    }

    Ok(())
}
