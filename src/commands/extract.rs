//! `rubric extract` command - run the engine on a local file

use std::fs;
use std::path::Path;

use rubric_core::error::{RubricError, Result};
use rubric_core::extract::extract_bytes;
use rubric_core::records::escape_quotes;

use crate::cli::{Cli, DialectArg, OutputFormat};
use crate::commands::render;

/// Execute the extract command
pub fn execute(cli: &Cli, file: &Path, dialect: DialectArg) -> Result<()> {
    let content =
        fs::read(file).map_err(|e| RubricError::document_unavailable(file.display(), e))?;
    let dialect = dialect.resolve(file);
    let extraction = extract_bytes(&content, dialect);

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "file": file.display().to_string(),
                "dialect": dialect,
                "rubric": extraction.rubric,
                "totals": extraction.rubric.totals(),
                "diagnostics": extraction.diagnostics,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            render::print_diagnostics(cli, &extraction.diagnostics);
            render::print_rubric_human(&extraction.rubric);
        }
        OutputFormat::Records => {
            println!(
                "H rubric=1 records=1 mode=extract file=\"{}\" dialect={}",
                escape_quotes(&file.display().to_string()),
                dialect
            );
            for line in render::rubric_records(&extraction.rubric, &extraction.diagnostics) {
                println!("{}", line);
            }
        }
    }

    Ok(())
}
