//! Rubric update workflow
//!
//! Fetch an assignment's main file, extract its rubric and replace the stored
//! record. An assignment without a main file is a deliberate no-op.

use std::time::Instant;

use tracing::info;

use crate::config::AssignmentConfig;
use crate::error::Result;
use crate::extract::{extract_bytes, Diagnostic, FileDialect};
use crate::source::DocumentSource;
use crate::store::{RubricStore, StoredRubric};
use crate::trace_time;

/// Result of one update run
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateOutcome {
    /// No main file configured; nothing fetched or stored
    Skipped { assignment_id: String },
    /// A fresh rubric replaced any previous record
    Updated {
        record: StoredRubric,
        diagnostics: Vec<Diagnostic>,
    },
}

/// Regenerate and store the rubric for one assignment.
///
/// Fetch failures are fatal and leave the stored record untouched.
/// Recoverable annotation problems come back as diagnostics.
pub fn update_rubric(
    assignment: &AssignmentConfig,
    source: &dyn DocumentSource,
    store: &dyn RubricStore,
) -> Result<UpdateOutcome> {
    let start = Instant::now();
    info!(assignment_id = %assignment.id, "update rubric");

    let Some(main_file) = assignment.main_file_path() else {
        info!(assignment_id = %assignment.id, "no main file configured; skipping rubric generation");
        return Ok(UpdateOutcome::Skipped {
            assignment_id: assignment.id.clone(),
        });
    };

    let dialect = FileDialect::from_path(main_file);
    let content = source.fetch_main_file(main_file)?;
    let extraction = extract_bytes(&content, dialect);

    let record = StoredRubric::new(
        &assignment.id,
        main_file,
        dialect,
        &content,
        extraction.rubric,
    );
    store.store_rubric(&assignment.id, &record)?;

    trace_time!(
        start,
        "update_rubric",
        questions = record.rubric.questions.len(),
        criteria = record.rubric.criteria_count()
    );

    Ok(UpdateOutcome::Updated {
        record,
        diagnostics: extraction.diagnostics,
    })
}
