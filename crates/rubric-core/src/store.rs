//! Rubric persistence
//!
//! A stored record always replaces the previous one for the same assignment;
//! extraction results are never merged. Persistence failures are reported to
//! the caller and never retried here.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::{RubricError, Result};
use crate::extract::FileDialect;
use crate::rubric::AssignmentRubric;

/// Extension for stored rubric records
const RECORD_EXTENSION: &str = "json";

/// A persisted rubric with the provenance of its source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredRubric {
    pub assignment_id: String,
    pub main_file: String,
    pub dialect: FileDialect,
    /// Hex SHA-256 of the main file bytes the rubric was extracted from
    pub source_sha256: String,
    pub extracted_at: DateTime<Utc>,
    pub rubric: AssignmentRubric,
}

impl StoredRubric {
    pub fn new(
        assignment_id: impl Into<String>,
        main_file: impl Into<String>,
        dialect: FileDialect,
        source: &[u8],
        rubric: AssignmentRubric,
    ) -> Self {
        StoredRubric {
            assignment_id: assignment_id.into(),
            main_file: main_file.into(),
            dialect,
            source_sha256: source_digest(source),
            extracted_at: Utc::now(),
            rubric,
        }
    }
}

/// Hex SHA-256 digest of source bytes
pub fn source_digest(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    hex::encode(hasher.finalize())
}

/// Persistence seam for extracted rubrics
pub trait RubricStore {
    /// Replace the stored rubric for an assignment
    fn store_rubric(&self, assignment_id: &str, record: &StoredRubric) -> Result<()>;

    /// Load the stored rubric for an assignment, if any
    fn load_rubric(&self, assignment_id: &str) -> Result<Option<StoredRubric>>;
}

/// One pretty-printed JSON file per assignment
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Record path for an assignment id; ids must be plain file-name safe
    pub fn record_path(&self, assignment_id: &str) -> Result<PathBuf> {
        let safe = !assignment_id.is_empty()
            && assignment_id
                .chars()
                .all(|c| c.is_alphanumeric() || matches!(c, '-' | '_' | '.'))
            && !assignment_id.starts_with('.');
        if !safe {
            return Err(RubricError::invalid_value("assignment id", assignment_id));
        }
        Ok(self
            .dir
            .join(format!("{}.{}", assignment_id, RECORD_EXTENSION)))
    }
}

impl RubricStore for JsonFileStore {
    fn store_rubric(&self, assignment_id: &str, record: &StoredRubric) -> Result<()> {
        let path = self.record_path(assignment_id)?;
        let content = serde_json::to_string_pretty(record)?;

        fs::create_dir_all(&self.dir).map_err(|e| RubricError::store_failed(assignment_id, e))?;

        // Write then rename so a reader never sees a partial record
        let tmp_path = path.with_extension(format!("{}.tmp", RECORD_EXTENSION));
        fs::write(&tmp_path, content).map_err(|e| RubricError::store_failed(assignment_id, e))?;
        fs::rename(&tmp_path, &path).map_err(|e| RubricError::store_failed(assignment_id, e))?;

        tracing::info!(assignment_id, path = %path.display(), "rubric stored");
        Ok(())
    }

    fn load_rubric(&self, assignment_id: &str) -> Result<Option<StoredRubric>> {
        let path = self.record_path(assignment_id)?;
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path)
            .map_err(|e| RubricError::io_operation("read rubric", path.display(), e))?;
        Ok(Some(serde_json::from_str(&content)?))
    }
}

/// Mutex-guarded map store, for embedding and tests
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<BTreeMap<String, StoredRubric>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, BTreeMap<String, StoredRubric>>> {
        self.records
            .lock()
            .map_err(|_| RubricError::Other("rubric store lock poisoned".to_string()))
    }

    pub fn len(&self) -> usize {
        self.lock().map(|records| records.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl RubricStore for MemoryStore {
    fn store_rubric(&self, assignment_id: &str, record: &StoredRubric) -> Result<()> {
        self.lock()?
            .insert(assignment_id.to_string(), record.clone());
        Ok(())
    }

    fn load_rubric(&self, assignment_id: &str) -> Result<Option<StoredRubric>> {
        Ok(self.lock()?.get(assignment_id).cloned())
    }
}
