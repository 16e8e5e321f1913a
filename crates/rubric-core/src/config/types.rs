//! Configuration type definitions

use serde::{Deserialize, Serialize};

/// Default directory for stored rubric records, relative to the config root
pub const DEFAULT_STORE_DIR: &str = ".rubrics";

/// Top-level configuration (`rubric.toml`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RubricConfig {
    /// Directory holding one JSON record per assignment
    #[serde(default = "default_store_dir")]
    pub store_dir: String,

    /// Default repository checkout used as the document source (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,

    /// Known assignments
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub assignments: Vec<AssignmentConfig>,
}

/// One assignment (deliverable) record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentConfig {
    pub id: String,

    /// Main source file, relative to the repository root (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_file: Option<String>,

    /// Repository checkout override for this assignment (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,
}

impl AssignmentConfig {
    pub fn new(id: impl Into<String>, main_file: Option<&str>) -> Self {
        AssignmentConfig {
            id: id.into(),
            main_file: main_file.map(str::to_string),
            repo: None,
        }
    }

    /// The configured main file, if any non-blank path is set
    pub fn main_file_path(&self) -> Option<&str> {
        self.main_file
            .as_deref()
            .map(str::trim)
            .filter(|path| !path.is_empty())
    }
}

impl Default for RubricConfig {
    fn default() -> Self {
        Self {
            store_dir: default_store_dir(),
            repo: None,
            assignments: Vec::new(),
        }
    }
}

fn default_store_dir() -> String {
    DEFAULT_STORE_DIR.to_string()
}
