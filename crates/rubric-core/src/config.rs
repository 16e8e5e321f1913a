//! Configuration for rubric
//!
//! Configuration lives in `rubric.toml`. A missing file is equivalent to the
//! defaults: no assignments and a `.rubrics` store directory.

pub mod types;

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::bail_invalid;
use crate::error::{RubricError, Result};

pub use types::{AssignmentConfig, RubricConfig, DEFAULT_STORE_DIR};

/// Default configuration file name
pub const CONFIG_FILE: &str = "rubric.toml";

impl RubricConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| RubricError::io_operation("read config", path.display(), e))?;
        let config: RubricConfig =
            toml::from_str(&content).map_err(|e| RubricError::InvalidConfig {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        config.validate().map_err(|e| RubricError::InvalidConfig {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration, falling back to defaults when the file is absent
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| RubricError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)
            .map_err(|e| RubricError::io_operation("write config", path.display(), e))?;
        Ok(())
    }

    /// Reject blank or duplicate assignment ids
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for assignment in &self.assignments {
            if assignment.id.trim().is_empty() {
                bail_invalid!("assignment id", "(blank)");
            }
            if !seen.insert(assignment.id.as_str()) {
                bail_invalid!("assignment id (duplicate)", &assignment.id);
            }
        }
        Ok(())
    }

    /// Look up an assignment by id
    pub fn assignment(&self, id: &str) -> Result<&AssignmentConfig> {
        self.assignments
            .iter()
            .find(|a| a.id == id)
            .ok_or_else(|| RubricError::AssignmentNotFound { id: id.to_string() })
    }

    /// Store directory resolved against `base`
    pub fn store_dir(&self, base: &Path) -> PathBuf {
        base.join(&self.store_dir)
    }

    /// Repository checkout for an assignment: assignment override, then the default
    pub fn repo_for(&self, assignment: &AssignmentConfig, base: &Path) -> Option<PathBuf> {
        assignment
            .repo
            .as_ref()
            .or(self.repo.as_ref())
            .map(|repo| base.join(repo))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = RubricConfig::default();
        assert_eq!(config.store_dir, DEFAULT_STORE_DIR);
        assert!(config.repo.is_none());
        assert!(config.assignments.is_empty());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);

        let config = RubricConfig {
            repo: Some("checkout".to_string()),
            assignments: vec![
                AssignmentConfig::new("a1", Some("README.md")),
                AssignmentConfig::new("a2", None),
            ],
            ..Default::default()
        };
        config.save(&path).unwrap();

        let loaded = RubricConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempdir().unwrap();
        let config = RubricConfig::load_or_default(&dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config, RubricConfig::default());
    }

    #[test]
    fn test_load_from_toml_text() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(
            &path,
            r#"
store_dir = "out"

[[assignments]]
id = "hw1"
main_file = "hw1/main.tex"
repo = "../hw1-repo"
"#,
        )
        .unwrap();

        let config = RubricConfig::load(&path).unwrap();
        assert_eq!(config.store_dir, "out");
        let hw1 = config.assignment("hw1").unwrap();
        assert_eq!(hw1.main_file_path(), Some("hw1/main.tex"));
        assert_eq!(
            config.repo_for(hw1, Path::new("/base")),
            Some(PathBuf::from("/base/../hw1-repo"))
        );
    }

    #[test]
    fn test_load_rejects_duplicate_ids() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(
            &path,
            "[[assignments]]\nid = \"a\"\n\n[[assignments]]\nid = \"a\"\n",
        )
        .unwrap();

        assert!(matches!(
            RubricConfig::load(&path),
            Err(RubricError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_load_rejects_bad_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "assignments = 3").unwrap();

        assert!(matches!(
            RubricConfig::load(&path),
            Err(RubricError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_assignment_not_found() {
        let config = RubricConfig::default();
        assert!(matches!(
            config.assignment("missing"),
            Err(RubricError::AssignmentNotFound { .. })
        ));
    }

    #[test]
    fn test_blank_main_file_is_none() {
        let assignment = AssignmentConfig::new("a", Some("   "));
        assert_eq!(assignment.main_file_path(), None);
    }

    #[test]
    fn test_repo_for_falls_back_to_default() {
        let config = RubricConfig {
            repo: Some("repo".to_string()),
            ..Default::default()
        };
        let assignment = AssignmentConfig::new("a", Some("x.md"));
        assert_eq!(
            config.repo_for(&assignment, Path::new("/r")),
            Some(PathBuf::from("/r/repo"))
        );
    }
}
