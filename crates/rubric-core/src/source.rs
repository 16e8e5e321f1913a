//! Document sources
//!
//! The engine only needs the final bytes of an assignment's main file. How a
//! repository is obtained (clone, checkout, cache) is the caller's concern;
//! [`DirectorySource`] reads from an existing local checkout.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use crate::error::{RubricError, Result};

/// Fetches an assignment's main file by repository-relative path
pub trait DocumentSource {
    /// Return the file's raw bytes, or `DocumentUnavailable`
    fn fetch_main_file(&self, relative_path: &str) -> Result<Vec<u8>>;
}

/// Reads main files from a local repository checkout
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Join a relative path onto the root, refusing to leave it
    fn resolve(&self, relative_path: &str) -> Result<PathBuf> {
        let relative = Path::new(relative_path);
        let escapes = relative.components().any(|c| {
            matches!(
                c,
                Component::ParentDir | Component::RootDir | Component::Prefix(_)
            )
        });
        if escapes {
            return Err(RubricError::document_unavailable(
                relative_path,
                "path leaves the repository root",
            ));
        }
        Ok(self.root.join(relative))
    }
}

impl DocumentSource for DirectorySource {
    fn fetch_main_file(&self, relative_path: &str) -> Result<Vec<u8>> {
        let path = self.resolve(relative_path)?;
        tracing::debug!(path = %path.display(), "reading main file");

        fs::read(&path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => {
                RubricError::document_unavailable(relative_path, "main file does not exist in repo")
            }
            _ => RubricError::document_unavailable(relative_path, e),
        })
    }
}

/// In-memory documents keyed by relative path
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    files: HashMap<String, Vec<u8>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, relative_path: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        self.files.insert(relative_path.into(), content.into());
        self
    }
}

impl DocumentSource for MemorySource {
    fn fetch_main_file(&self, relative_path: &str) -> Result<Vec<u8>> {
        self.files
            .get(relative_path)
            .cloned()
            .ok_or_else(|| RubricError::document_unavailable(relative_path, "not found"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_directory_source_reads_nested_file() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("hw")).unwrap();
        fs::write(dir.path().join("hw/main.md"), "# Q\n").unwrap();

        let source = DirectorySource::new(dir.path());
        assert_eq!(source.fetch_main_file("hw/main.md").unwrap(), b"# Q\n");
    }

    #[test]
    fn test_directory_source_missing_file() {
        let dir = tempdir().unwrap();
        let source = DirectorySource::new(dir.path());

        let err = source.fetch_main_file("nope.md").unwrap_err();
        assert!(matches!(err, RubricError::DocumentUnavailable { .. }));
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_directory_source_refuses_escape() {
        let dir = tempdir().unwrap();
        let source = DirectorySource::new(dir.path().join("repo"));

        assert!(matches!(
            source.fetch_main_file("../secret.md"),
            Err(RubricError::DocumentUnavailable { .. })
        ));
        assert!(matches!(
            source.fetch_main_file("/etc/passwd"),
            Err(RubricError::DocumentUnavailable { .. })
        ));
    }

    #[test]
    fn test_memory_source() {
        let source = MemorySource::new().with_file("a.md", "x");
        assert_eq!(source.fetch_main_file("a.md").unwrap(), b"x");
        assert!(source.fetch_main_file("b.md").is_err());
    }
}
