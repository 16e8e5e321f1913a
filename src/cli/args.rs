use std::path::Path;

use clap::ValueEnum;
use rubric_core::extract::FileDialect;

/// Dialect selection for `rubric extract`
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialectArg {
    /// Choose from the file extension (`.tex` is LaTeX)
    Auto,
    /// Markdown-style `#` headers
    Hash,
    /// LaTeX `\section` commands
    Latex,
}

impl DialectArg {
    pub fn resolve(self, path: &Path) -> FileDialect {
        match self {
            DialectArg::Auto => FileDialect::from_path(path),
            DialectArg::Hash => FileDialect::HashHeader,
            DialectArg::Latex => FileDialect::LatexSection,
        }
    }
}
