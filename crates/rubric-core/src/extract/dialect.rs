//! File dialects and section header resolution
//!
//! A [`FileDialect`] is selected once per document from the main file's
//! extension and decides both how headers are recognized and how a header
//! line is cleaned into a question name.

use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::RubricError;

/// Section header convention for a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileDialect {
    /// Markdown-style `#` headings (also used for code and notebook sources)
    #[default]
    HashHeader,
    /// LaTeX `\section`, `\subsection`, ... commands
    LatexSection,
}

static HASH_HEADER_RE: OnceLock<Regex> = OnceLock::new();
static LATEX_HEADER_RE: OnceLock<Regex> = OnceLock::new();
static HASH_MARKER_RE: OnceLock<Regex> = OnceLock::new();
static BRACE_NEWLINE_RE: OnceLock<Regex> = OnceLock::new();
static TRAILING_COMMA_RE: OnceLock<Regex> = OnceLock::new();
static LEADING_QUOTE_RE: OnceLock<Regex> = OnceLock::new();

fn hash_header_re() -> &'static Regex {
    // An optional leading quote admits headings copied out of JSON string literals
    HASH_HEADER_RE.get_or_init(|| {
        Regex::new(r#"^\s*["']?#+\s+\S"#).expect("Invalid hash header regex pattern")
    })
}

fn latex_header_re() -> &'static Regex {
    LATEX_HEADER_RE.get_or_init(|| {
        Regex::new(r"\\(?:sub)*section\*?").expect("Invalid latex header regex pattern")
    })
}

fn hash_marker_re() -> &'static Regex {
    HASH_MARKER_RE
        .get_or_init(|| Regex::new(r"#+\s+").expect("Invalid hash marker regex pattern"))
}

fn brace_newline_re() -> &'static Regex {
    // `\n\b` leaves commands such as `\noindent` and `\newline` alone
    BRACE_NEWLINE_RE
        .get_or_init(|| Regex::new(r"[{}]|\\n\b").expect("Invalid brace regex pattern"))
}

fn trailing_comma_re() -> &'static Regex {
    TRAILING_COMMA_RE
        .get_or_init(|| Regex::new(r#"["']?,\s*$"#).expect("Invalid trailing comma regex pattern"))
}

fn leading_quote_re() -> &'static Regex {
    LEADING_QUOTE_RE
        .get_or_init(|| Regex::new(r#"^\s*["']"#).expect("Invalid leading quote regex pattern"))
}

impl FileDialect {
    /// Select the dialect for a main file path: `.tex` is LaTeX, anything else hash headers
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let is_tex = path
            .as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("tex"));

        if is_tex {
            FileDialect::LatexSection
        } else {
            FileDialect::HashHeader
        }
    }

    /// Whether a line is a section header in this dialect
    pub fn is_header(&self, line: &str) -> bool {
        match self {
            FileDialect::HashHeader => hash_header_re().is_match(line),
            FileDialect::LatexSection => latex_header_re().is_match(line),
        }
    }

    fn marker_re(&self) -> &'static Regex {
        match self {
            FileDialect::HashHeader => hash_marker_re(),
            FileDialect::LatexSection => latex_header_re(),
        }
    }

    /// Clean a raw header line into a display name.
    ///
    /// Marker and brace stripping must run before the quote trimming, which
    /// only looks at the ends of what is left.
    pub fn clean_header(&self, raw: &str) -> String {
        let cleaned = self.marker_re().replace_all(raw, "");
        let cleaned = brace_newline_re().replace_all(&cleaned, "");
        let cleaned = trailing_comma_re().replace(&cleaned, "");
        let cleaned = leading_quote_re().replace(&cleaned, "");
        cleaned.trim().to_string()
    }
}

impl FromStr for FileDialect {
    type Err = RubricError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hash" | "markdown" | "md" => Ok(FileDialect::HashHeader),
            "latex" | "tex" => Ok(FileDialect::LatexSection),
            other => Err(RubricError::UnknownDialect(other.to_string())),
        }
    }
}

impl fmt::Display for FileDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileDialect::HashHeader => write!(f, "hash"),
            FileDialect::LatexSection => write!(f, "latex"),
        }
    }
}

/// Index of the nearest header at or above `index`, scanning backward to line 0
pub fn find_header(lines: &[&str], index: usize, dialect: FileDialect) -> Option<usize> {
    if lines.is_empty() {
        return None;
    }
    let start = index.min(lines.len() - 1);
    (0..=start).rev().find(|&i| dialect.is_header(lines[i]))
}

/// Cleaned name of the nearest header, or an empty string when none exists
pub fn resolve_header(lines: &[&str], index: usize, dialect: FileDialect) -> String {
    find_header(lines, index, dialect)
        .map(|i| dialect.clean_header(lines[i]))
        .unwrap_or_default()
}
