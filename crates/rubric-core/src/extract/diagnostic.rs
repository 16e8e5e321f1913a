use std::fmt;

use serde::Serialize;

/// Recoverable problems found while extracting; none abort the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// The annotation's brace region could not be parsed; the annotation is dropped
    MalformedAnnotation,
    /// One criterion's value is not a usable score; only that key is dropped
    UnresolvableCriterionValue,
    /// No header above the annotation; the question name is empty
    NoHeaderFound,
}

impl DiagnosticKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticKind::MalformedAnnotation => "malformed_annotation",
            DiagnosticKind::UnresolvableCriterionValue => "unresolvable_criterion_value",
            DiagnosticKind::NoHeaderFound => "no_header_found",
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A located, human-fixable extraction problem
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    /// Zero-based index of the annotation line
    pub line_index: usize,
    /// The annotation line as written
    pub line: String,
    /// Criterion key, for value problems
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    pub detail: String,
}

impl Diagnostic {
    pub fn new(
        kind: DiagnosticKind,
        line_index: usize,
        line: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Diagnostic {
            kind,
            line_index,
            line: line.into(),
            key: None,
            detail: detail.into(),
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// One-based line number for display
    pub fn line_number(&self) -> usize {
        self.line_index + 1
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line_number(), self.kind)?;
        if let Some(key) = &self.key {
            write!(f, " [{}]", key)?;
        }
        write!(f, ": {}", self.detail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_key() {
        let d = Diagnostic::new(
            DiagnosticKind::UnresolvableCriterionValue,
            4,
            r#"rub: {a: "x"}"#,
            "value \"x\" is not a number",
        )
        .with_key("a");
        assert_eq!(
            d.to_string(),
            "line 5: unresolvable_criterion_value [a]: value \"x\" is not a number"
        );
    }
}
