use regex::Regex;
use std::sync::OnceLock;

static ANNOTATION_RE: OnceLock<Regex> = OnceLock::new();

fn annotation_re() -> &'static Regex {
    ANNOTATION_RE.get_or_init(|| {
        Regex::new(r"rub(?:r(?:ic)?)?\s*[=:]?\s*\{.*\}").expect("Invalid annotation regex pattern")
    })
}

/// Whether a line carries a rubric marker (`rub`, `rubr` or `rubric`,
/// optionally followed by `=` or `:`, then a `{...}` region).
///
/// This is a marker test only; the brace contents are not inspected.
pub fn is_annotation(line: &str) -> bool {
    annotation_re().is_match(line)
}
