//! Rubric extraction engine
//!
//! A single forward pass over a document: scan lines, detect annotations,
//! resolve each annotation's header, parse and coerce its criteria, classify
//! modifiers and assemble the rubric. Extraction is pure and deterministic;
//! the only side effect is emitting diagnostics through `tracing`.

pub mod assemble;
pub mod criteria;
pub mod detect;
pub mod diagnostic;
pub mod dialect;
pub mod modifiers;
pub mod repair;
pub mod scan;

use std::time::Instant;

use tracing::{debug, info, warn};

use crate::rubric::AssignmentRubric;
use crate::trace_time;

pub use assemble::{assemble, ResolvedCriterion, ResolvedQuestion};
pub use criteria::{coerce_out_of, parse_criteria, ValueError};
pub use detect::is_annotation;
pub use diagnostic::{Diagnostic, DiagnosticKind};
pub use dialect::{find_header, resolve_header, FileDialect};
pub use modifiers::classify;
pub use repair::RepairError;
pub use scan::scan_lines;

/// A detected rubric marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnnotationSite<'a> {
    pub line_index: usize,
    pub raw_line: &'a str,
}

/// The rubric plus every recoverable problem met on the way
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    pub rubric: AssignmentRubric,
    pub diagnostics: Vec<Diagnostic>,
}

/// All annotation lines in document order
pub fn find_annotations<'a>(lines: &[&'a str]) -> Vec<AnnotationSite<'a>> {
    lines
        .iter()
        .enumerate()
        .filter(|(_, line)| is_annotation(line))
        .map(|(line_index, &raw_line)| AnnotationSite {
            line_index,
            raw_line,
        })
        .collect()
}

/// Extract a rubric from raw file bytes
pub fn extract_bytes(content: &[u8], dialect: FileDialect) -> Extraction {
    extract(&scan::decode(content), dialect)
}

/// Extract a rubric from document text
pub fn extract(content: &str, dialect: FileDialect) -> Extraction {
    let start = Instant::now();
    let lines = scan_lines(content);
    let mut diagnostics = Vec::new();

    let questions: Vec<ResolvedQuestion> = find_annotations(&lines)
        .into_iter()
        .filter_map(|site| resolve_question(&lines, site, dialect, &mut diagnostics))
        .collect();

    let rubric = assemble(questions);
    trace_time!(
        start,
        "extract",
        lines = lines.len(),
        questions = rubric.questions.len(),
        diagnostics = diagnostics.len()
    );

    Extraction {
        rubric,
        diagnostics,
    }
}

fn record(diagnostics: &mut Vec<Diagnostic>, diagnostic: Diagnostic) {
    warn!(
        kind = %diagnostic.kind,
        line_index = diagnostic.line_index,
        line = %diagnostic.line,
        key = ?diagnostic.key,
        detail = %diagnostic.detail,
        "rubric annotation problem"
    );
    diagnostics.push(diagnostic);
}

fn resolve_question(
    lines: &[&str],
    site: AnnotationSite<'_>,
    dialect: FileDialect,
    diagnostics: &mut Vec<Diagnostic>,
) -> Option<ResolvedQuestion> {
    info!(line_index = site.line_index, line = site.raw_line, "rubric found");

    let header = match find_header(lines, site.line_index, dialect) {
        Some(header_index) => {
            let header = dialect.clean_header(lines[header_index]);
            info!(header_index, raw = lines[header_index], cleaned = %header, "header found");
            header
        }
        None => {
            record(
                diagnostics,
                Diagnostic::new(
                    DiagnosticKind::NoHeaderFound,
                    site.line_index,
                    site.raw_line,
                    format!("no {} header above annotation", dialect),
                ),
            );
            String::new()
        }
    };

    let pairs = match parse_criteria(site.raw_line) {
        Ok(pairs) => pairs,
        Err(e) => {
            record(
                diagnostics,
                Diagnostic::new(
                    DiagnosticKind::MalformedAnnotation,
                    site.line_index,
                    site.raw_line,
                    e.to_string(),
                ),
            );
            return None;
        }
    };

    let mut criteria = Vec::with_capacity(pairs.len());
    for (key, value) in pairs {
        match coerce_out_of(&value) {
            Ok(out_of) => {
                let modifiers = classify(&header, &key);
                debug!(key = %key, out_of, modifiers = ?modifiers, "criterion resolved");
                criteria.push(ResolvedCriterion {
                    key,
                    out_of,
                    modifiers,
                });
            }
            Err(e) => record(
                diagnostics,
                Diagnostic::new(
                    DiagnosticKind::UnresolvableCriterionValue,
                    site.line_index,
                    site.raw_line,
                    e.to_string(),
                )
                .with_key(key),
            ),
        }
    }

    Some(ResolvedQuestion { header, criteria })
}

#[cfg(test)]
mod tests;
