use super::*;
use crate::rubric::Modifier;

fn names(extraction: &Extraction) -> Vec<&str> {
    extraction
        .rubric
        .questions
        .iter()
        .map(|q| q.name.as_str())
        .collect()
}

#[test]
fn test_no_annotations_yields_empty_rubric() {
    let extraction = extract("# Title\n\nSome prose.\n", FileDialect::HashHeader);
    assert!(extraction.rubric.is_empty());
    assert!(extraction.diagnostics.is_empty());
}

#[test]
fn test_empty_document() {
    let extraction = extract("", FileDialect::LatexSection);
    assert!(extraction.rubric.is_empty());
}

#[test]
fn test_basic_hash_document() {
    let content = "# Question 1\nrub: {\"correctness\": 10, \"style\": 5}";
    let extraction = extract(content, FileDialect::HashHeader);

    assert_eq!(names(&extraction), vec!["Question 1"]);
    let subs = &extraction.rubric.questions[0].sub_questions;
    assert_eq!(subs.len(), 2);
    assert_eq!(subs[0].name, "correctness");
    assert_eq!(subs[0].out_of, 10.0);
    assert!(subs[0].modifiers.is_empty());
    assert_eq!(subs[1].name, "style");
    assert_eq!(subs[1].out_of, 5.0);
    assert!(extraction.diagnostics.is_empty());
}

#[test]
fn test_string_values_are_coerced() {
    let content = "# Header\n\nSome text\nrubric: {\"a\": 5, \"b\": \"3\"}\n";
    let extraction = extract(content, FileDialect::HashHeader);

    let subs = &extraction.rubric.questions[0].sub_questions;
    assert_eq!(extraction.rubric.questions[0].name, "Header");
    assert_eq!(
        subs.iter().map(|s| s.out_of).collect::<Vec<_>>(),
        vec![5.0, 3.0]
    );
}

#[test]
fn test_bonus_header_applies_to_every_criterion() {
    let content = "## BONUS round\n<!-- rubric: {speed: 2, raw_points: 4} -->";
    let extraction = extract(content, FileDialect::HashHeader);

    let subs = &extraction.rubric.questions[0].sub_questions;
    assert!(subs.iter().all(|s| s.is_bonus()));
    assert!(!subs[0].is_numerical());
    assert!(subs[1].is_numerical());
}

#[test]
fn test_raw_key_is_numerical_without_bonus() {
    let content = "# Question 2\nrub: {raw_style: 3}";
    let extraction = extract(content, FileDialect::HashHeader);

    let sq = &extraction.rubric.questions[0].sub_questions[0];
    assert_eq!(
        sq.modifiers.iter().copied().collect::<Vec<_>>(),
        vec![Modifier::Numerical]
    );
}

#[test]
fn test_non_numeric_value_dropped_siblings_kept() {
    let content = "# Q\nrub: {a: 1, b: \"abc\", c: 2}";
    let extraction = extract(content, FileDialect::HashHeader);

    let keys: Vec<&str> = extraction.rubric.questions[0]
        .sub_questions
        .iter()
        .map(|s| s.name.as_str())
        .collect();
    assert_eq!(keys, vec!["a", "c"]);

    assert_eq!(extraction.diagnostics.len(), 1);
    let d = &extraction.diagnostics[0];
    assert_eq!(d.kind, DiagnosticKind::UnresolvableCriterionValue);
    assert_eq!(d.key.as_deref(), Some("b"));
    assert_eq!(d.line_index, 1);
}

#[test]
fn test_out_of_range_number_drops_only_that_key() {
    let extraction = extract("# Q\nrub: {a: 1e400, b: 2}", FileDialect::HashHeader);

    let subs = &extraction.rubric.questions[0].sub_questions;
    assert_eq!(subs.len(), 1);
    assert_eq!(subs[0].name, "b");
    assert_eq!(subs[0].out_of, 2.0);

    assert_eq!(extraction.diagnostics.len(), 1);
    let d = &extraction.diagnostics[0];
    assert_eq!(d.kind, DiagnosticKind::UnresolvableCriterionValue);
    assert_eq!(d.key.as_deref(), Some("a"));
}

#[test]
fn test_all_values_dropped_skips_question() {
    let content = "# Q1\nrub: {a: \"x\"}\n# Q2\nrub: {b: 4}";
    let extraction = extract(content, FileDialect::HashHeader);

    assert_eq!(names(&extraction), vec!["Q2"]);
    assert_eq!(extraction.diagnostics.len(), 1);
}

#[test]
fn test_malformed_annotation_skipped_scan_continues() {
    let content = "# Q1\nrub: {a: 1,, }\n# Q2\nrubric = {b: 2}";
    let extraction = extract(content, FileDialect::HashHeader);

    assert_eq!(names(&extraction), vec!["Q2"]);
    assert_eq!(extraction.diagnostics.len(), 1);
    assert_eq!(
        extraction.diagnostics[0].kind,
        DiagnosticKind::MalformedAnnotation
    );
    assert_eq!(extraction.diagnostics[0].line, "rub: {a: 1,, }");
}

#[test]
fn test_missing_header_gives_empty_name() {
    let content = "intro\nrub: {a: 1}";
    let extraction = extract(content, FileDialect::HashHeader);

    assert_eq!(names(&extraction), vec![""]);
    assert_eq!(extraction.diagnostics[0].kind, DiagnosticKind::NoHeaderFound);
}

#[test]
fn test_latex_document() {
    let content = [
        r"\documentclass{article}",
        r"\begin{document}",
        r"\section{Proofs}",
        r"% rubric: {rigor: 6, clarity: '2'}",
        r"\subsection*{Optional extension}",
        r"% rub: {depth: 3}",
        r"\end{document}",
    ]
    .join("\n");
    let extraction = extract(&content, FileDialect::LatexSection);

    // single-quoted string values do not repair into JSON
    assert_eq!(names(&extraction), vec!["Optional extension"]);
    assert!(extraction.rubric.questions[0].sub_questions[0].is_bonus());
    assert_eq!(
        extraction.diagnostics[0].kind,
        DiagnosticKind::MalformedAnnotation
    );
}

#[test]
fn test_latex_quoted_values() {
    let content = "\\section{Proofs}\n% rubric: {rigor: 6, \"clarity\": \"2\"}";
    let extraction = extract(content, FileDialect::LatexSection);

    assert_eq!(names(&extraction), vec!["Proofs"]);
    assert_eq!(extraction.rubric.max_score(), 8.0);
}

#[test]
fn test_multiple_annotations_under_one_header() {
    let content = "# Q\nrub: {a: 1}\ntext\nrub: {b: 2}";
    let extraction = extract(content, FileDialect::HashHeader);
    assert_eq!(names(&extraction), vec!["Q", "Q"]);
}

#[test]
fn test_notebook_style_source() {
    let content = [
        r#"  "cells": ["#,
        r###"    "## Question 3\n","###,
        r#"    "<!-- rubric: {plot: 4, raw_fit: 1} -->""#,
    ]
    .join("\n");
    let extraction = extract(&content, FileDialect::HashHeader);

    assert_eq!(names(&extraction), vec!["Question 3"]);
    assert_eq!(extraction.rubric.criteria_count(), 2);
}

#[test]
fn test_crlf_document() {
    let content = "# Question 1\r\n\r\nrub: {a: 2}\r\n";
    let extraction = extract(content, FileDialect::HashHeader);
    assert_eq!(names(&extraction), vec!["Question 1"]);
}

#[test]
fn test_extraction_is_deterministic() {
    let content = "# A\nrub: {z: 1, y: \"2\", x: 3}\n## Bonus\nrubric: {raw_q: 4}";
    let first = extract(content, FileDialect::HashHeader);
    let second = extract(content, FileDialect::HashHeader);

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first.rubric).unwrap(),
        serde_json::to_string(&second.rubric).unwrap()
    );
}

#[test]
fn test_extract_bytes_lossy() {
    let extraction = extract_bytes(b"# Q \xff\nrub: {a: 1}", FileDialect::HashHeader);
    assert_eq!(extraction.rubric.questions[0].name, "Q \u{fffd}");
}

#[test]
fn test_find_annotations_sites() {
    let lines = scan_lines("# H\nrub: {a: 1}\nplain\nrubric: {b: 2}");
    let sites = find_annotations(&lines);
    assert_eq!(
        sites.iter().map(|s| s.line_index).collect::<Vec<_>>(),
        vec![1, 3]
    );
    assert_eq!(sites[1].raw_line, "rubric: {b: 2}");
}
