//! Utilities for records output format
//!
//! - `Q <n> "<name>" criteria=<k> max=<score>`
//! - `C <n>.<m> "<name>" out_of=<score> weight=<w> modifiers=<list|->`
//! - `T max=<score> bonus=<score> questions=<n> criteria=<k>`
//! - `D <kind> line=<n> key=<key|-> "<detail>"`

use crate::extract::Diagnostic;
use crate::rubric::{format_score, AssignmentRubric, QuestionRubric, SubQuestionRubric};

/// Escape double quotes in a string for records format.
/// Replaces `"` with `\"` to allow safe embedding in quoted fields.
pub fn escape_quotes(s: &str) -> String {
    s.replace('\"', r#"\""#)
}

pub fn format_question_record(number: usize, question: &QuestionRubric) -> String {
    format!(
        "Q {} \"{}\" criteria={} max={}",
        number,
        escape_quotes(&question.name),
        question.sub_questions.len(),
        format_score(question.max_score())
    )
}

pub fn format_criterion_record(
    question_number: usize,
    number: usize,
    criterion: &SubQuestionRubric,
) -> String {
    let modifiers = if criterion.modifiers.is_empty() {
        "-".to_string()
    } else {
        criterion
            .modifiers
            .iter()
            .map(|m| m.as_str())
            .collect::<Vec<_>>()
            .join(",")
    };
    format!(
        "C {}.{} \"{}\" out_of={} weight={} modifiers={}",
        question_number,
        number,
        escape_quotes(&criterion.name),
        format_score(criterion.out_of),
        format_score(criterion.weight),
        modifiers
    )
}

pub fn format_totals_record(rubric: &AssignmentRubric) -> String {
    format!(
        "T max={} bonus={} questions={} criteria={}",
        format_score(rubric.max_score()),
        format_score(rubric.bonus_score()),
        rubric.questions.len(),
        rubric.criteria_count()
    )
}

pub fn format_diagnostic_record(diagnostic: &Diagnostic) -> String {
    format!(
        "D {} line={} key={} \"{}\"",
        diagnostic.kind,
        diagnostic.line_number(),
        diagnostic.key.as_deref().unwrap_or("-"),
        escape_quotes(&diagnostic.detail)
    )
}

/// All records for a rubric, numbering questions and criteria from 1
pub fn format_rubric_records(rubric: &AssignmentRubric) -> Vec<String> {
    let mut lines = Vec::with_capacity(rubric.criteria_count() + rubric.questions.len() + 1);
    for (qi, question) in rubric.questions.iter().enumerate() {
        lines.push(format_question_record(qi + 1, question));
        for (ci, criterion) in question.sub_questions.iter().enumerate() {
            lines.push(format_criterion_record(qi + 1, ci + 1, criterion));
        }
    }
    lines.push(format_totals_record(rubric));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::DiagnosticKind;
    use crate::rubric::Modifier;

    #[test]
    fn test_escape_quotes() {
        assert_eq!(escape_quotes(r#"say "hi""#), r#"say \"hi\""#);
    }

    #[test]
    fn test_rubric_records() {
        let rubric = AssignmentRubric::new(vec![QuestionRubric::new(
            "Part \"A\"",
            vec![
                SubQuestionRubric::new("correctness", 10.0, Default::default()),
                SubQuestionRubric::new(
                    "raw_extra",
                    2.5,
                    [Modifier::Bonus, Modifier::Numerical].into_iter().collect(),
                ),
            ],
        )]);

        assert_eq!(
            format_rubric_records(&rubric),
            vec![
                r#"Q 1 "Part \"A\"" criteria=2 max=10"#.to_string(),
                r#"C 1.1 "correctness" out_of=10 weight=1 modifiers=-"#.to_string(),
                r#"C 1.2 "raw_extra" out_of=2.5 weight=1 modifiers=bonus,numerical"#.to_string(),
                "T max=10 bonus=2.5 questions=1 criteria=2".to_string(),
            ]
        );
    }

    #[test]
    fn test_diagnostic_record() {
        let d = Diagnostic::new(DiagnosticKind::NoHeaderFound, 0, "rub: {a: 1}", "none");
        assert_eq!(
            format_diagnostic_record(&d),
            r#"D no_header_found line=1 key=- "none""#
        );
    }
}
