//! Shared rubric rendering for human, JSON and records output

use rubric_core::extract::Diagnostic;
use rubric_core::records::{format_diagnostic_record, format_rubric_records};
use rubric_core::rubric::{format_score, AssignmentRubric};

use crate::cli::Cli;

/// Print a rubric for terminal use
pub fn print_rubric_human(rubric: &AssignmentRubric) {
    if rubric.is_empty() {
        println!("No rubric annotations found");
        return;
    }

    for question in &rubric.questions {
        let name = if question.name.is_empty() {
            "(untitled)"
        } else {
            question.name.as_str()
        };
        println!("{} (max {})", name, format_score(question.max_score()));

        for sq in &question.sub_questions {
            let modifiers = if sq.modifiers.is_empty() {
                String::new()
            } else {
                let names: Vec<&str> = sq.modifiers.iter().map(|m| m.as_str()).collect();
                format!(" ({})", names.join(", "))
            };
            println!("  {} [out of {}]{}", sq.name, format_score(sq.out_of), modifiers);
        }
    }

    let bonus = rubric.bonus_score();
    if bonus > 0.0 {
        println!(
            "Total: {} (+{} bonus)",
            format_score(rubric.max_score()),
            format_score(bonus)
        );
    } else {
        println!("Total: {}", format_score(rubric.max_score()));
    }
}

/// Report diagnostics on stderr unless quiet
pub fn print_diagnostics(cli: &Cli, diagnostics: &[Diagnostic]) {
    if cli.quiet {
        return;
    }
    for diagnostic in diagnostics {
        eprintln!("warning: {}", diagnostic);
    }
}

/// Rubric and diagnostic records, without the header line
pub fn rubric_records(rubric: &AssignmentRubric, diagnostics: &[Diagnostic]) -> Vec<String> {
    let mut lines = format_rubric_records(rubric);
    lines.extend(diagnostics.iter().map(format_diagnostic_record));
    lines
}
