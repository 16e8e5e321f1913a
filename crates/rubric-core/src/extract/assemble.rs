use std::collections::BTreeSet;

use crate::rubric::{AssignmentRubric, Modifier, QuestionRubric, SubQuestionRubric};

/// A criterion that survived parsing and coercion
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedCriterion {
    pub key: String,
    pub out_of: f64,
    pub modifiers: BTreeSet<Modifier>,
}

/// One annotation's resolved header and criteria, in key order
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedQuestion {
    pub header: String,
    pub criteria: Vec<ResolvedCriterion>,
}

/// Fold resolved questions into a rubric, in annotation order.
///
/// Questions with no surviving criteria contribute nothing.
pub fn assemble(questions: impl IntoIterator<Item = ResolvedQuestion>) -> AssignmentRubric {
    let questions = questions
        .into_iter()
        .filter(|q| !q.criteria.is_empty())
        .map(|q| {
            let sub_questions = q
                .criteria
                .into_iter()
                .map(|c| SubQuestionRubric::new(c.key, c.out_of, c.modifiers))
                .collect();
            QuestionRubric::new(q.header, sub_questions)
        })
        .collect();

    AssignmentRubric::new(questions)
}
