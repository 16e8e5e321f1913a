//! Rubric data model
//!
//! An [`AssignmentRubric`] holds one [`QuestionRubric`] per surviving
//! annotation, in document order. Field names serialize in camelCase to keep
//! the stored record shape (`subQuestions`, `outOf`) stable for consumers.

mod score;

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

pub use score::format_score;

/// Weight given to every criterion at extraction time
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// Grading modifier attached to a criterion
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    /// Score is not counted toward the assignment's total possible score
    Bonus,
    /// Criterion accepts only direct numeric grades
    Numerical,
}

impl Modifier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Modifier::Bonus => "bonus",
            Modifier::Numerical => "numerical",
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single named, numerically-capped grading item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubQuestionRubric {
    /// The raw annotation key
    pub name: String,
    /// Filled in later by a human; always empty after extraction
    #[serde(default)]
    pub description: String,
    /// Maximum score, finite and non-negative
    #[serde(serialize_with = "score::serialize")]
    pub out_of: f64,
    #[serde(serialize_with = "score::serialize")]
    pub weight: f64,
    #[serde(default)]
    pub modifiers: BTreeSet<Modifier>,
}

impl SubQuestionRubric {
    /// Create a criterion with the extraction-time defaults
    pub fn new(name: impl Into<String>, out_of: f64, modifiers: BTreeSet<Modifier>) -> Self {
        SubQuestionRubric {
            name: name.into(),
            description: String::new(),
            out_of,
            weight: DEFAULT_WEIGHT,
            modifiers,
        }
    }

    pub fn is_bonus(&self) -> bool {
        self.modifiers.contains(&Modifier::Bonus)
    }

    pub fn is_numerical(&self) -> bool {
        self.modifiers.contains(&Modifier::Numerical)
    }

    /// Weighted maximum contribution of this criterion
    pub fn weighted_out_of(&self) -> f64 {
        self.out_of * self.weight
    }
}

/// One question: a cleaned section header plus its criteria in key order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionRubric {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub sub_questions: Vec<SubQuestionRubric>,
}

impl QuestionRubric {
    pub fn new(name: impl Into<String>, sub_questions: Vec<SubQuestionRubric>) -> Self {
        QuestionRubric {
            name: name.into(),
            description: String::new(),
            sub_questions,
        }
    }

    /// Total possible score, excluding bonus criteria
    pub fn max_score(&self) -> f64 {
        self.sub_questions
            .iter()
            .filter(|sq| !sq.is_bonus())
            .map(SubQuestionRubric::weighted_out_of)
            .sum()
    }

    /// Score available from bonus criteria only
    pub fn bonus_score(&self) -> f64 {
        self.sub_questions
            .iter()
            .filter(|sq| sq.is_bonus())
            .map(SubQuestionRubric::weighted_out_of)
            .sum()
    }
}

/// The full rubric derived from one assignment source file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssignmentRubric {
    pub questions: Vec<QuestionRubric>,
}

impl AssignmentRubric {
    pub fn new(questions: Vec<QuestionRubric>) -> Self {
        AssignmentRubric { questions }
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Number of criteria across all questions
    pub fn criteria_count(&self) -> usize {
        self.questions.iter().map(|q| q.sub_questions.len()).sum()
    }

    /// Total possible score; bonus criteria are not counted
    pub fn max_score(&self) -> f64 {
        self.questions.iter().map(QuestionRubric::max_score).sum()
    }

    /// Extra score available through bonus criteria
    pub fn bonus_score(&self) -> f64 {
        self.questions.iter().map(QuestionRubric::bonus_score).sum()
    }

    pub fn totals(&self) -> RubricTotals {
        RubricTotals {
            max_score: self.max_score(),
            bonus_score: self.bonus_score(),
            questions: self.questions.len(),
            criteria: self.criteria_count(),
        }
    }
}

/// Summary figures reported alongside a rubric
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RubricTotals {
    #[serde(serialize_with = "score::serialize")]
    pub max_score: f64,
    #[serde(serialize_with = "score::serialize")]
    pub bonus_score: f64,
    pub questions: usize,
    pub criteria: usize,
}
