//! Criteria parsing and score coercion

use serde_json::Value;
use thiserror::Error;

use super::repair::{brace_span, repair_object_literal, RepairError};

/// Why a criterion value could not become a maximum score
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    #[error("value {0:?} is not a number")]
    NotNumeric(String),

    #[error("empty string is not a score")]
    Empty,

    #[error("score {0} is negative")]
    Negative(String),

    #[error("score {0} is not finite")]
    NotFinite(String),

    #[error("unsupported value type: {0}")]
    UnsupportedType(&'static str),
}

/// Extract the ordered key/value pairs of an annotation line.
///
/// Fails when the line has no brace region or the region is unparseable
/// even after key repair.
pub fn parse_criteria(annotation_line: &str) -> Result<Vec<(String, Value)>, RepairError> {
    let span = brace_span(annotation_line).ok_or(RepairError::NoBraceRegion)?;
    let object = repair_object_literal(span)?;
    Ok(object.into_iter().collect())
}

fn check_score(score: f64, raw: impl ToString) -> Result<f64, ValueError> {
    if !score.is_finite() {
        return Err(ValueError::NotFinite(raw.to_string()));
    }
    if score < 0.0 {
        return Err(ValueError::Negative(raw.to_string()));
    }
    // folds -0.0 into 0.0
    Ok(score + 0.0)
}

/// Coerce a raw annotation value into a maximum score.
///
/// Numbers are used directly; strings must parse as a number after trimming.
pub fn coerce_out_of(value: &Value) -> Result<f64, ValueError> {
    match value {
        Value::Number(n) => {
            // literals beyond the f64 range parse to infinity and fail as non-finite
            let score = n
                .as_f64()
                .or_else(|| n.to_string().parse::<f64>().ok())
                .ok_or_else(|| ValueError::NotNumeric(n.to_string()))?;
            check_score(score, n)
        }
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Err(ValueError::Empty);
            }
            let score = trimmed
                .parse::<f64>()
                .map_err(|_| ValueError::NotNumeric(s.clone()))?;
            check_score(score, trimmed)
        }
        Value::Null => Err(ValueError::UnsupportedType("null")),
        Value::Bool(_) => Err(ValueError::UnsupportedType("boolean")),
        Value::Array(_) => Err(ValueError::UnsupportedType("array")),
        Value::Object(_) => Err(ValueError::UnsupportedType("object")),
    }
}
