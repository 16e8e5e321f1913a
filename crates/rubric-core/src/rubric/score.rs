//! Score rendering: integral values print without a fractional part

use serde::Serializer;

/// Largest magnitude that round-trips exactly through an i64
const EXACT_INT_LIMIT: f64 = 9_007_199_254_740_992.0;

fn as_integer(value: f64) -> Option<i64> {
    if value.is_finite() && value.fract() == 0.0 && value.abs() <= EXACT_INT_LIMIT {
        Some(value as i64)
    } else {
        None
    }
}

pub(crate) fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    match as_integer(*value) {
        Some(int) => serializer.serialize_i64(int),
        None => serializer.serialize_f64(*value),
    }
}

/// Format a score for text output ("10", "2.5")
pub fn format_score(value: f64) -> String {
    match as_integer(value) {
        Some(int) => int.to_string(),
        None => value.to_string(),
    }
}
