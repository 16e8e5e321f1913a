//! Repair of loosely-quoted object literals
//!
//! Annotation bodies look like object literals but are rarely valid JSON:
//! keys may be bare or single-quoted. Every key token is rewritten into a
//! double-quoted key followed by `: ` and the result must then parse as a
//! strict JSON object. Anything still unparseable fails fast; there is no
//! partial recovery.

use std::sync::OnceLock;

use regex::Regex;
use serde_json::{Map, Value};
use thiserror::Error;

static KEY_RE: OnceLock<Regex> = OnceLock::new();

fn key_re() -> &'static Regex {
    KEY_RE.get_or_init(|| {
        Regex::new(r#"(['"])?([a-zA-Z0-9_]+)(['"])?:"#).expect("Invalid key regex pattern")
    })
}

/// Failure to turn an annotation body into a key/value object
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepairError {
    #[error("no brace-delimited region")]
    NoBraceRegion,

    #[error("unparseable after key repair ({repaired}): {reason}")]
    Unparseable { repaired: String, reason: String },
}

/// The span from the first `{` to the last `}` on a line.
///
/// Two independent objects on one line are not separated; the single
/// greedy span is returned.
pub fn brace_span(line: &str) -> Option<&str> {
    let start = line.find('{')?;
    let end = line.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&line[start..=end])
}

/// Rewrite bare or loosely-quoted keys as `"key": `
pub fn quote_keys(span: &str) -> String {
    key_re().replace_all(span, "\"${2}\": ").into_owned()
}

/// Repair an object-literal span and parse it, preserving key order
pub fn repair_object_literal(span: &str) -> Result<Map<String, Value>, RepairError> {
    let repaired = quote_keys(span);
    serde_json::from_str::<Map<String, Value>>(&repaired).map_err(|e| RepairError::Unparseable {
        reason: e.to_string(),
        repaired,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brace_span_greedy() {
        assert_eq!(brace_span(r#"rub: {"a": 1} tail"#), Some(r#"{"a": 1}"#));
        assert_eq!(brace_span("x {a: 1} {b: 2} y"), Some("{a: 1} {b: 2}"));
        assert_eq!(brace_span("no braces"), None);
        assert_eq!(brace_span("} backwards {"), None);
    }

    #[test]
    fn test_quote_keys_variants() {
        assert_eq!(quote_keys("{a: 1}"), r#"{"a":  1}"#);
        assert_eq!(quote_keys("{'a': 1}"), r#"{"a":  1}"#);
        assert_eq!(quote_keys(r#"{"a":1}"#), r#"{"a": 1}"#);
    }

    #[test]
    fn test_repair_keeps_key_order() {
        let obj = repair_object_literal("{zeta: 1, alpha: '2', mid: \"3\"}");
        // single-quoted string values are not repaired
        assert!(obj.is_err());

        let obj = repair_object_literal(r#"{zeta: 1, alpha: "2", mid: 3}"#).unwrap();
        let keys: Vec<&str> = obj.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_repair_failure_reports_repaired_text() {
        let err = repair_object_literal("{a: }").unwrap_err();
        match err {
            RepairError::Unparseable { repaired, .. } => assert_eq!(repaired, r#"{"a":  }"#),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_repair_empty_object() {
        assert!(repair_object_literal("{}").unwrap().is_empty());
    }
}
