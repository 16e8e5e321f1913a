//! Line scanning
//!
//! Lines are split on `\n` only. A single trailing `\r` is dropped from each
//! line so CRLF sources clean the same way as LF sources; line indices are
//! unaffected because no line is ever merged or removed. Empty lines are kept.

use std::borrow::Cow;

/// Decode raw file bytes, replacing invalid UTF-8 sequences
pub fn decode(content: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(content)
}

/// Split content into ordered lines, preserving empty lines
pub fn scan_lines(content: &str) -> Vec<&str> {
    content
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}
