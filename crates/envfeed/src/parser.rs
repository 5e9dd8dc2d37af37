//! Line-level parsing of `KEY=VALUE` assignments.
//!
//! Responsibilities:
//! - Split one line of an env file into a raw key/value pair, or classify
//!   it as skippable (blank, comment, empty key).
//!
//! Does NOT handle:
//! - File access or map accumulation (see `loader`).
//! - Key standardization or environment overrides (see `feeder`).
//!
//! Invariants:
//! - Pure: no I/O, no environment access.
//! - Only the first `=` splits, so values may contain `=` freely.
//! - No quoting, escaping, or interpolation is recognized.

use crate::error::FeedError;

/// A key/value pair borrowed from one line of an env file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RawEntry<'a> {
    pub key: &'a str,
    pub value: &'a str,
}

/// Splits one line into a raw key/value pair.
///
/// Returns `Ok(None)` for lines the loader skips: blank lines, lines whose
/// first non-whitespace character is `#`, and assignments with an empty key
/// (`=value`). A non-blank line without any `=` fails with
/// [`FeedError::MalformedLine`] carrying the trimmed line text and `number`
/// (1-based).
///
/// Both the key and the value are trimmed of surrounding whitespace.
pub(crate) fn parse_line(number: usize, raw: &str) -> Result<Option<RawEntry<'_>>, FeedError> {
    let line = raw.trim();

    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let Some((key, value)) = line.split_once('=') else {
        return Err(FeedError::MalformedLine {
            line: number,
            content: line.to_string(),
        });
    };

    let key = key.trim();
    if key.is_empty() {
        return Ok(None);
    }

    Ok(Some(RawEntry {
        key,
        value: value.trim(),
    }))
}
