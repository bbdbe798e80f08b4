//! Content line handling for feed blocks (RFC 5545 §3.1).

use crate::rfc::ical::core::FeedProperty;

/// Splits a block into logical lines, merging folded continuations.
///
/// Accepts both CRLF and bare LF endings. A line starting with SP or HTAB
/// continues the previous logical line: that single whitespace character is
/// removed and the rest is appended with no separator. A continuation with
/// nothing before it is discarded.
#[must_use]
pub fn unfold_lines(block: &str) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();

    for line in block.lines() {
        if let Some(continuation) = line.strip_prefix([' ', '\t']) {
            if let Some(prev) = lines.last_mut() {
                prev.push_str(continuation);
            }
        } else {
            lines.push(line.to_string());
        }
    }

    lines
}

/// Splits a logical line into its property name and raw value.
///
/// Format: `name *(";" param) ":" value`. The line is split at the first
/// colon and parameters are dropped from the name. Returns `None` for lines
/// without a colon.
#[must_use]
pub fn tokenize_line(line: &str) -> Option<FeedProperty<'_>> {
    let (key, value) = line.split_once(':')?;
    let name = key.split_once(';').map_or(key, |(name, _params)| name);

    Some(FeedProperty { name, value })
}
