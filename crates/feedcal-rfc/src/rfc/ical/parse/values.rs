//! Value decoders for the recognized feed properties (RFC 5545 §3.3).

/// Length of a bare `YYYYMMDD` date token.
const DATE_LEN: usize = 8;
/// Length of `YYYYMMDDTHHMMSS`, not counting a trailing `Z`.
const DATETIME_LEN: usize = 15;

/// Unescapes TEXT values (RFC 5545 §3.3.11).
///
/// Replacements run in a fixed order: `\n`, `\,`, `\;`, then `\\` last so the
/// earlier steps never see a backslash produced by unescaping. Strings without
/// a backslash come back unchanged.
#[must_use]
pub fn unescape_text(s: &str) -> String {
    if !s.contains('\\') {
        return s.to_string();
    }

    s.replace("\\n", "\n")
        .replace("\\,", ",")
        .replace("\\;", ";")
        .replace("\\\\", "\\")
}

/// Normalizes a DATE or DATE-TIME token to `YYYY-MM-DDThh:mm:ss`.
///
/// - 15+ bytes (`20260215T100000`, optionally with `Z`): full date and time;
///   the `T` separator and any UTC designator are dropped
/// - 8 to 14 bytes (`20260215`): the date at midnight
/// - shorter, or not sliceable on those byte offsets: returned unchanged
///
/// Timezone information is discarded; the result is a naive local time.
#[must_use]
pub fn normalize_datetime(raw: &str) -> String {
    let normalized = match raw.len() {
        len if len >= DATETIME_LEN => split_date(raw)
            .zip(split_time(raw))
            .map(|((year, month, day), (hour, minute, second))| {
                format!("{year}-{month}-{day}T{hour}:{minute}:{second}")
            }),
        len if len >= DATE_LEN => {
            split_date(raw).map(|(year, month, day)| format!("{year}-{month}-{day}T00:00:00"))
        }
        _ => None,
    };

    normalized.unwrap_or_else(|| {
        tracing::trace!(token = raw, "Passing through unrecognized date token");
        raw.to_string()
    })
}

fn split_date(raw: &str) -> Option<(&str, &str, &str)> {
    Some((raw.get(0..4)?, raw.get(4..6)?, raw.get(6..8)?))
}

fn split_time(raw: &str) -> Option<(&str, &str, &str)> {
    Some((raw.get(9..11)?, raw.get(11..13)?, raw.get(13..15)?))
}
