//! `VEVENT` block extraction.

use feedcal_core::constants::{BEGIN_EVENT_MARKER, END_EVENT_MARKER};

/// Returns every span from `BEGIN:VEVENT` through the next `END:VEVENT`.
///
/// Scans left to right; each begin marker pairs with the first end marker
/// after it and scanning resumes past that end marker, so spans never overlap
/// and nesting is not recognized. A trailing begin marker with no end marker
/// is ignored. Runs in a single forward pass over `input`.
#[must_use]
pub fn extract_event_blocks(input: &str) -> Vec<&str> {
    let mut blocks = Vec::new();
    let mut cursor = 0;

    while let Some(offset) = input[cursor..].find(BEGIN_EVENT_MARKER) {
        let start = cursor + offset;
        let body = start + BEGIN_EVENT_MARKER.len();

        let Some(offset) = input[body..].find(END_EVENT_MARKER) else {
            break;
        };
        let stop = body + offset + END_EVENT_MARKER.len();

        blocks.push(&input[start..stop]);
        cursor = stop;
    }

    blocks
}
