use feedcal_core::config::{OutputConfig, OutputFormat};
use feedcal_rfc::rfc::ical::core::CalendarEvent;

use crate::error::AppResult;

/// ## Summary
/// Renders events in the configured output format.
///
/// ## Errors
/// Returns an error if JSON serialization fails.
pub fn render(events: &[CalendarEvent], output: &OutputConfig) -> AppResult<String> {
    match output.format {
        OutputFormat::Json if output.pretty => Ok(serde_json::to_string_pretty(events)?),
        OutputFormat::Json => Ok(serde_json::to_string(events)?),
        OutputFormat::Text => Ok(render_text(events)),
    }
}

/// One line per event, with location and description indented beneath.
fn render_text(events: &[CalendarEvent]) -> String {
    events
        .iter()
        .map(|event| {
            let mut block = format!(
                "{} -> {}  {} [{}]",
                event.start(),
                event.end(),
                event.title(),
                event.source()
            );
            if let Some(location) = event.location() {
                block.push_str("\n    at ");
                block.push_str(location);
            }
            if let Some(description) = event.description() {
                for line in description.lines() {
                    block.push_str("\n    ");
                    block.push_str(line);
                }
            }
            block
        })
        .collect::<Vec<_>>()
        .join("\n")
}
