use serde::Serialize;

use super::CalendarEvent;

/// Outcome of one feed parse, with enough bookkeeping to tell how many
/// `VEVENT` blocks were silently dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FeedReport {
    /// Emitted events, in feed order.
    pub events: Vec<CalendarEvent>,
    /// Number of `VEVENT` blocks found in the input.
    pub blocks: usize,
}

impl FeedReport {
    /// Blocks that were found but did not produce an event.
    #[must_use]
    pub fn dropped(&self) -> usize {
        self.blocks.saturating_sub(self.events.len())
    }

    #[must_use]
    pub fn into_events(self) -> Vec<CalendarEvent> {
        self.events
    }
}
