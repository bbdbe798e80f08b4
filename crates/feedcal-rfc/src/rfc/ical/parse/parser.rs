//! Feed parser (RFC 5545 `VEVENT` subset).
//!
//! Assembles [`CalendarEvent`]s from the blocks, lines and properties produced
//! by the earlier stages. Never fails: anything that cannot become an event is
//! left out.

use feedcal_core::constants::FEED_ID_PREFIX;

use super::extract::extract_event_blocks;
use super::lexer::{tokenize_line, unfold_lines};
use super::values::{normalize_datetime, unescape_text};
use crate::rfc::ical::core::{
    CalendarEvent, FeedProperty, FeedReport, FieldSet, FieldSlot, IdGenerator,
    TimestampIdGenerator,
};

/// Parses a feed, synthesizing fallback ids from the wall clock.
#[must_use]
pub fn parse_feed(input: &str) -> Vec<CalendarEvent> {
    parse_feed_with(input, &TimestampIdGenerator)
}

/// Parses a feed using `ids` for events without a `UID`.
#[must_use]
pub fn parse_feed_with(input: &str, ids: &impl IdGenerator) -> Vec<CalendarEvent> {
    parse_feed_report(input, ids).into_events()
}

/// ## Summary
/// Parses a feed and reports how many `VEVENT` blocks were found alongside the
/// events that were emitted.
///
/// Events keep the order of their blocks in `input`. Identical `UID`s in
/// different blocks yield separate events.
#[must_use]
#[tracing::instrument(skip(input, ids), fields(input_len = input.len()))]
pub fn parse_feed_report(input: &str, ids: &impl IdGenerator) -> FeedReport {
    let blocks = extract_event_blocks(input);

    let events: Vec<CalendarEvent> = blocks
        .iter()
        .enumerate()
        .filter_map(|(index, block)| parse_block(index, block, ids))
        .collect();

    let report = FeedReport {
        events,
        blocks: blocks.len(),
    };

    tracing::debug!(
        blocks = report.blocks,
        events = report.events.len(),
        dropped = report.dropped(),
        "Parsed calendar feed"
    );

    report
}

/// Builds the event for one block, or `None` if it lacks a title or start.
fn parse_block(index: usize, block: &str, ids: &impl IdGenerator) -> Option<CalendarEvent> {
    let mut fields = FieldSet::default();
    // Depth of nested non-event components (VALARM and friends).
    let mut nested = 0_usize;

    for line in unfold_lines(block) {
        let Some(property) = tokenize_line(&line) else {
            continue;
        };

        match property.name {
            "BEGIN" if property.value != "VEVENT" => nested += 1,
            "END" if nested > 0 => nested -= 1,
            _ if nested == 0 => map_property(&mut fields, property),
            _ => {}
        }
    }

    let event = fields.into_event(ids);
    if event.is_none() {
        tracing::trace!(block = index, "Dropping event block without title or start");
    }
    event
}

/// Stores a recognized property in its slot, decoding the value on the way.
fn map_property(fields: &mut FieldSet, property: FeedProperty<'_>) {
    let Some(slot) = FieldSlot::from_key(property.name) else {
        return;
    };

    let value = match slot {
        FieldSlot::Uid => format!("{FEED_ID_PREFIX}{}", property.value),
        FieldSlot::Summary | FieldSlot::Description | FieldSlot::Location => {
            unescape_text(property.value)
        }
        FieldSlot::Start | FieldSlot::End => normalize_datetime(property.value),
    };

    fields.set(slot, value);
}
