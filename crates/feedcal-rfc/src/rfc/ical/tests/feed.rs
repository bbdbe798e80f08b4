//! Whole-feed parsing tests.

use std::cell::Cell;

use super::fixtures::*;
use crate::rfc::ical::core::{EventSource, IdGenerator};
use crate::rfc::ical::parse::{parse_feed, parse_feed_report, parse_feed_with};

/// Deterministic generator handing out `ical-test-0`, `ical-test-1`, ...
#[derive(Default)]
struct SequenceIds {
    next: Cell<u32>,
}

impl IdGenerator for SequenceIds {
    fn generate(&self) -> String {
        let n = self.next.get();
        self.next.set(n + 1);
        format!("ical-test-{n}")
    }
}

fn is_synthesized_id(id: &str) -> bool {
    let Some(rest) = id.strip_prefix("ical-") else {
        return false;
    };
    let Some((digits, suffix)) = rest.split_once('-') else {
        return false;
    };
    !digits.is_empty()
        && digits.chars().all(|c| c.is_ascii_digit())
        && suffix.len() == 6
        && suffix.chars().all(|c| c.is_ascii_alphanumeric())
}

#[test_log::test]
fn parse_single_event_maps_every_field() {
    let events = parse_feed(FEED_SINGLE_EVENT);
    assert_eq!(events.len(), 1);

    let event = &events[0];
    assert_eq!(event.id(), "ical-19970901T130000Z-123401@example.com");
    assert_eq!(event.title(), "Annual Employee Review");
    assert_eq!(
        event.description(),
        Some("Agenda:\n1. Goals, targets\n2. Feedback")
    );
    assert_eq!(event.location(), Some("Room 4: B"));
    assert_eq!(event.start(), "2026-02-15T10:00:00");
    assert_eq!(event.end(), "2026-02-15T11:00:00");
    assert_eq!(event.source(), EventSource::ExternalFeed);
}

#[test_log::test]
fn parse_mixed_feed_drops_incomplete_blocks() {
    let ids = SequenceIds::default();
    let report = parse_feed_report(FEED_MIXED, &ids);

    assert_eq!(report.blocks, 3);
    assert_eq!(report.dropped(), 1);

    let titles: Vec<&str> = report.events.iter().map(|e| e.title()).collect();
    assert_eq!(titles, vec!["First", "Third"]);

    let first = &report.events[0];
    assert_eq!(first.id(), "ical-first@example.com");
    assert_eq!(first.start(), "2026-03-01T09:00:00");
    assert_eq!(first.end(), "2026-03-01T10:00:00");

    let third = &report.events[1];
    assert_eq!(third.id(), "ical-test-0");
    assert_eq!(third.start(), "2026-03-03T00:00:00");
    assert_eq!(third.end(), third.start());
    assert!(third.description().is_none());
    assert!(third.location().is_none());
}

#[test]
fn parse_folded_lines_with_bare_lf() {
    let events = parse_feed(FEED_FOLDED_LF);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].title(), "Long title");
    assert_eq!(events[0].description(), Some("Spansthreelines"));
}

#[test]
fn parse_missing_start_yields_nothing() {
    let input = "BEGIN:VEVENT\r\nSUMMARY:Title only\r\nEND:VEVENT\r\n";
    let report = parse_feed_report(input, &SequenceIds::default());
    assert!(report.events.is_empty());
    assert_eq!(report.blocks, 1);
    assert_eq!(report.dropped(), 1);
}

#[test]
fn parse_missing_title_yields_nothing() {
    let input = "BEGIN:VEVENT\r\nDTSTART:20260215T100000Z\r\nEND:VEVENT\r\n";
    assert!(parse_feed(input).is_empty());
}

#[test]
fn parse_without_components_is_empty() {
    assert!(parse_feed("").is_empty());
    assert!(parse_feed("not a calendar at all").is_empty());

    let report = parse_feed_report(FEED_TODO_ONLY, &SequenceIds::default());
    assert!(report.events.is_empty());
    assert_eq!(report.blocks, 0);
}

#[test]
fn parse_without_uid_synthesizes_distinct_ids() {
    let input = "BEGIN:VEVENT\r\nSUMMARY:No uid\r\nDTSTART:20260215\r\nEND:VEVENT\r\n";

    let first = parse_feed(input);
    let second = parse_feed(input);

    assert!(is_synthesized_id(first[0].id()), "{}", first[0].id());
    assert!(is_synthesized_id(second[0].id()), "{}", second[0].id());
    assert_ne!(first[0].id(), second[0].id());
    assert_eq!(first[0].start(), "2026-02-15T00:00:00");
}

#[test]
fn parse_keeps_duplicate_uids() {
    let events = parse_feed(FEED_DUPLICATE_UID);
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].id(), events[1].id());
    assert_eq!(events[0].title(), "Original");
    assert_eq!(events[1].title(), "Moved");
}

#[test]
fn parse_accepts_end_before_start() {
    let input = "\
BEGIN:VEVENT\r\n\
SUMMARY:Backwards\r\n\
DTSTART:20260215T100000Z\r\n\
DTEND:20260215T090000Z\r\n\
END:VEVENT\r\n";

    let events = parse_feed_with(input, &|| "fixed".to_string());
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].end(), "2026-02-15T09:00:00");
    assert!(events[0].end_naive() < events[0].start_naive());
}

#[test]
fn parse_short_date_token_passes_through() {
    let input = "BEGIN:VEVENT\nSUMMARY:Odd\nDTSTART:2026\nEND:VEVENT\n";
    let events = parse_feed_with(input, &SequenceIds::default());
    assert_eq!(events[0].start(), "2026");
    assert!(events[0].start_naive().is_none());
}

#[test]
fn parse_lowercase_keys_are_not_recognized() {
    let input = "BEGIN:VEVENT\nsummary:lower\nDTSTART:20260215\nEND:VEVENT\n";
    assert!(parse_feed(input).is_empty());
}

#[test]
fn parse_report_serializes_events() {
    let report = parse_feed_report(FEED_SINGLE_EVENT, &SequenceIds::default());
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["blocks"], 1);
    assert_eq!(json["events"][0]["start"], "2026-02-15T10:00:00");
    assert_eq!(json["events"][0]["source"], "external_feed");
}
