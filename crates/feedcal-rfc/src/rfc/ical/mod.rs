//! iCalendar feed ingestion (RFC 5545 subset).
//!
//! Turns the raw text of an external calendar feed into a flat list of
//! [`core::CalendarEvent`]s. Only `VEVENT` components are read, and only six
//! of their properties: `UID`, `SUMMARY`, `DESCRIPTION`, `LOCATION`, `DTSTART`
//! and `DTEND`.
//!
//! ## Overview
//!
//! Parsing never fails. Blocks missing a `SUMMARY` or `DTSTART` are dropped,
//! lines without a colon are skipped, and date tokens of an unknown shape are
//! passed through untouched. Timezone parameters are discarded, so every
//! timestamp is a naive local `YYYY-MM-DDThh:mm:ss` string.
//!
//! ## Usage
//!
//! ```rust
//! use feedcal_rfc::rfc::ical::parse::parse_feed;
//!
//! let feed = "\
//! BEGIN:VCALENDAR\r\n\
//! BEGIN:VEVENT\r\n\
//! SUMMARY:Standup\r\n\
//! DTSTART:20260215T100000Z\r\n\
//! END:VEVENT\r\n\
//! END:VCALENDAR\r\n";
//!
//! let events = parse_feed(feed);
//! assert_eq!(events.len(), 1);
//! assert_eq!(events[0].title(), "Standup");
//! assert_eq!(events[0].start(), "2026-02-15T10:00:00");
//! assert_eq!(events[0].end(), events[0].start());
//! ```

pub mod core;
pub mod parse;

#[cfg(test)]
mod tests;
