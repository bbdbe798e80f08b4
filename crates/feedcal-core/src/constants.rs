/// Tag marking identifiers that originate from an external calendar feed.
pub const SOURCE_TAG: &str = "ical";

/// Prefix applied to feed-supplied `UID` values and synthesized fallback ids.
pub const FEED_ID_PREFIX: &str = const_str::concat!(SOURCE_TAG, "-");

/// Component markers delimiting a single event inside a feed.
pub const BEGIN_EVENT_MARKER: &str = "BEGIN:VEVENT";
pub const END_EVENT_MARKER: &str = "END:VEVENT";
