use chrono::NaiveDateTime;
use serde::Serialize;

/// Format shared by every canonical `start`/`end` string.
const CANONICAL_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Where an event came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventSource {
    /// Authored directly in the consuming application.
    Local,
    /// Read from an external calendar feed.
    ExternalFeed,
}

impl EventSource {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::ExternalFeed => "external_feed",
        }
    }
}

impl std::fmt::Display for EventSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A calendar event extracted from a feed.
///
/// Only constructed by the feed parser, which guarantees a non-empty `title`
/// and `start`. `end` falls back to `start` when the feed has no `DTEND`; no
/// ordering between the two is enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarEvent {
    id: String,
    title: String,
    description: Option<String>,
    location: Option<String>,
    start: String,
    end: String,
    source: EventSource,
}

impl CalendarEvent {
    pub(crate) fn from_feed(
        id: String,
        title: String,
        description: Option<String>,
        location: Option<String>,
        start: String,
        end: String,
    ) -> Self {
        Self {
            id,
            title,
            description,
            location,
            start,
            end,
            source: EventSource::ExternalFeed,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// Naive local start, `YYYY-MM-DDThh:mm:ss` unless the feed token was too
    /// short to normalize.
    #[must_use]
    pub fn start(&self) -> &str {
        &self.start
    }

    #[must_use]
    pub fn end(&self) -> &str {
        &self.end
    }

    #[must_use]
    pub const fn source(&self) -> EventSource {
        self.source
    }

    #[must_use]
    pub fn is_external(&self) -> bool {
        self.source == EventSource::ExternalFeed
    }

    /// ## Summary
    /// Parses the canonical start string.
    ///
    /// Returns `None` for tokens that were passed through unnormalized or that
    /// name an impossible date (e.g. month 13).
    #[must_use]
    pub fn start_naive(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.start, CANONICAL_FORMAT).ok()
    }

    /// Same as [`CalendarEvent::start_naive`] for the end timestamp.
    #[must_use]
    pub fn end_naive(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.end, CANONICAL_FORMAT).ok()
    }
}
