use super::{CalendarEvent, IdGenerator};

/// The recognized property slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldSlot {
    Uid,
    Summary,
    Description,
    Location,
    Start,
    End,
}

impl FieldSlot {
    /// Maps a property name onto its slot. Matching is exact and
    /// case-sensitive; anything outside the table is `None`.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "UID" => Some(Self::Uid),
            "SUMMARY" => Some(Self::Summary),
            "DESCRIPTION" => Some(Self::Description),
            "LOCATION" => Some(Self::Location),
            "DTSTART" => Some(Self::Start),
            "DTEND" => Some(Self::End),
            _ => None,
        }
    }
}

/// Per-block accumulator with one optional slot per recognized property.
///
/// A later property overwrites an earlier one in the same slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSet {
    uid: Option<String>,
    summary: Option<String>,
    description: Option<String>,
    location: Option<String>,
    start: Option<String>,
    end: Option<String>,
}

impl FieldSet {
    pub fn set(&mut self, slot: FieldSlot, value: String) {
        *self.slot_mut(slot) = Some(value);
    }

    #[must_use]
    pub fn get(&self, slot: FieldSlot) -> Option<&str> {
        match slot {
            FieldSlot::Uid => self.uid.as_deref(),
            FieldSlot::Summary => self.summary.as_deref(),
            FieldSlot::Description => self.description.as_deref(),
            FieldSlot::Location => self.location.as_deref(),
            FieldSlot::Start => self.start.as_deref(),
            FieldSlot::End => self.end.as_deref(),
        }
    }

    fn slot_mut(&mut self, slot: FieldSlot) -> &mut Option<String> {
        match slot {
            FieldSlot::Uid => &mut self.uid,
            FieldSlot::Summary => &mut self.summary,
            FieldSlot::Description => &mut self.description,
            FieldSlot::Location => &mut self.location,
            FieldSlot::Start => &mut self.start,
            FieldSlot::End => &mut self.end,
        }
    }

    /// ## Summary
    /// Applies the inclusion rule and completion defaults.
    ///
    /// Yields an event only when both summary and start are present and
    /// non-empty. A missing (or empty) end takes the start value; a missing
    /// uid is synthesized by `ids`, which is not consulted otherwise.
    #[must_use]
    pub fn into_event(self, ids: &impl IdGenerator) -> Option<CalendarEvent> {
        let title = self.summary.filter(|s| !s.is_empty())?;
        let start = self.start.filter(|s| !s.is_empty())?;
        let end = self
            .end
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| start.clone());
        let id = self.uid.unwrap_or_else(|| ids.generate());

        Some(CalendarEvent::from_feed(
            id,
            title,
            self.description,
            self.location,
            start,
            end,
        ))
    }
}
