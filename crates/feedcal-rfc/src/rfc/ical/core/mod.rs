//! Feed ingestion models.
//!
//! - [`FeedProperty`]: one tokenized `key:value` line
//! - [`FieldSet`]: the per-block accumulator for the six recognized properties
//! - [`CalendarEvent`]: the validated output record
//! - [`IdGenerator`]: source of fallback identifiers for events without a `UID`

mod event;
mod field_set;
mod id;
mod property;
mod report;

pub use event::{CalendarEvent, EventSource};
pub use field_set::{FieldSet, FieldSlot};
pub use id::{IdGenerator, TimestampIdGenerator};
pub use property::FeedProperty;
pub use report::FeedReport;
