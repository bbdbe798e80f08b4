//! Feed parsing stages.
//!
//! - Extract: locate `VEVENT` blocks by index scanning
//! - Lexer: unfold physical lines and split `name[;params]:value`
//! - Values: text unescaping and date-time normalization
//! - Parser: map properties onto a [`FieldSet`](super::core::FieldSet) and
//!   assemble events

mod extract;
mod lexer;
mod parser;
mod values;

pub use extract::extract_event_blocks;
pub use lexer::{tokenize_line, unfold_lines};
pub use parser::{parse_feed, parse_feed_report, parse_feed_with};
pub use values::{normalize_datetime, unescape_text};
