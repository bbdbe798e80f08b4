//! `feedcal` command-line application.
//!
//! Reads a calendar feed from a file or stdin, runs it through the feed
//! parser and renders the resulting events.

pub mod cli;
pub mod error;
pub mod feed;
pub mod render;

use feedcal_core::config::Settings;
use feedcal_rfc::rfc::ical::core::TimestampIdGenerator;
use feedcal_rfc::rfc::ical::parse::parse_feed_report;

use crate::cli::Cli;
use crate::error::AppResult;
use crate::feed::FeedSource;

/// ## Summary
/// Reads the feed named on the command line and renders its events.
///
/// ## Errors
/// Returns [`error::AppError::FeedUnavailable`] when the feed cannot be read,
/// which callers must keep distinct from a feed that parsed to zero events.
pub fn run(cli: &Cli, settings: &Settings) -> AppResult<String> {
    let output = cli.output_config(&settings.output);
    let source = FeedSource::from_arg(cli.input.as_deref());

    let text = source.read()?;
    let report = parse_feed_report(&text, &TimestampIdGenerator);

    if report.dropped() > 0 {
        tracing::warn!(
            source = %source,
            blocks = report.blocks,
            dropped = report.dropped(),
            "Skipped feed entries without a title or start"
        );
    }
    tracing::info!(source = %source, events = report.events.len(), "Feed parsed");

    render::render(&report.events, &output)
}
