use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use feedcal_core::config::{OutputConfig, OutputFormat};

/// Extract events from an iCalendar feed.
#[derive(Debug, Parser)]
#[command(name = "feedcal", version)]
pub struct Cli {
    /// Feed file to read; omit or pass `-` to read stdin
    pub input: Option<PathBuf>,

    /// Output format, overriding `output.format` from the configuration
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Json,
    Text,
}

impl From<FormatArg> for OutputFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Json => Self::Json,
            FormatArg::Text => Self::Text,
        }
    }
}

impl Cli {
    /// Merges command-line flags over the configured output settings.
    #[must_use]
    pub fn output_config(&self, configured: &OutputConfig) -> OutputConfig {
        OutputConfig {
            format: self.format.map_or(configured.format, OutputFormat::from),
            pretty: self.pretty || configured.pretty,
        }
    }
}
