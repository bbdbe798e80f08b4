//! Local stand-in for the feed fetcher: reads feed text from a file or stdin.

use std::fmt;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

/// Where the raw feed text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedSource {
    Stdin,
    File(PathBuf),
}

impl FeedSource {
    /// `None` and `-` both mean stdin.
    #[must_use]
    pub fn from_arg(arg: Option<&Path>) -> Self {
        match arg {
            Some(path) if path != Path::new("-") => Self::File(path.to_path_buf()),
            _ => Self::Stdin,
        }
    }

    /// ## Summary
    /// Reads the whole feed into memory.
    ///
    /// ## Errors
    /// Returns [`AppError::FeedUnavailable`] if the source cannot be opened or
    /// read, or is not valid UTF-8.
    #[tracing::instrument]
    pub fn read(&self) -> AppResult<String> {
        match self {
            Self::Stdin => read_feed(std::io::stdin().lock(), &self.to_string()),
            Self::File(path) => {
                let file = std::fs::File::open(path).map_err(|error| AppError::FeedUnavailable {
                    origin: self.to_string(),
                    error,
                })?;
                read_feed(file, &self.to_string())
            }
        }
    }
}

impl fmt::Display for FeedSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => f.write_str("stdin"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// ## Summary
/// Drains `reader` into a string.
///
/// ## Errors
/// Returns [`AppError::FeedUnavailable`] tagged with `origin` on any read
/// failure.
pub fn read_feed(mut reader: impl Read, origin: &str) -> AppResult<String> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|error| AppError::FeedUnavailable {
            origin: origin.to_string(),
            error,
        })?;

    tracing::debug!(origin, bytes = text.len(), "Feed read");
    Ok(text)
}
