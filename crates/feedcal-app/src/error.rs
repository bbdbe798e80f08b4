use thiserror::Error;

/// Application-level errors
#[derive(Error, Debug)]
pub enum AppError {
    /// The feed could not be retrieved; distinct from a feed with no events.
    #[error("Feed unavailable from {origin}: {error}")]
    FeedUnavailable {
        origin: String,
        #[source]
        error: std::io::Error,
    },

    #[error("Failed to render events: {0}")]
    Render(#[from] serde_json::Error),
}

pub type AppResult<T> = std::result::Result<T, AppError>;
