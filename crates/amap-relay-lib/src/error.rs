use thiserror::Error;

/// Convenient result alias for the relay library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// The provider API key was not configured at startup.
    #[error("AMAP_KEY is not set")]
    MissingApiKey,

    /// The provider answered with a non-success `status` field.
    #[error("{operation} failed: {info}")]
    Upstream {
        operation: &'static str,
        info: String,
    },

    /// Wrapper for HTTP client errors.
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}
