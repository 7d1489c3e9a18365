//! Error types for joke sources.

use thiserror::Error;

/// Result type for joke source operations.
pub type JokeResult<T> = Result<T, JokeError>;

/// Errors a joke source can fail with.
#[derive(Debug, Error)]
pub enum JokeError {
    /// The source does not recognize the requested category.
    #[error("unsupported category: {0}")]
    UnsupportedCategory(String),

    /// The source does not recognize the requested language.
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// The source has no jokes to give.
    #[error("joke source unavailable: {0}")]
    SourceUnavailable(String),
}
