//! Error types for the session state machine.

use thiserror::Error;
use wz_jokes::JokeError;

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors that can occur while driving a joke session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// `start` was called on a session that already left `Starting`.
    #[error("session already started")]
    AlreadyStarted,

    /// A command was issued while the session was not awaiting one.
    #[error("session is not accepting commands")]
    NotAcceptingCommands,

    /// Category selection that maps to no known category.
    #[error("invalid category: {0}")]
    InvalidCategory(String),

    /// The joke source failed.
    #[error("could not fetch a joke: {0}")]
    Joke(#[from] JokeError),
}
