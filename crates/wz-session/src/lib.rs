//! Interactive joke session state machine for Witzbold.
//!
//! `JokeSession` drives the read-act-print loop's state: which category is
//! active, which jokes have been told, and whether the session is still
//! running. It owns no I/O — the CLI reads lines and prints, the session
//! decides. The joke source is injected through the
//! [`JokeSource`](wz_jokes::JokeSource) trait so tests can script it.

pub mod command;
pub mod config;
pub mod error;
pub mod session;

pub use command::Command;
pub use config::SessionConfig;
pub use error::{SessionError, SessionResult};
pub use session::{JokeSession, SessionState};
