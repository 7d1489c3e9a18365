//! The joke session state machine.
//!
//! Three states: `Starting` (nothing shown yet), `AwaitingCommand` (the
//! resting state between prompts), `Terminated`. Fetching and changing
//! category are synchronous self-loops on `AwaitingCommand`, not states of
//! their own. A failed fetch never mutates the session: category, history,
//! and state all stay as they were.

use wz_jokes::{Category, Joke, JokeSource, Language};

use crate::config::SessionConfig;
use crate::error::{SessionError, SessionResult};

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Created, first joke not yet fetched.
    Starting,
    /// Resting state: the menu is up, waiting for a command.
    AwaitingCommand,
    /// Quit processed; no further commands are accepted.
    Terminated,
}

/// An interactive joke session.
pub struct JokeSession {
    source: Box<dyn JokeSource>,
    category: Category,
    language: Language,
    state: SessionState,
    history: Vec<Joke>,
}

impl JokeSession {
    /// Create a session in the `Starting` state.
    ///
    /// The seed in `config` is for constructing the source and is not used
    /// here; the session takes whatever source it is given.
    pub fn new(source: Box<dyn JokeSource>, config: &SessionConfig) -> Self {
        Self {
            source,
            category: config.category,
            language: config.language,
            state: SessionState::Starting,
            history: Vec::new(),
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Current category.
    pub fn category(&self) -> Category {
        self.category
    }

    /// Session language.
    pub fn language(&self) -> Language {
        self.language
    }

    /// The most recently told joke, if any.
    pub fn last_joke(&self) -> Option<&Joke> {
        self.history.last()
    }

    /// Every joke told this session, oldest first.
    pub fn history(&self) -> &[Joke] {
        &self.history
    }

    /// Number of jokes told so far.
    pub fn jokes_told(&self) -> usize {
        self.history.len()
    }

    /// Fetch and record the opening joke: `Starting` → `AwaitingCommand`.
    ///
    /// On a source error the session stays in `Starting`; the caller
    /// decides whether that is fatal (the CLI treats it so).
    pub fn start(&mut self) -> SessionResult<&Joke> {
        if self.state != SessionState::Starting {
            return Err(SessionError::AlreadyStarted);
        }
        let joke = self.source.fetch(self.category, self.language)?;
        self.history.push(joke);
        self.state = SessionState::AwaitingCommand;
        Ok(self.history.last().unwrap())
    }

    /// Fetch and record another joke in the current category.
    ///
    /// Self-loop on `AwaitingCommand`. On a source error nothing changes.
    pub fn next_joke(&mut self) -> SessionResult<&Joke> {
        if self.state != SessionState::AwaitingCommand {
            return Err(SessionError::NotAcceptingCommands);
        }
        let joke = self.source.fetch(self.category, self.language)?;
        self.history.push(joke);
        Ok(self.history.last().unwrap())
    }

    /// Change the current category from a selection line.
    ///
    /// Accepts whatever [`Category::parse`] accepts (name or menu index).
    /// A rejected selection leaves the category untouched. Never fetches.
    pub fn change_category(&mut self, input: &str) -> SessionResult<Category> {
        if self.state != SessionState::AwaitingCommand {
            return Err(SessionError::NotAcceptingCommands);
        }
        match Category::parse(input) {
            Some(category) => {
                self.category = category;
                Ok(category)
            }
            None => Err(SessionError::InvalidCategory(input.trim().to_string())),
        }
    }

    /// End the session: any state → `Terminated`. Idempotent.
    pub fn quit(&mut self) -> &'static str {
        self.state = SessionState::Terminated;
        "Goodbye!"
    }
}
