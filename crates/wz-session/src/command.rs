//! The three-command menu vocabulary.

/// A user-issued menu command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Fetch the next joke in the current category.
    Next,
    /// Select a different category.
    ChangeCategory,
    /// End the session.
    Quit,
}

impl Command {
    /// Parse a line of user input.
    ///
    /// The first non-whitespace character is matched case-insensitively
    /// against `n`, `c`, `q`; anything else is no command at all.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim_start().chars().next()?.to_ascii_lowercase() {
            'n' => Some(Self::Next),
            'c' => Some(Self::ChangeCategory),
            'q' => Some(Self::Quit),
            _ => None,
        }
    }

    /// The single-letter code shown in the menu.
    pub fn code(self) -> char {
        match self {
            Self::Next => 'n',
            Self::ChangeCategory => 'c',
            Self::Quit => 'q',
        }
    }
}
