//! Closed category and language enumerations.
//!
//! Both sets are closed on purpose: user input is parsed into a variant or
//! rejected, so arbitrary text never reaches a joke source.

use serde::{Deserialize, Serialize};

/// A joke category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// General programming humour.
    #[default]
    Neutral,
    /// Chuck Norris jokes.
    Chuck,
    /// Everything at once.
    All,
}

impl Category {
    /// All categories in menu order.
    pub const ALL: &'static [Category] = &[Category::Neutral, Category::Chuck, Category::All];

    /// Parse a category from user input: a name or a menu index.
    ///
    /// Accepts `"neutral"`/`"0"`, `"chuck"`/`"1"`, `"all"`/`"2"`,
    /// case-insensitively and ignoring surrounding whitespace.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "neutral" | "0" => Some(Self::Neutral),
            "chuck" | "1" => Some(Self::Chuck),
            "all" | "2" => Some(Self::All),
            _ => None,
        }
    }

    /// Menu index for the category selection prompt.
    pub fn index(self) -> usize {
        match self {
            Self::Neutral => 0,
            Self::Chuck => 1,
            Self::All => 2,
        }
    }

    /// Lowercase name, as accepted by [`Category::parse`].
    pub fn name(self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::Chuck => "chuck",
            Self::All => "all",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A joke language.
///
/// Closed to the languages the embedded corpus covers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English.
    #[default]
    En,
    /// German.
    De,
}

impl Language {
    /// All supported languages.
    pub const ALL: &'static [Language] = &[Language::En, Language::De];

    /// Parse a language code, case-insensitively.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "en" => Some(Self::En),
            "de" => Some(Self::De),
            _ => None,
        }
    }

    /// ISO 639-1 code, as accepted by [`Language::parse`].
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::De => "de",
        }
    }

    /// English name of the language, for listings.
    pub fn label(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::De => "German",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
