//! The joke value type.

use serde::{Deserialize, Serialize};

use crate::category::{Category, Language};

/// A single joke, tagged with where it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Joke {
    /// The joke text. Non-empty for any joke a conforming source produces.
    pub text: String,
    /// The category the joke was fetched from.
    pub category: Category,
    /// The language of the text.
    pub language: Language,
}

impl Joke {
    /// Create a joke.
    pub fn new(text: impl Into<String>, category: Category, language: Language) -> Self {
        Self {
            text: text.into(),
            category,
            language,
        }
    }
}

impl std::fmt::Display for Joke {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_the_text() {
        let joke = Joke::new("Real programmers count from 0.", Category::Neutral, Language::En);
        assert_eq!(joke.to_string(), "Real programmers count from 0.");
    }

    #[test]
    fn serializes_with_lowercase_tags() {
        let joke = Joke::new("x", Category::Chuck, Language::De);
        let json = serde_json::to_string(&joke).unwrap();
        assert!(json.contains("\"category\":\"chuck\""));
        assert!(json.contains("\"language\":\"de\""));

        let back: Joke = serde_json::from_str(&json).unwrap();
        assert_eq!(back, joke);
    }
}
