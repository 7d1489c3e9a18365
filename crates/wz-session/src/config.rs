//! Configuration for a joke session.

use wz_jokes::{Category, Language};

/// Configuration for a session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// RNG seed for the built-in corpus source.
    pub seed: u64,
    /// Category to start in.
    pub category: Category,
    /// Language for the whole session.
    pub language: Language,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            category: Category::default(),
            language: Language::default(),
        }
    }
}

impl SessionConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the starting category.
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    /// Set the session language.
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }
}
