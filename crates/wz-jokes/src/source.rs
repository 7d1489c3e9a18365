//! The joke source trait.

use crate::category::{Category, Language};
use crate::error::JokeResult;
use crate::joke::Joke;

/// Something that can produce jokes on demand.
///
/// This is the seam between the session layer and joke generation: the
/// built-in [`CorpusSource`](crate::CorpusSource) implements it over the
/// embedded tables, and tests implement it with scripted responses.
///
/// Contract: for every category/language pair a source supports, `fetch`
/// returns a joke with non-empty text. The call is synchronous and
/// blocking; there is no timeout. Failures are reported as [`JokeError`]
/// values, never panics.
///
/// [`JokeError`]: crate::JokeError
pub trait JokeSource {
    /// Fetch one joke in the given category and language.
    fn fetch(&mut self, category: Category, language: Language) -> JokeResult<Joke>;

    /// Fetch one joke using the default category and language.
    fn fetch_default(&mut self) -> JokeResult<Joke> {
        self.fetch(Category::default(), Language::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct OneLiner;

    impl JokeSource for OneLiner {
        fn fetch(&mut self, category: Category, language: Language) -> JokeResult<Joke> {
            Ok(Joke::new("ha", category, language))
        }
    }

    #[test]
    fn fetch_default_uses_the_defaults() {
        let joke = OneLiner.fetch_default().unwrap();
        assert_eq!(joke.category, Category::Neutral);
        assert_eq!(joke.language, Language::En);
    }
}
