//! Joke source for Witzbold: categories, languages, and the built-in corpus.
//!
//! The [`JokeSource`] trait is the seam between the session layer and joke
//! generation: the session asks for a joke in a category, a source answers
//! with text or a [`JokeError`]. The built-in [`CorpusSource`] draws from
//! embedded joke tables; tests substitute scripted sources.

pub mod category;
pub mod corpus;
pub mod error;
pub mod joke;
pub mod source;

pub use category::{Category, Language};
pub use corpus::CorpusSource;
pub use error::{JokeError, JokeResult};
pub use joke::Joke;
pub use source::JokeSource;
