//! The built-in joke corpus.
//!
//! Embedded joke tables per category and language, and a seeded source
//! that picks from them uniformly. The `all` category draws from the
//! union of the other tables without materializing it.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::category::{Category, Language};
use crate::error::{JokeError, JokeResult};
use crate::joke::Joke;
use crate::source::JokeSource;

/// English jokes in the `neutral` category.
pub const NEUTRAL_EN: &[&str] = &[
    "Why do programmers confuse Halloween and Christmas? Because Oct 31 == Dec 25.",
    "There are only 10 kinds of people in this world: those who know binary and those who don't.",
    "A SQL query goes into a bar, walks up to two tables and asks: 'Can I join you?'",
    "How many programmers does it take to change a light bulb? None, that's a hardware problem.",
    "A programmer is sent to the shop: 'Get a loaf of bread. If they have eggs, get a dozen.' The programmer returns with twelve loaves of bread.",
    "!false — it's funny because it's true.",
    "Why did the developer quit? Because they didn't get arrays.",
    "Knock knock. Who's there? ... ... ... Java.",
    "What's the object-oriented way to become wealthy? Inheritance.",
    "To understand what recursion is, you must first understand recursion.",
    "There are two hard things in computer science: cache invalidation, naming things, and off-by-one errors.",
    "99 little bugs in the code. 99 little bugs. Take one down, patch it around. 127 little bugs in the code.",
    "I would tell you a UDP joke, but you might not get it.",
    "Debugging: being the detective in a crime movie where you are also the murderer.",
    "The best thing about a Boolean is that even if you are wrong, you are only off by a bit.",
    "Real programmers count from 0.",
];

/// English jokes in the `chuck` category.
pub const CHUCK_EN: &[&str] = &[
    "Chuck Norris writes code that optimizes itself.",
    "Chuck Norris can't test for equality because he has no equal.",
    "All arrays Chuck Norris declares are of infinite size, because Chuck Norris knows no bounds.",
    "Chuck Norris doesn't debug. He stares the code down until it confesses.",
    "Chuck Norris can compile syntax errors.",
    "Chuck Norris's keyboard has no Ctrl key. Chuck Norris is always in control.",
    "When Chuck Norris throws exceptions, it's across the room.",
    "Chuck Norris can divide by zero.",
    "Chuck Norris doesn't use web standards. The web conforms to him.",
    "Chuck Norris's code doesn't follow conventions. It sets them.",
];

/// German jokes in the `neutral` category.
pub const NEUTRAL_DE: &[&str] = &[
    "Warum verwechseln Programmierer Halloween und Weihnachten? Weil Oct 31 == Dec 25.",
    "Es gibt nur 10 Arten von Menschen: die, die Binärcode verstehen, und die, die es nicht tun.",
    "Treffen sich zwei Pointer. Sagt der eine: 'Na, worauf zeigst du denn heute?'",
    "Ein SQL-Statement betritt eine Bar, geht zu zwei Tabellen und fragt: 'Darf ich mich zu euch joinen?'",
    "Wie viele Programmierer braucht man, um eine Glühbirne zu wechseln? Keinen, das ist ein Hardware-Problem.",
    "Was ist die objektorientierte Art, reich zu werden? Vererbung.",
];

/// German jokes in the `chuck` category.
pub const CHUCK_DE: &[&str] = &[
    "Chuck Norris kann durch null teilen.",
    "Chuck Norris testet nicht auf Gleichheit, denn Chuck Norris hat nicht seinesgleichen.",
    "Chuck Norris debuggt nicht. Der Code gesteht von selbst.",
    "Chuck Norris' Code kompiliert schon aus Angst fehlerfrei.",
];

/// Look up the embedded tables for a category/language pair.
///
/// Returns one slice per underlying table; `all` returns both tables of
/// the language.
fn tables_for(category: Category, language: Language) -> Vec<&'static [&'static str]> {
    match (category, language) {
        (Category::Neutral, Language::En) => vec![NEUTRAL_EN],
        (Category::Chuck, Language::En) => vec![CHUCK_EN],
        (Category::All, Language::En) => vec![NEUTRAL_EN, CHUCK_EN],
        (Category::Neutral, Language::De) => vec![NEUTRAL_DE],
        (Category::Chuck, Language::De) => vec![CHUCK_DE],
        (Category::All, Language::De) => vec![NEUTRAL_DE, CHUCK_DE],
    }
}

/// Number of embedded jokes for a category/language pair.
pub fn corpus_size(category: Category, language: Language) -> usize {
    tables_for(category, language).iter().map(|t| t.len()).sum()
}

/// A joke source backed by the embedded tables.
///
/// Picks are uniform over the pair's jokes and deterministic for a fixed
/// seed.
pub struct CorpusSource {
    rng: StdRng,
}

impl CorpusSource {
    /// Create a corpus source with the given RNG seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl JokeSource for CorpusSource {
    fn fetch(&mut self, category: Category, language: Language) -> JokeResult<Joke> {
        let tables = tables_for(category, language);
        let total: usize = tables.iter().map(|t| t.len()).sum();
        if total == 0 {
            return Err(JokeError::SourceUnavailable(format!(
                "no jokes for category '{category}' in language '{language}'"
            )));
        }

        let mut index = self.rng.random_range(0..total);
        for table in tables {
            if index < table.len() {
                return Ok(Joke::new(table[index], category, language));
            }
            index -= table.len();
        }
        unreachable!("index {index} within total {total}")
    }
}
