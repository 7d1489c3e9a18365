pub mod categories;
pub mod play;
pub mod tell;

use wz_jokes::{Category, Language};

/// Parse a `--category` argument, naming the accepted values on failure.
fn parse_category(input: &str) -> Result<Category, String> {
    Category::parse(input)
        .ok_or_else(|| format!("unknown category '{input}' (expected: neutral, chuck, all)"))
}

/// Parse a `--language` argument, naming the accepted values on failure.
fn parse_language(input: &str) -> Result<Language, String> {
    Language::parse(input).ok_or_else(|| format!("unknown language '{input}' (expected: en, de)"))
}
