use wz_jokes::{CorpusSource, JokeSource};

pub fn run(category: &str, language: &str, seed: Option<u64>, json: bool) -> Result<(), String> {
    let category = super::parse_category(category)?;
    let language = super::parse_language(language)?;
    let seed = seed.unwrap_or_else(rand::random);

    let mut source = CorpusSource::new(seed);
    let joke = source.fetch(category, language).map_err(|e| e.to_string())?;

    if json {
        let rendered = serde_json::to_string_pretty(&joke).map_err(|e| e.to_string())?;
        println!("{rendered}");
    } else {
        println!("{joke}");
    }

    Ok(())
}
