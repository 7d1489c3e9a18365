use colored::Colorize;

use wz_jokes::corpus::corpus_size;
use wz_jokes::{Category, Language};

pub fn run() -> Result<(), String> {
    println!("{}", "Categories".bold());
    for &cat in Category::ALL {
        let sizes: Vec<String> = Language::ALL
            .iter()
            .map(|&lang| format!("{}: {}", lang.code(), corpus_size(cat, lang)))
            .collect();
        println!("  {}. {:<8} jokes: {}", cat.index(), cat.name(), sizes.join(", "));
    }

    println!("\n{}", "Languages".bold());
    for &lang in Language::ALL {
        println!("  {}  {}", lang.code(), lang.label());
    }

    Ok(())
}
