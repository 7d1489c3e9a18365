use std::io::{self, BufRead, Write};

use colored::Colorize;

use wz_jokes::{Category, CorpusSource, Joke};
use wz_session::{Command, JokeSession, SessionConfig};

pub fn run(seed: u64, category: &str, language: &str) -> Result<(), String> {
    let category = super::parse_category(category)?;
    let language = super::parse_language(language)?;
    let config = SessionConfig::default()
        .with_seed(seed)
        .with_category(category)
        .with_language(language);

    let source = CorpusSource::new(config.seed);
    let mut session = JokeSession::new(Box::new(source), &config);

    println!("  {} Witzbold Joke Session", "Starting".bold());
    println!(
        "  Category: {} | Language: {} | Seed: {seed}",
        category.name().to_uppercase(),
        language.code()
    );

    // Startup fetch is the one fatal path: no first joke, no session.
    let first = session
        .start()
        .map_err(|e| format!("failed to start session: {e}"))?;
    print_joke(first);

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        println!(
            "Menu | Category: {} | Jokes told: {}",
            session.category().name().to_uppercase(),
            session.jokes_told()
        );
        println!(
            "[{}] Next joke  [{}] Change category  [{}] Quit",
            Command::Next.code(),
            Command::ChangeCategory.code(),
            Command::Quit.code()
        );
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        match Command::parse(&line) {
            None => {
                let hint = format!(
                    "Unknown command. Use '{}', '{}', or '{}'.",
                    Command::Next.code(),
                    Command::ChangeCategory.code(),
                    Command::Quit.code()
                );
                println!("{}\n", hint.yellow());
            }
            Some(Command::Next) => match session.next_joke() {
                Ok(joke) => print_joke(joke),
                Err(e) => println!("{}\n", e.to_string().yellow()),
            },
            Some(Command::ChangeCategory) => {
                if !select_category(&mut session, &mut reader, &mut line)? {
                    break; // EOF at the sub-prompt
                }
            }
            Some(Command::Quit) => {
                println!("{}", session.quit());
                break;
            }
        }
    }

    println!("\nSession ended. Here are all the jokes you received:");
    for (i, joke) in session.history().iter().enumerate() {
        println!(
            "{}. [{}] {}",
            i + 1,
            joke.category.name().to_uppercase(),
            joke.text
        );
    }

    Ok(())
}

/// Run the category selection sub-prompt. Returns false on EOF.
fn select_category(
    session: &mut JokeSession,
    reader: &mut impl BufRead,
    line: &mut String,
) -> Result<bool, String> {
    println!("Available categories:");
    for &cat in Category::ALL {
        println!("  {}. {}", cat.index(), cat.name().to_uppercase());
    }
    print!("Select a category (number or name): ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    line.clear();
    match reader.read_line(line) {
        Ok(0) => return Ok(false),
        Err(e) => return Err(e.to_string()),
        _ => {}
    }

    match session.change_category(line) {
        Ok(category) => println!(
            "Category changed to {}\n",
            category.name().to_uppercase().bold()
        ),
        Err(e) => println!("{}\n", e.to_string().yellow()),
    }

    Ok(true)
}

fn print_joke(joke: &Joke) {
    println!("\n{}\n{}\n", joke.text, "=".repeat(60));
}
