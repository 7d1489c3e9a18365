//! CLI frontend for the Witzbold joke bot.

mod commands;

use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "wz",
    about = "Witzbold — a joke-telling bot for your terminal",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive joke session
    Play {
        /// RNG seed for reproducible joke picks
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Starting category: neutral, chuck, all
        #[arg(short, long, default_value = "neutral")]
        category: String,

        /// Joke language: en, de
        #[arg(short, long, default_value = "en")]
        language: String,
    },

    /// Print a single joke and exit
    Tell {
        /// Category: neutral, chuck, all
        #[arg(short, long, default_value = "neutral")]
        category: String,

        /// Joke language: en, de
        #[arg(short, long, default_value = "en")]
        language: String,

        /// RNG seed (default: random, so repeated calls vary)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Print the joke as JSON instead of plain text
        #[arg(long)]
        json: bool,
    },

    /// List the available categories and languages
    Categories,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play {
            seed,
            category,
            language,
        } => commands::play::run(seed, &category, &language),
        Commands::Tell {
            category,
            language,
            seed,
            json,
        } => commands::tell::run(&category, &language, seed, json),
        Commands::Categories => commands::categories::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
