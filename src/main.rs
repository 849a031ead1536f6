//! Wordgain - CLI
//!
//! Entropy-driven Wordle solver: interactive assist, single-word solve
//! traces, guess analysis, and full-list simulation.

use anyhow::{Context, Result, ensure};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordgain::{
    commands::{analyze_word, run_assist, run_simulation, solve_word},
    core::Word,
    game::GameConfig,
    output::{print_analysis_report, print_simulation_summary, print_solve_report},
    words::load_from_file,
};

#[derive(Parser)]
#[command(
    name = "wordgain",
    about = "Entropy-driven Wordle solver",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// File with the possible answer words, one per line
    #[arg(short, long, global = true, default_value = "possible_words.txt")]
    answers: PathBuf,

    /// File with all allowed guesses (defaults to the answer list)
    #[arg(short = 'g', long, global = true)]
    allowed: Option<PathBuf>,

    /// Force this word as the round-1 guess
    #[arg(short = 'f', long, global = true)]
    first: Option<String>,

    /// Round limit per game
    #[arg(long, global = true, default_value = "6")]
    max_rounds: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive assist mode (default)
    Assist,

    /// Solve a specific target word and show the path taken
    Solve {
        /// The target word to solve
        word: String,

        /// Show candidate counts and entropy per round
        #[arg(short, long)]
        verbose: bool,
    },

    /// Analyze the entropy of a specific guess
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Simulate the solver against every answer
    Simulate {
        /// Limit number of answers to play
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let answers = load_from_file(&cli.answers)
        .with_context(|| format!("failed to read answer list {}", cli.answers.display()))?;
    ensure!(!answers.is_empty(), "answer list is empty");

    let allowed = match &cli.allowed {
        Some(path) => load_from_file(path)
            .with_context(|| format!("failed to read allowed list {}", path.display()))?,
        None => answers.clone(),
    };
    ensure!(!allowed.is_empty(), "allowed list is empty");

    let opening_guess = match &cli.first {
        Some(text) => {
            let word = Word::new(text.as_str())?;
            ensure!(
                allowed.contains(&word),
                "first word '{}' is not in the allowed list",
                word.text()
            );
            Some(word)
        }
        None => None,
    };

    let config = GameConfig {
        max_rounds: cli.max_rounds,
        opening_guess,
        ..GameConfig::default()
    };
    config.validate()?;

    match cli.command.unwrap_or(Commands::Assist) {
        Commands::Assist => run_assist(config, &allowed, &answers).map_err(|e| anyhow::anyhow!(e)),
        Commands::Solve { word, verbose } => {
            let report = solve_word(&config, &allowed, &answers, &word)?;
            print_solve_report(&report, verbose);
            Ok(())
        }
        Commands::Analyze { word } => {
            let report = analyze_word(&word, &allowed, &answers)?;
            print_analysis_report(&report);
            Ok(())
        }
        Commands::Simulate { limit } => {
            let (summary, elapsed) = run_simulation(&config, &allowed, &answers, limit)?;
            print_simulation_summary(&summary, elapsed);
            Ok(())
        }
    }
}
