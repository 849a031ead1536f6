//! Interactive assist mode
//!
//! Text loop for solving a real game in progress: suggests the
//! entropy-maximizing guess each round, then reads the guess actually
//! played and the feedback it received. Feedback uses one value per
//! letter: 0 (absent), 1 (present), 2 (correct), with g/y/- accepted too.

use crate::core::{Pattern, Word};
use crate::error::SolverError;
use crate::game::{GameConfig, GameState, Session};
use colored::Colorize;
use std::io::{self, Write as _};

/// Run the interactive assist loop on stdin.
///
/// # Errors
/// Returns an error on I/O failure or an unrecoverable solver error.
pub fn run_assist(
    config: GameConfig,
    allowed: &[Word],
    answers: &[Word],
) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Wordgain - Interactive Assist                ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Each round I suggest the guess with the highest expected");
    println!("information gain. Play a guess, then enter its feedback:\n");
    println!("  - 2 / g / 🟩 for a letter in the correct position");
    println!("  - 1 / y / 🟨 for a letter in the word, wrong position");
    println!("  - 0 / - / ⬜ for a letter not in the word");
    println!("  - or 'win' if the guess was the answer\n");
    println!("Commands: 'quit' to exit, 'new' to start over\n");

    let mut session = Session::new(config, allowed, answers).map_err(|e| e.to_string())?;
    let mut history: Vec<(Word, Pattern)> = Vec::new();

    loop {
        let remaining = session.candidates().len();
        let (suggestion, entropy) = session.suggest().map_err(|e| e.to_string())?;

        println!("────────────────────────────────────────────────────────────");
        println!(
            "Round {}: {} candidate{} remaining",
            session.round(),
            remaining,
            if remaining == 1 { "" } else { "s" }
        );
        println!(
            "📊 Suggested guess: {}  ({entropy:.3} bits, ~{:.1}x reduction)",
            suggestion.text().to_uppercase().bright_yellow().bold(),
            entropy.exp2()
        );
        if remaining <= 10 {
            println!("Remaining candidates:");
            for candidate in session.candidates() {
                println!("  • {}", candidate.text().to_uppercase());
            }
        }

        let guess = match read_guess(&suggestion, allowed)? {
            Input::Value(word) => word,
            Input::Quit => {
                println!("\n👋 Good luck!\n");
                return Ok(());
            }
            Input::New => {
                session.reset();
                history.clear();
                println!("\n🔄 New game started\n");
                continue;
            }
        };

        let pattern = match read_feedback()? {
            Input::Value(pattern) => pattern,
            Input::Quit => {
                println!("\n👋 Good luck!\n");
                return Ok(());
            }
            Input::New => {
                session.reset();
                history.clear();
                println!("\n🔄 New game started\n");
                continue;
            }
        };

        match session.advance(&guess, pattern) {
            Ok(GameState::Solved { rounds }) => {
                history.push((guess, pattern));
                println!(
                    "\n{}",
                    format!("🎉 Solved in {rounds} round{}!", if rounds == 1 { "" } else { "s" })
                        .bright_green()
                        .bold()
                );
                for (i, (word, pat)) in history.iter().enumerate() {
                    println!(
                        "  {}. {} {}",
                        i + 1,
                        word.text().to_uppercase(),
                        pat.to_emoji()
                    );
                }
                println!();
                session.reset();
                history.clear();
            }
            Ok(GameState::Exhausted) => {
                println!(
                    "\n{}",
                    "❌ Out of rounds without an exact match.".red().bold()
                );
                session.reset();
                history.clear();
            }
            Ok(GameState::InProgress { .. }) => {
                history.push((guess, pattern));
            }
            Err(SolverError::InconsistentFeedback { guess }) => {
                println!(
                    "\n{}",
                    format!(
                        "⚠️  No candidate matches that feedback for '{guess}'. \
                         Double-check an entry and try again."
                    )
                    .yellow()
                );
            }
            Err(other) => return Err(other.to_string()),
        }
    }
}

enum Input<T> {
    Value(T),
    Quit,
    New,
}

fn read_guess(suggestion: &Word, allowed: &[Word]) -> Result<Input<Word>, String> {
    loop {
        let input = prompt(&format!(
            "Guess played (enter = {})",
            suggestion.text().to_uppercase()
        ))?;
        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => return Ok(Input::Quit),
            "new" | "n" => return Ok(Input::New),
            "" => return Ok(Input::Value(suggestion.clone())),
            text => match Word::new(text) {
                Ok(word) if allowed.contains(&word) => return Ok(Input::Value(word)),
                Ok(word) => {
                    println!("❌ '{}' is not in the allowed list", word.text());
                }
                Err(err) => println!("❌ {err}"),
            },
        }
    }
}

fn read_feedback() -> Result<Input<Pattern>, String> {
    loop {
        let input = prompt("Feedback (e.g. 01202, or 'win')")?;
        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => return Ok(Input::Quit),
            "new" | "n" => return Ok(Input::New),
            "win" | "correct" | "solved" => return Ok(Input::Value(Pattern::PERFECT)),
            text => match Pattern::parse(text) {
                Ok(pattern) => return Ok(Input::Value(pattern)),
                Err(err) => println!("❌ {err}"),
            },
        }
    }
}

fn prompt(label: &str) -> Result<String, String> {
    print!("{label}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;
    Ok(input.trim().to_string())
}
