//! Terminal output for command results

use crate::commands::{AnalysisReport, SolveReport};
use crate::game::SimulationSummary;
use colored::Colorize;
use std::time::Duration;

/// Print the path taken to solve one target word
pub fn print_solve_report(report: &SolveReport, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        report.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in report.steps.iter().enumerate() {
        println!(
            "\nRound {}: {} {}",
            i + 1,
            step.word.to_uppercase(),
            step.pattern.to_emoji()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            if let Some(entropy) = step.entropy {
                println!("  Entropy:    {entropy:.3} bits");
            }
            if step.candidates_after > 0 {
                let gained =
                    (step.candidates_before as f64 / step.candidates_after as f64).log2();
                println!("  Info gained: {gained:.3} bits");
            }
        }
    }

    println!();
    if report.solved {
        println!(
            "{}",
            format!("✅ Solved in {} rounds", report.steps.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Not solved within {} rounds", report.steps.len())
                .red()
                .bold()
        );
    }
}

/// Print the entropy analysis of a single guess
pub fn print_analysis_report(report: &AnalysisReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ENTROPY ANALYSIS:".bright_cyan().bold(),
        report.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 Against {} possible answers:", report.total_candidates);
    println!(
        "   Entropy:     [{}] {}",
        entropy_bar(report.entropy, 30).green(),
        format!("{:.3} bits", report.entropy).bright_yellow()
    );
    println!("   Info gain:   {:.1}x reduction", report.expected_reduction);
    println!(
        "   Expected:    {:.1} candidates remain",
        report.expected_remaining
    );
}

/// Print the aggregate results of a simulation run
pub fn print_simulation_summary(summary: &SimulationSummary, elapsed: Duration) {
    let total = summary.records.len();

    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Overall:".bright_cyan().bold());
    println!("   Games played:    {total}");
    println!(
        "   Solved:          {} {}",
        summary.solved,
        format!("({:.1}%)", percent(summary.solved, total)).green()
    );
    if summary.failed > 0 {
        println!(
            "   Unsolved:        {} {}",
            summary.failed,
            format!("({:.1}%)", percent(summary.failed, total)).red()
        );
    }
    println!(
        "   Average rounds:  {}",
        format!("{:.3}", summary.average_rounds).bright_yellow().bold()
    );
    println!("   Worst rounds:    {}", summary.worst_rounds);
    println!("   Total time:      {:.2}s", elapsed.as_secs_f64());
    if total > 0 {
        println!(
            "   Time per game:   {:.1}ms",
            elapsed.as_millis() as f64 / total as f64
        );
    }

    println!("\n📈 {}", "Round distribution:".bright_cyan().bold());
    let max_count = summary.distribution.values().copied().max().unwrap_or(1);
    for rounds in 1..=6 {
        let count = summary.distribution.get(&rounds).copied().unwrap_or(0);
        if summary.solved == 0 {
            continue;
        }
        let share = percent(count, summary.solved);
        let bar_len = if max_count > 0 {
            (count * 40 / max_count).max(usize::from(count > 0))
        } else {
            0
        };
        let bar = format!(
            "{}{}",
            "█".repeat(bar_len).green(),
            "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
        );
        println!("   {rounds} rounds: {bar} {count:4} ({share:5.1}%)");
    }
}

fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

/// Fixed-width bar for an entropy value (assumes values up to ~8 bits)
fn entropy_bar(entropy: f64, width: usize) -> String {
    let filled = ((entropy / 8.0) * width as f64).round() as usize;
    let filled = filled.min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
