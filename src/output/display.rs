//! Display functions for command results

use super::formatters::entropy_bar;
use crate::commands::{AnalysisResult, RankedGuess, SolveResult};
use colored::Colorize;

/// Print the result of a self-play run
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        let turn = i + 1;
        println!(
            "\nTurn {}: {} {}",
            turn,
            step.word.to_uppercase(),
            step.pattern.to_emoji()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            println!("  Entropy:    {:.3} bits", step.entropy);

            if step.candidates_after > 0 {
                let actual_reduction =
                    (step.candidates_before as f64 / step.candidates_after as f64).log2();
                println!(
                    "  Info gained: {:.3} bits ({:.1}x reduction)",
                    actual_reduction,
                    step.candidates_before as f64 / step.candidates_after as f64
                );
            }
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.steps.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.steps.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "GUESS ANALYSIS:".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let bar = entropy_bar(result.entropy, 30);

    println!("\n📊 Against {} possible answers:", result.total_candidates);
    println!(
        "   Entropy:     [{}] {}",
        bar.green(),
        format!("{:.3} bits", result.entropy).bright_yellow()
    );
    println!(
        "   Info gain:   {:.1}x reduction",
        result.expected_reduction
    );
    println!(
        "   Expected:    {:.1} candidates remain",
        result.expected_remaining
    );
    println!("   Likelihood:  {:.1}", result.likelihood);
    println!(
        "   Possible answer: {}",
        if result.is_possible_answer {
            "yes".green()
        } else {
            "no".yellow()
        }
    );
}

/// Print the opener ranking table
pub fn print_rank_results(ranked: &[RankedGuess]) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "TOP OPENERS BY ENTROPY".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!();

    for (i, entry) in ranked.iter().enumerate() {
        let marker = if entry.is_possible_answer { "•" } else { " " };
        println!(
            "  {:>2}. {} {} {:.3} bits",
            i + 1,
            entry.word.to_uppercase().bright_white().bold(),
            marker,
            entry.entropy
        );
    }

    println!("\n  {} marks a possible answer", "•".bright_white());
}
