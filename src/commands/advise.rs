//! Interactive advising mode
//!
//! Text loop for playing along with a real Wordle game: shows both
//! recommendations each turn, reads the guess actually played and the
//! feedback it got, and narrows the candidate set.

use crate::core::{Pattern, Word};
use crate::solver::{Advisor, FeedbackOutcome};
use crate::wordlists::WordPools;
use colored::Colorize;
use std::io::{self, Write as _};

/// Most candidates listed inline after a narrowing turn
const CANDIDATE_PREVIEW: usize = 10;

/// Most candidates printed by the `candidates` command
const CANDIDATE_LISTING: usize = 200;

/// Run the interactive advising loop
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if the
/// initial candidate pool cannot be scored.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_advise(pools: &WordPools) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                Wordle Advisor - Interactive Mode             ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!(
        "Loaded {} answers, {} allowed guesses.\n",
        pools.answers.len(),
        pools.allowed.len()
    );
    println!("Each turn I'll recommend a max-info guess and a most-likely solution.");
    println!("Play a guess in your Wordle, then tell me what happened:\n");
    println!("  - Guess: the word you played (Enter accepts the recommendation)");
    println!("  - Feedback: 5 characters, C/G = green, P/Y = yellow, N/- = gray");
    println!("  - Or type 'win' if you got it right!\n");
    println!("Commands: 'candidates' to list remaining words, 'new' for a new game, 'quit' to exit\n");

    let mut advisor = Advisor::new(pools.clone());

    loop {
        if advisor.candidates().is_empty() {
            println!(
                "\n{}",
                "❌ No candidates remain! Check the feedback for typos.".red()
            );
            println!("Type 'new' to start over, or 'quit' to exit.\n");

            match get_user_input("Command")?.as_str() {
                "new" | "n" => {
                    advisor = Advisor::new(pools.clone());
                    println!("\n🔄 New game started!\n");
                }
                "quit" | "q" | "exit" => {
                    println!("\n👋 Good luck!\n");
                    return Ok(());
                }
                _ => {}
            }
            continue;
        }

        println!("────────────────────────────────────────────────────────────");
        println!(
            "Turn {}: {} candidates remaining",
            advisor.turn(),
            advisor.candidates().len()
        );
        println!("────────────────────────────────────────────────────────────");

        let recommendation = advisor.recommend().map_err(|e| e.to_string())?;
        let (info_word, bits) = &recommendation.max_info;
        let (likely_word, _) = &recommendation.most_likely;

        println!(
            "\n📊 Max-info guess:       {} ({bits:.2} bits)",
            info_word.text().to_uppercase().bright_yellow().bold()
        );
        if likely_word != info_word {
            println!(
                "   Most-likely solution: {}",
                likely_word.text().to_uppercase().bright_white()
            );
        }
        println!();

        // Read the guess actually played
        let guess = loop {
            let input =
                get_user_input(&format!("Guess (Enter = {})", info_word.text().to_uppercase()))?
                    .to_lowercase();

            match input.as_str() {
                "" => break Some(info_word.clone()),
                "quit" | "q" | "exit" => {
                    println!("\n👋 Good luck!\n");
                    return Ok(());
                }
                "new" | "n" => {
                    advisor = Advisor::new(pools.clone());
                    println!("\n🔄 New game started!\n");
                    break None;
                }
                "candidates" | "list" => {
                    print_candidates(advisor.candidates());
                }
                text => match Word::new(text) {
                    Ok(word) => break Some(word),
                    Err(e) => println!("{} {e}\n", "❌ Invalid guess!".red()),
                },
            }
        };

        let Some(guess) = guess else { continue };

        // Read the feedback it received
        let pattern = loop {
            let input = get_user_input("Feedback (C/P/N, 'win', or command)")?.to_lowercase();

            match input.as_str() {
                "quit" | "q" | "exit" => {
                    println!("\n👋 Good luck!\n");
                    return Ok(());
                }
                "new" | "n" => {
                    advisor = Advisor::new(pools.clone());
                    println!("\n🔄 New game started!\n");
                    break None;
                }
                "win" | "correct" | "solved" => break Some(Pattern::PERFECT),
                _ => {
                    if let Some(pattern) = Pattern::from_str(&input) {
                        break Some(pattern);
                    }
                    println!("{} Use 5 of C/P/N (or G/Y/-)\n", "❌ Invalid pattern!".red());
                }
            }
        };

        let Some(pattern) = pattern else { continue };

        match advisor.apply_feedback(&guess, pattern) {
            FeedbackOutcome::Solved { turn } => {
                println!(
                    "\n{}",
                    format!(
                        "🎉 Solved in turn {turn} with '{}'!",
                        guess.text().to_uppercase()
                    )
                    .green()
                    .bold()
                );

                match get_user_input("Play again? (yes/no)")?.to_lowercase().as_str() {
                    "yes" | "y" => {
                        advisor = Advisor::new(pools.clone());
                        println!("\n🔄 New game started!\n");
                    }
                    _ => {
                        println!("\n👋 Thanks for playing!\n");
                        return Ok(());
                    }
                }
            }
            FeedbackOutcome::Contradiction => {
                // Loop header reports it and offers a restart
            }
            FeedbackOutcome::Narrowed { remaining } => {
                if remaining <= CANDIDATE_PREVIEW {
                    print_candidates(advisor.candidates());
                }
            }
        }
    }
}

/// Print remaining candidates, capped for sanity on large sets
fn print_candidates(candidates: &[Word]) {
    println!("\nRemaining candidates:");
    for candidate in candidates.iter().take(CANDIDATE_LISTING) {
        println!("  • {}", candidate.text().to_uppercase());
    }
    if candidates.len() > CANDIDATE_LISTING {
        println!("  … and {} more", candidates.len() - CANDIDATE_LISTING);
    }
    println!();
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
