//! Wordle Advisor - CLI
//!
//! Recommends Wordle guesses by expected information gain and positional
//! letter frequencies, tracking the candidate set as feedback comes in.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordle_advisor::{
    commands::{SolveConfig, analyze_word, rank_openers, run_advise, solve_target},
    output::{print_analysis_result, print_rank_results, print_solve_result},
    wordlists::{WordPools, WordSource},
};

#[derive(Parser)]
#[command(
    name = "wordle_advisor",
    about = "Wordle decision support using Shannon entropy and positional letter frequencies",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'auto' (probe ./words.txt, ./answers.txt, ./allowed.txt),
    /// 'fallback' (built-in list), or path to a combined word file
    #[arg(short = 'w', long, global = true, default_value = "auto")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive advising mode (default)
    Advise,

    /// Analyze the entropy and likelihood of a specific word
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Rank the best opening guesses by entropy
    Rank {
        /// Number of openers to show
        #[arg(short = 'n', long, default_value = "10")]
        count: usize,
    },

    /// Play the advisor against a known target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show verbose output with candidate counts
        #[arg(short, long)]
        verbose: bool,
    },
}

/// Turn the -w flag into a word source
fn word_source(wordlist_mode: &str) -> WordSource {
    match wordlist_mode {
        "auto" => WordSource::detect(std::path::Path::new(".")),
        "fallback" => WordSource::Fallback,
        path => WordSource::Combined(PathBuf::from(path)),
    }
}

/// Resolve the configured source into loaded pools
fn load_pools(wordlist_mode: &str) -> Result<WordPools> {
    word_source(wordlist_mode)
        .resolve()
        .with_context(|| format!("failed to load word lists ({wordlist_mode})"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let pools = load_pools(&cli.wordlist)?;

    // Default to interactive mode if no command given
    let command = cli.command.unwrap_or(Commands::Advise);

    match command {
        Commands::Advise => run_advise(&pools).map_err(|e| anyhow::anyhow!(e)),
        Commands::Analyze { word } => {
            let result = analyze_word(&word, &pools).map_err(|e| anyhow::anyhow!(e))?;
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Rank { count } => {
            let ranked = rank_openers(&pools, count);
            print_rank_results(&ranked);
            Ok(())
        }
        Commands::Solve { word, verbose } => {
            let config = SolveConfig::new(word);
            let result = solve_target(config, &pools).map_err(|e| anyhow::anyhow!(e))?;
            print_solve_result(&result, verbose);
            Ok(())
        }
    }
}
