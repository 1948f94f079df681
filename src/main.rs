//! Code Breaker - CLI
//!
//! Suggests guesses for the four-digit exact-position code-breaking game using
//! a tiered minimax search.

use anyhow::Result;
use clap::{Parser, Subcommand};
use codebreaker::{
    commands::{SolveConfig, analyze_probe, run_benchmark, run_simple, sample_secrets, solve_secret},
    core::Code,
    output::{print_analysis_result, print_benchmark_result, print_solve_result},
    solver::{DEFAULT_MAX_TURNS, GuessSelector, SelectorConfig},
};
use std::io;

#[derive(Parser)]
#[command(
    name = "codebreaker",
    about = "Four-digit code breaker using global minimax search",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// First guess of every game
    #[arg(long, global = true, default_value = "0123")]
    opening: Code,

    /// Fixed probes for turns 2, 3, ... while many candidates remain
    #[arg(long, global = true, value_delimiter = ',', default_values = ["4567", "8901"])]
    coverage: Vec<Code>,

    /// Candidates at or below this count trigger a search of all 10,000 codes
    #[arg(short, long, global = true, default_value = "500")]
    threshold: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode: you hold the secret and type the scores (default)
    Simple,

    /// Solve a specific secret
    Solve {
        /// The secret to find
        secret: String,

        /// Show tactic, candidate counts and timing per turn
        #[arg(short, long)]
        verbose: bool,

        /// Give up after this many turns
        #[arg(short, long, default_value_t = DEFAULT_MAX_TURNS)]
        max_turns: usize,
    },

    /// Show how a probe splits the remaining candidates
    Analyze {
        /// Probe to analyze
        probe: String,

        /// Earlier feedback as CODE=SCORE, e.g. -f 0123=1 -f 4567=0
        #[arg(short, long)]
        feedback: Vec<String>,
    },

    /// Benchmark solver performance on random secrets
    Benchmark {
        /// Number of random secrets to test
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,

        /// Seed for choosing the secrets
        #[arg(short, long, default_value = "42")]
        seed: u64,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = SelectorConfig::new(cli.opening, cli.coverage, cli.threshold, 2);
    let selector = GuessSelector::new(config);

    // Default to Simple mode if no command given
    let command = cli.command.unwrap_or(Commands::Simple);

    match command {
        Commands::Simple => run_simple(&selector, io::stdin().lock(), io::stdout()),
        Commands::Solve {
            secret,
            verbose,
            max_turns,
        } => {
            let mut config = SolveConfig::new(secret);
            config.max_turns = max_turns;
            let result = solve_secret(&config, &selector)?;
            print_solve_result(&result, verbose);
            Ok(())
        }
        Commands::Analyze { probe, feedback } => {
            let result = analyze_probe(&probe, &feedback)?;
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Benchmark { count, seed } => {
            println!("Running benchmark on {count} random secrets (seed {seed})...");
            let secrets = sample_secrets(count, seed);
            let result = run_benchmark(&selector, &secrets, true)?;
            print_benchmark_result(&result);
            Ok(())
        }
    }
}
