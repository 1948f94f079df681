//! Benchmark command
//!
//! Plays many secrets and collects turn statistics.

use crate::core::{CODE_SPACE, Code};
use crate::solver::{DEFAULT_MAX_TURNS, GuessSelector, Outcome, SecretOracle, Session};
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::index::sample;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_games: usize,
    pub total_turns: usize,
    pub average_turns: f64,
    pub min_turns: usize,
    pub max_turns: usize,
    pub distribution: BTreeMap<usize, usize>,
    pub hardest: Option<(Code, usize)>,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Draw `count` distinct secrets, reproducibly for a given seed
#[must_use]
pub fn sample_secrets(count: usize, seed: u64) -> Vec<Code> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut secrets: Vec<Code> = sample(&mut rng, CODE_SPACE, count.min(CODE_SPACE))
        .into_iter()
        .filter_map(|index| Code::from_index(index).ok())
        .collect();
    secrets.sort_unstable();
    secrets
}

/// Run the selector against every secret in `secrets`
///
/// # Errors
///
/// Returns an error if a game fails to finish, which would mean the selector
/// contradicted an honest oracle or looped past the turn cap.
pub fn run_benchmark(
    selector: &GuessSelector,
    secrets: &[Code],
    show_progress: bool,
) -> Result<BenchmarkResult> {
    let bar = if show_progress {
        let bar = ProgressBar::new(secrets.len() as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
                .progress_chars("█▓▒░"),
        );
        bar
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let mut total_turns = 0;
    let mut min_turns = usize::MAX;
    let mut max_turns = 0;
    let mut hardest: Option<(Code, usize)> = None;
    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();

    for &secret in secrets {
        let mut session = Session::new(selector.clone());
        let mut oracle = SecretOracle::new(secret);
        let outcome = session.play(&mut oracle, DEFAULT_MAX_TURNS)?;
        anyhow::ensure!(
            outcome == Outcome::Success,
            "Game for {secret} ended in {outcome}"
        );

        let turns = session.history().len();
        total_turns += turns;
        min_turns = min_turns.min(turns);
        max_turns = max_turns.max(turns);
        *distribution.entry(turns).or_insert(0) += 1;
        if hardest.is_none_or(|(_, worst)| turns > worst) {
            hardest = Some((secret, turns));
        }

        bar.set_message(format!("{secret}: {turns} turns"));
        bar.inc(1);
    }
    bar.finish_and_clear();

    let duration = start.elapsed();
    let total_games = secrets.len();

    Ok(BenchmarkResult {
        total_games,
        total_turns,
        average_turns: if total_games == 0 {
            0.0
        } else {
            total_turns as f64 / total_games as f64
        },
        min_turns: if total_games == 0 { 0 } else { min_turns },
        max_turns,
        distribution,
        hardest,
        duration,
        games_per_second: total_games as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}
