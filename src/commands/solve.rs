//! Secret solving command
//!
//! Plays a full game against a known secret and returns the solution path.

use crate::core::{Code, Score};
use crate::solver::{
    DEFAULT_MAX_TURNS, GuessSelector, Oracle, Outcome, Progress, SecretOracle, Session, Silent,
    Tier,
};
use anyhow::{Context, Result};
use std::time::{Duration, Instant};

/// Configuration for solving a secret
pub struct SolveConfig {
    pub secret: String,
    pub max_turns: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(secret: String) -> Self {
        Self {
            secret,
            max_turns: DEFAULT_MAX_TURNS,
        }
    }
}

/// Result of solving a secret
pub struct SolveResult {
    pub success: bool,
    pub steps: Vec<SolveStep>,
    pub secret: Code,
}

/// A single turn in the solution
pub struct SolveStep {
    pub guess: Code,
    pub score: Score,
    pub tier: Tier,
    pub candidates_before: usize,
    pub candidates_after: usize,
    pub consistent: bool,
    pub duration: Duration,
}

/// Solve a specific secret with the given selector
///
/// # Errors
///
/// Returns an error if the secret is not a four-digit code. Running out of
/// turns is not an error; it is reported through `success`.
pub fn solve_secret(config: &SolveConfig, selector: &GuessSelector) -> Result<SolveResult> {
    solve_secret_with_progress(config, selector, &Silent)
}

/// Same as `solve_secret`, reporting scan progress to `progress`
///
/// # Errors
///
/// See `solve_secret`.
pub fn solve_secret_with_progress(
    config: &SolveConfig,
    selector: &GuessSelector,
    progress: &dyn Progress,
) -> Result<SolveResult> {
    let secret = Code::new(&config.secret)
        .with_context(|| format!("Invalid secret '{}'", config.secret))?;

    let mut session = Session::new(selector.clone());
    let mut oracle = SecretOracle::new(secret);
    let mut steps = Vec::new();

    while !session.is_terminal() && steps.len() < config.max_turns {
        let candidates_before = session.candidates().len();
        let tier = selector.tier(candidates_before, session.turn());

        let start = Instant::now();
        let guess = session.next_guess_with_progress(progress)?;
        let duration = start.elapsed();
        let consistent = session.candidates().contains(&guess);

        let raw_score = oracle.feedback(guess);
        let update = session.record_feedback(guess, raw_score)?;

        steps.push(SolveStep {
            guess,
            score: Score::calculate(&secret, &guess),
            tier,
            candidates_before,
            candidates_after: update.remaining,
            consistent,
            duration,
        });
    }

    Ok(SolveResult {
        success: session.outcome() == Some(Outcome::Success),
        steps,
        secret,
    })
}
