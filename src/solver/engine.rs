//! Tiered guess selection
//!
//! Picks a tactic from the turn number and the number of candidates left,
//! then produces the next guess.

use super::config::SelectorConfig;
use super::error::SolverError;
use super::minimax::select_best_guess_by;
use super::progress::{Progress, Silent};
use super::CandidateSet;
use crate::core::{Code, Score, universe};

/// The branch of the decision procedure taken for a turn
///
/// Checked in this order:
/// ```text
/// turn == 1                                        → Opening
/// candidates <= finish_threshold                   → Finish
/// candidates > global_search_threshold, probe set  → Coverage
/// candidates <= global_search_threshold            → GlobalMinimax
/// otherwise                                        → RestrictedMinimax
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// Turn 1: fixed opening guess
    Opening,

    /// 1-2 candidates: guess the first one
    Finish,

    /// Large pool on an early turn: fixed probe exposing new digits
    Coverage(Code),

    /// Minimax over all 10,000 codes; may pick a code that cannot win
    GlobalMinimax,

    /// Minimax over the candidates only
    RestrictedMinimax,
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Opening => write!(f, "opening"),
            Self::Finish => write!(f, "finish"),
            Self::Coverage(_) => write!(f, "coverage"),
            Self::GlobalMinimax => write!(f, "global minimax"),
            Self::RestrictedMinimax => write!(f, "restricted minimax"),
        }
    }
}

/// Chooses the next guess from the candidates and the turn index
///
/// Deterministic: the same candidates and turn always give the same guess,
/// whatever the thread count or scan chunk size.
#[derive(Debug, Clone, Default)]
pub struct GuessSelector {
    config: SelectorConfig,
}

impl GuessSelector {
    #[must_use]
    pub const fn new(config: SelectorConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &SelectorConfig {
        &self.config
    }

    /// Which tactic applies for this many candidates on this turn
    #[must_use]
    pub fn tier(&self, num_candidates: usize, turn: usize) -> Tier {
        if turn == 1 {
            return Tier::Opening;
        }

        if num_candidates <= self.config.finish_threshold {
            return Tier::Finish;
        }

        if num_candidates > self.config.global_search_threshold {
            self.config
                .coverage_probe(turn)
                .map_or(Tier::RestrictedMinimax, Tier::Coverage)
        } else {
            Tier::GlobalMinimax
        }
    }

    /// Produce the guess for `turn` (1-based)
    ///
    /// # Errors
    /// Returns `SolverError::EmptySearchSpace` if `candidates` is empty after
    /// turn 1; the caller should have stopped on the contradiction instead.
    ///
    /// # Examples
    /// ```
    /// use codebreaker::solver::{CandidateSet, GuessSelector};
    ///
    /// let selector = GuessSelector::default();
    /// let candidates = CandidateSet::initial();
    ///
    /// assert_eq!(selector.next_guess(&candidates, 1).unwrap().to_string(), "0123");
    /// assert_eq!(selector.next_guess(&candidates, 2).unwrap().to_string(), "4567");
    /// assert_eq!(selector.next_guess(&candidates, 3).unwrap().to_string(), "8901");
    /// ```
    pub fn next_guess(&self, candidates: &CandidateSet, turn: usize) -> Result<Code, SolverError> {
        self.next_guess_with_progress(candidates, turn, &Silent)
    }

    /// Same as `next_guess`, reporting scan progress to `progress`
    ///
    /// # Errors
    /// See `next_guess`.
    pub fn next_guess_with_progress(
        &self,
        candidates: &CandidateSet,
        turn: usize,
        progress: &dyn Progress,
    ) -> Result<Code, SolverError> {
        let tier = self.tier(candidates.len(), turn);
        log::debug!(
            "turn {turn}: {} candidates, using {tier}",
            candidates.len()
        );

        let search_space = match tier {
            Tier::Opening => return Ok(self.config.opening),
            Tier::Coverage(probe) => return Ok(probe),
            Tier::Finish => {
                return candidates
                    .first()
                    .copied()
                    .ok_or(SolverError::EmptySearchSpace);
            }
            Tier::GlobalMinimax => universe(),
            Tier::RestrictedMinimax => candidates.as_slice(),
        };

        if candidates.is_empty() {
            return Err(SolverError::EmptySearchSpace);
        }

        let result = select_best_guess_by(
            search_space,
            candidates,
            self.config.scan_chunk,
            Score::calculate,
            progress,
        )
        .ok_or(SolverError::EmptySearchSpace)?;

        log::debug!(
            "best probe {} leaves at most {} (scanned {} of {})",
            result.guess,
            result.worst_case,
            result.probes_scanned,
            search_space.len()
        );

        Ok(result.guess)
    }
}
