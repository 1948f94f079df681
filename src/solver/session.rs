//! One game against one secret
//!
//! ```text
//! AwaitingGuess --next_guess--> AwaitingFeedback --record_feedback--+--> Solved
//!       ^                                                           |
//!       +------------------- candidates remain ---------------------+--> Contradiction
//! ```
//! `Solved` and `Contradiction` are terminal; `undo` and `reset` leave them.

use super::candidates::{CandidateSet, Update};
use super::engine::GuessSelector;
use super::error::SolverError;
use super::oracle::Oracle;
use super::progress::{Progress, Silent};
use crate::core::{Code, Score};
use std::fmt;

/// Turn cap for games played to the end; the hardest secret needs 14 guesses
pub const DEFAULT_MAX_TURNS: usize = 20;

/// How a finished session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A guess scored 4
    Success,
    /// The feedback left no consistent code
    Contradiction,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "solved"),
            Self::Contradiction => write!(f, "contradiction"),
        }
    }
}

/// Where the session is in its turn cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingGuess,
    AwaitingFeedback(Code),
    Solved(Code),
    Contradiction,
}

/// Session state: candidates, feedback history and phase
#[derive(Debug, Clone)]
pub struct Session {
    selector: GuessSelector,
    candidates: CandidateSet,
    history: Vec<(Code, Score)>,
    phase: Phase,
}

impl Session {
    /// Start a session with every code as a candidate
    #[must_use]
    pub fn new(selector: GuessSelector) -> Self {
        Self {
            selector,
            candidates: CandidateSet::initial(),
            history: Vec::new(),
            phase: Phase::AwaitingGuess,
        }
    }

    /// Turn index of the next guess (1-based)
    #[must_use]
    pub fn turn(&self) -> usize {
        self.history.len() + 1
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub const fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    /// Feedback recorded so far, oldest first
    #[must_use]
    pub fn history(&self) -> &[(Code, Score)] {
        &self.history
    }

    #[must_use]
    pub const fn selector(&self) -> &GuessSelector {
        &self.selector
    }

    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            Phase::Solved(_) => Some(Outcome::Success),
            Phase::Contradiction => Some(Outcome::Contradiction),
            Phase::AwaitingGuess | Phase::AwaitingFeedback(_) => None,
        }
    }

    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.outcome().is_some()
    }

    /// Ask the selector for the next guess and wait for its feedback
    ///
    /// # Errors
    /// - `SolverError::FeedbackPending` if the previous guess has no score yet
    /// - `SolverError::SessionOver` if the session already ended
    pub fn next_guess(&mut self) -> Result<Code, SolverError> {
        self.next_guess_with_progress(&Silent)
    }

    /// Same as `next_guess`, reporting scan progress to `progress`
    ///
    /// # Errors
    /// See `next_guess`.
    pub fn next_guess_with_progress(&mut self, progress: &dyn Progress) -> Result<Code, SolverError> {
        match self.phase {
            Phase::AwaitingGuess => {}
            Phase::AwaitingFeedback(pending) => return Err(SolverError::FeedbackPending(pending)),
            Phase::Solved(_) => return Err(SolverError::SessionOver(Outcome::Success)),
            Phase::Contradiction => return Err(SolverError::SessionOver(Outcome::Contradiction)),
        }

        let guess = self
            .selector
            .next_guess_with_progress(&self.candidates, self.turn(), progress)?;
        self.phase = Phase::AwaitingFeedback(guess);
        Ok(guess)
    }

    /// Apply the score for `guess`
    ///
    /// `guess` does not have to be the one the selector proposed; a driver may
    /// play its own code. A score of 4 ends the session as solved.
    ///
    /// # Errors
    /// - `SolverError::InvalidScore` for scores above 4 (nothing changes)
    /// - `SolverError::Contradiction` if no candidate is left (session ends)
    /// - `SolverError::SessionOver` if the session already ended
    pub fn record_feedback(&mut self, guess: Code, raw_score: u8) -> Result<Update, SolverError> {
        if let Some(outcome) = self.outcome() {
            return Err(SolverError::SessionOver(outcome));
        }
        let score = Score::new(raw_score).ok_or(SolverError::InvalidScore(raw_score))?;

        let before = self.candidates.len();
        self.history.push((guess, score));

        if score.is_perfect() {
            // The guess is the secret even if it was not a candidate
            self.candidates = CandidateSet::from_codes([guess]);
            self.phase = Phase::Solved(guess);
            log::info!("{guess} solved the game on turn {}", self.history.len());
            return Ok(Update {
                eliminated: before.saturating_sub(1),
                remaining: 1,
            });
        }

        match self.candidates.update(guess, score) {
            Ok(update) => {
                log::info!(
                    "{guess} scored {score}: eliminated {}, {} remain",
                    update.eliminated,
                    update.remaining
                );
                self.phase = Phase::AwaitingGuess;
                Ok(update)
            }
            Err(err) => {
                log::warn!("{err}");
                self.phase = Phase::Contradiction;
                Err(err)
            }
        }
    }

    /// Drop the most recent feedback and rebuild the candidates from history
    ///
    /// Works from any phase, including terminal ones. Returns the removed
    /// record, or `None` if there was nothing to undo (a pending guess is
    /// still cleared).
    pub fn undo(&mut self) -> Option<(Code, Score)> {
        let removed = self.history.pop();

        let mut candidates = CandidateSet::initial();
        for &(guess, score) in &self.history {
            // Only the removed record can have emptied the set
            if candidates.update(guess, score).is_err() {
                break;
            }
        }

        self.candidates = candidates;
        self.phase = Phase::AwaitingGuess;
        removed
    }

    /// Forget everything and start over with the same selector
    pub fn reset(&mut self) {
        self.candidates = CandidateSet::initial();
        self.history.clear();
        self.phase = Phase::AwaitingGuess;
    }

    /// Play until the session ends, asking `oracle` for every score
    ///
    /// An invalid score from the oracle is returned as an error without
    /// changing the session, so the caller may retry.
    ///
    /// # Errors
    /// - `SolverError::Contradiction` if the oracle's answers are inconsistent
    /// - `SolverError::InvalidScore` if the oracle answers outside 0-4
    /// - `SolverError::TurnLimit` if `max_turns` guesses did not finish it
    ///
    /// # Examples
    /// ```
    /// use codebreaker::core::Code;
    /// use codebreaker::solver::{DEFAULT_MAX_TURNS, GuessSelector, Outcome, SecretOracle, Session};
    ///
    /// let mut session = Session::new(GuessSelector::default());
    /// let mut oracle = SecretOracle::new(Code::new("1234").unwrap());
    ///
    /// assert_eq!(session.play(&mut oracle, DEFAULT_MAX_TURNS).unwrap(), Outcome::Success);
    /// assert_eq!(session.history().last().unwrap().0.to_string(), "1234");
    /// ```
    pub fn play(&mut self, oracle: &mut dyn Oracle, max_turns: usize) -> Result<Outcome, SolverError> {
        self.play_with_progress(oracle, max_turns, &Silent)
    }

    /// Same as `play`, reporting scan progress to `progress`
    ///
    /// # Errors
    /// See `play`.
    pub fn play_with_progress(
        &mut self,
        oracle: &mut dyn Oracle,
        max_turns: usize,
        progress: &dyn Progress,
    ) -> Result<Outcome, SolverError> {
        while self.history.len() < max_turns {
            if let Some(outcome) = self.outcome() {
                return Ok(outcome);
            }

            let guess = match self.phase {
                Phase::AwaitingFeedback(pending) => pending,
                _ => self.next_guess_with_progress(progress)?,
            };
            let raw_score = oracle.feedback(guess);
            self.record_feedback(guess, raw_score)?;
        }

        self.outcome().ok_or(SolverError::TurnLimit(max_turns))
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(GuessSelector::default())
    }
}
