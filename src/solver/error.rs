//! Errors reported by the solver and session

use super::session::Outcome;
use crate::core::{Code, Score};
use std::fmt;

/// Error type for solver and session operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// Feedback outside 0..=4; nothing was changed
    InvalidScore(u8),

    /// No code is consistent with the recorded feedback
    Contradiction { guess: Code, score: Score },

    /// A search was requested with nothing to search over
    EmptySearchSpace,

    /// A guess was handed out and is still waiting for its score
    FeedbackPending(Code),

    /// The session already reached a terminal outcome
    SessionOver(Outcome),

    /// The driver gave up after this many turns
    TurnLimit(usize),
}

impl SolverError {
    /// Whether the caller can retry the same session after this error
    ///
    /// Only a bad score or an out-of-order call can be retried; everything
    /// else ends the session (or indicates a bug).
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::InvalidScore(_) | Self::FeedbackPending(_))
    }
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidScore(value) => {
                write!(f, "Score must be between 0 and 4, got {value}")
            }
            Self::Contradiction { guess, score } => write!(
                f,
                "No candidates remain after {guess} scored {score}; earlier feedback was likely wrong"
            ),
            Self::EmptySearchSpace => write!(f, "Cannot search an empty candidate set"),
            Self::FeedbackPending(guess) => {
                write!(f, "Guess {guess} is still waiting for feedback")
            }
            Self::SessionOver(outcome) => write!(f, "Session already ended: {outcome}"),
            Self::TurnLimit(turns) => write!(f, "No solution within {turns} turns"),
        }
    }
}

impl std::error::Error for SolverError {}
