//! Feedback sources
//!
//! The session never looks at how a score is produced; an oracle might be a
//! person at a keyboard or a simulated game with a known secret.

use crate::core::{Code, Score};

/// Supplies the exact-position score for a guess
///
/// Returns the raw value so that out-of-range input can be rejected by the
/// session rather than silently clamped.
pub trait Oracle {
    fn feedback(&mut self, guess: Code) -> u8;
}

/// Oracle that knows the secret and scores guesses against it
#[derive(Debug, Clone, Copy)]
pub struct SecretOracle {
    secret: Code,
    queries: usize,
}

impl SecretOracle {
    #[must_use]
    pub const fn new(secret: Code) -> Self {
        Self { secret, queries: 0 }
    }

    #[must_use]
    pub const fn secret(&self) -> Code {
        self.secret
    }

    /// Number of guesses scored so far
    #[must_use]
    pub const fn queries(&self) -> usize {
        self.queries
    }
}

impl Oracle for SecretOracle {
    fn feedback(&mut self, guess: Code) -> u8 {
        self.queries += 1;
        Score::calculate(&self.secret, &guess).value()
    }
}

impl<F: FnMut(Code) -> u8> Oracle for F {
    fn feedback(&mut self, guess: Code) -> u8 {
        self(guess)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secret_oracle_scores_and_counts() {
        let mut oracle = SecretOracle::new(Code::new("1234").unwrap());

        assert_eq!(oracle.feedback(Code::new("0123").unwrap()), 0);
        assert_eq!(oracle.feedback(Code::new("1239").unwrap()), 3);
        assert_eq!(oracle.feedback(Code::new("1234").unwrap()), 4);
        assert_eq!(oracle.queries(), 3);
    }

    #[test]
    fn closures_are_oracles() {
        let mut always_one = |_guess: Code| 1;
        assert_eq!(always_one.feedback(Code::new("0000").unwrap()), 1);
    }
}
