//! Exact-position feedback score
//!
//! A score is the number of positions where the guess and the secret hold the
//! same digit. Digits that are present but misplaced earn nothing.

use super::code::{CODE_LEN, Code};

/// Feedback score for a guess, 0 through 4
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Score(u8);

impl Score {
    /// Every position matches
    pub const PERFECT: Self = Self(CODE_LEN as u8);

    /// Number of distinct score values (0..=4)
    pub const COUNT: usize = CODE_LEN + 1;

    /// Create a score from a raw value
    ///
    /// Returns `None` if the value is above 4.
    ///
    /// # Examples
    /// ```
    /// use codebreaker::core::Score;
    ///
    /// assert_eq!(Score::new(3).map(Score::value), Some(3));
    /// assert!(Score::new(5).is_none());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value as usize <= CODE_LEN {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Get the raw score value (0-4)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Check if this score means the guess was the secret
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.0 as usize == CODE_LEN
    }

    /// Count the positions where `a` and `b` hold the same digit
    ///
    /// Symmetric in its arguments, and `calculate(x, x)` is always perfect.
    ///
    /// # Examples
    /// ```
    /// use codebreaker::core::{Code, Score};
    ///
    /// let secret = Code::new("1234").unwrap();
    /// let guess = Code::new("0123").unwrap();
    /// assert_eq!(Score::calculate(&secret, &guess).value(), 0);
    ///
    /// let guess = Code::new("1290").unwrap();
    /// assert_eq!(Score::calculate(&secret, &guess).value(), 2);
    /// ```
    #[inline]
    #[must_use]
    pub fn calculate(a: &Code, b: &Code) -> Self {
        let matches = a
            .digits()
            .iter()
            .zip(b.digits())
            .filter(|(x, y)| x == y)
            .count();

        Self(matches as u8)
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Score {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u8>()
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| format!("Invalid score: {s} (expected 0-{CODE_LEN})"))
    }
}
