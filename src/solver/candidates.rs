//! The set of codes still consistent with the feedback so far

use super::error::SolverError;
use crate::core::{Code, Score, universe};
use rustc_hash::FxHashSet;

/// Result of applying one piece of feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Update {
    pub eliminated: usize,
    pub remaining: usize,
}

/// Candidate codes in enumeration order, with O(1) membership checks
#[derive(Debug, Clone)]
pub struct CandidateSet {
    codes: Vec<Code>,
    members: FxHashSet<Code>,
}

impl CandidateSet {
    /// Every code is a candidate
    #[must_use]
    pub fn initial() -> Self {
        Self::from_sorted(universe().to_vec())
    }

    /// Build a set from arbitrary codes
    ///
    /// Codes are sorted and de-duplicated so the set keeps enumeration order.
    #[must_use]
    pub fn from_codes(codes: impl IntoIterator<Item = Code>) -> Self {
        let mut codes: Vec<Code> = codes.into_iter().collect();
        codes.sort_unstable();
        codes.dedup();
        Self::from_sorted(codes)
    }

    fn from_sorted(codes: Vec<Code>) -> Self {
        let members = codes.iter().copied().collect();
        Self { codes, members }
    }

    /// Keep only codes that would have produced `score` against `guess`
    ///
    /// The filter is always applied. If it leaves nothing, the set is empty and
    /// `SolverError::Contradiction` is returned; the caller must not ask for
    /// another guess from it.
    ///
    /// # Errors
    /// Returns `SolverError::Contradiction` if no candidate survives.
    ///
    /// # Examples
    /// ```
    /// use codebreaker::core::{Code, Score};
    /// use codebreaker::solver::CandidateSet;
    ///
    /// let mut candidates = CandidateSet::initial();
    /// let guess = Code::new("0123").unwrap();
    /// let update = candidates.update(guess, Score::PERFECT).unwrap();
    ///
    /// assert_eq!(update.remaining, 1);
    /// assert_eq!(update.eliminated, 9_999);
    /// ```
    pub fn update(&mut self, guess: Code, score: Score) -> Result<Update, SolverError> {
        let before = self.codes.len();
        let consistent = |candidate: &Code| Score::calculate(candidate, &guess) == score;

        self.codes.retain(consistent);
        self.members.retain(consistent);

        let remaining = self.codes.len();
        if remaining == 0 {
            return Err(SolverError::Contradiction { guess, score });
        }

        Ok(Update {
            eliminated: before - remaining,
            remaining,
        })
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Check whether `code` could still be the secret
    #[inline]
    #[must_use]
    pub fn contains(&self, code: &Code) -> bool {
        self.members.contains(code)
    }

    /// Candidates in enumeration order
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Code] {
        &self.codes
    }

    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&Code> {
        self.codes.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Code> {
        self.codes.iter()
    }
}

impl Default for CandidateSet {
    fn default() -> Self {
        Self::initial()
    }
}

impl<'a> IntoIterator for &'a CandidateSet {
    type Item = &'a Code;
    type IntoIter = std::slice::Iter<'a, Code>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(text: &str) -> Code {
        Code::new(text).unwrap()
    }

    fn score(value: u8) -> Score {
        Score::new(value).unwrap()
    }

    #[test]
    fn initial_holds_universe() {
        let candidates = CandidateSet::initial();
        assert_eq!(candidates.len(), 10_000);
        assert_eq!(candidates.first(), Some(&code("0000")));
        assert!(candidates.contains(&code("9999")));
    }

    #[test]
    fn from_codes_sorts_and_dedups() {
        let candidates =
            CandidateSet::from_codes([code("5555"), code("1111"), code("5555"), code("0000")]);
        let texts: Vec<String> = candidates.iter().map(ToString::to_string).collect();
        assert_eq!(texts, ["0000", "1111", "5555"]);
    }

    #[test]
    fn update_keeps_only_consistent_codes() {
        let mut candidates = CandidateSet::initial();
        let guess = code("0123");
        let update = candidates.update(guess, score(0)).unwrap();

        // 9 choices per position that avoid the guessed digit
        assert_eq!(update.remaining, 9 * 9 * 9 * 9);
        assert_eq!(update.eliminated, 10_000 - 6561);
        assert!(candidates.contains(&code("1234")));
        assert!(!candidates.contains(&code("0999")));
        assert!(
            candidates
                .iter()
                .all(|c| Score::calculate(c, &guess) == score(0))
        );
    }

    #[test]
    fn update_never_grows() {
        let mut candidates = CandidateSet::initial();
        let mut previous = candidates.len();
        for (guess, value) in [("0123", 1), ("4567", 1), ("8901", 0)] {
            let update = candidates.update(code(guess), score(value)).unwrap();
            assert!(update.remaining <= previous);
            assert_eq!(update.eliminated + update.remaining, previous);
            previous = update.remaining;
        }
    }

    #[test]
    fn update_is_idempotent() {
        let mut candidates = CandidateSet::initial();
        candidates.update(code("4567"), score(2)).unwrap();
        let again = candidates.update(code("4567"), score(2)).unwrap();
        assert_eq!(again.eliminated, 0);
    }

    #[test]
    fn update_reports_contradiction_when_emptied() {
        let mut candidates = CandidateSet::from_codes([code("1111"), code("2222")]);
        let result = candidates.update(code("3333"), score(4));

        assert!(matches!(
            result,
            Err(SolverError::Contradiction { guess, score: reported })
                if guess == code("3333") && reported.is_perfect()
        ));
        assert!(candidates.is_empty());
        assert!(!candidates.contains(&code("1111")));
    }
}
