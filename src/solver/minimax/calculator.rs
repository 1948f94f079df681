//! Minimax worst-case calculation for exact-position scores
//!
//! Given a probe and set of candidates, computes how the candidates split across
//! the five possible scores and how large the biggest bucket is.

use crate::core::{Code, Score};

/// Count of candidates per score value, indexed by score (0-4)
pub type Histogram = [usize; Score::COUNT];

/// Bucket candidates by the score they would produce against `probe`
///
/// # Examples
/// ```
/// use codebreaker::core::Code;
/// use codebreaker::solver::minimax::score_histogram;
///
/// let probe = Code::new("1200").unwrap();
/// let candidates = [Code::new("1234").unwrap(), Code::new("5678").unwrap()];
///
/// // "1234" matches two positions, "5678" none
/// assert_eq!(score_histogram(&probe, &candidates), [1, 0, 1, 0, 0]);
/// ```
#[must_use]
pub fn score_histogram(probe: &Code, candidates: &[Code]) -> Histogram {
    score_histogram_by(probe, candidates, Score::calculate)
}

/// Same as `score_histogram` with a caller-supplied scoring function
pub fn score_histogram_by<F>(probe: &Code, candidates: &[Code], scorer: F) -> Histogram
where
    F: Fn(&Code, &Code) -> Score,
{
    let mut counts = [0; Score::COUNT];

    for candidate in candidates {
        let score = scorer(candidate, probe);
        counts[usize::from(score.value())] += 1;
    }

    counts
}

/// Calculate the maximum remaining candidates for a probe
///
/// Returns the worst-case number of remaining candidates after guessing it,
/// or 0 when there are no candidates.
///
/// # Examples
/// ```
/// use codebreaker::core::Code;
/// use codebreaker::solver::minimax::calculate_max_remaining;
///
/// let probe = Code::new("0000").unwrap();
/// let candidates = [Code::new("1111").unwrap(), Code::new("2222").unwrap()];
///
/// // Both candidates score 0, so nothing is learned
/// assert_eq!(calculate_max_remaining(&probe, &candidates), 2);
/// ```
#[must_use]
pub fn calculate_max_remaining(probe: &Code, candidates: &[Code]) -> usize {
    calculate_max_remaining_by(probe, candidates, Score::calculate)
}

pub(crate) fn calculate_max_remaining_by<F>(probe: &Code, candidates: &[Code], scorer: F) -> usize
where
    F: Fn(&Code, &Code) -> Score,
{
    score_histogram_by(probe, candidates, scorer)
        .into_iter()
        .max()
        .unwrap_or(0)
}
