//! Minimax-based guess selection
//!
//! Scans probes in enumeration order and keeps the one whose largest score
//! bucket is smallest. Probes are scored in parallel chunks, but results are
//! merged strictly in order so the answer never depends on thread timing.

use super::calculator::calculate_max_remaining_by;
use crate::core::{Code, Score};
use crate::solver::{CandidateSet, Progress, Silent};
use rayon::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Outcome of a minimax scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanResult {
    /// Best probe found
    pub guess: Code,
    /// Largest bucket left if `guess` is played
    pub worst_case: usize,
    /// Probes examined before the scan stopped
    pub probes_scanned: usize,
    /// False when the scan stopped early on a worst case of 1
    pub exhausted: bool,
}

#[derive(Clone, Copy)]
struct Best {
    guess: Code,
    worst_case: usize,
    consistent: bool,
}

impl Best {
    fn into_result(self, probes_scanned: usize, exhausted: bool) -> ScanResult {
        ScanResult {
            guess: self.guess,
            worst_case: self.worst_case,
            probes_scanned,
            exhausted,
        }
    }
}

const DEFAULT_CHUNK: usize = 256;

/// Select best probe by minimizing worst-case remaining candidates
///
/// Returns `None` if the search space is empty.
///
/// # Examples
/// ```
/// use codebreaker::core::Code;
/// use codebreaker::solver::CandidateSet;
/// use codebreaker::solver::minimax::select_best_guess;
///
/// let candidates = CandidateSet::from_codes([
///     Code::new("1111").unwrap(),
///     Code::new("2222").unwrap(),
/// ]);
/// let search = [Code::new("0000").unwrap(), Code::new("1111").unwrap()];
///
/// let result = select_best_guess(&search, &candidates).unwrap();
/// assert_eq!(result.guess.to_string(), "1111");
/// assert_eq!(result.worst_case, 1);
/// ```
#[must_use]
pub fn select_best_guess(search_space: &[Code], candidates: &CandidateSet) -> Option<ScanResult> {
    select_best_guess_by(
        search_space,
        candidates,
        DEFAULT_CHUNK,
        Score::calculate,
        &Silent,
    )
}

/// Full form of `select_best_guess`
///
/// - A probe replaces the current best if its worst case is strictly smaller,
///   or equal while it is a candidate and the current best is not.
/// - The scan stops as soon as the best worst case reaches 1.
/// - `chunk` probes are scored in parallel per batch. Within a batch, probes
///   after one with a worst case of 1 are skipped once that result is known,
///   so only probes already in flight on other threads are scored past it.
pub fn select_best_guess_by<F>(
    search_space: &[Code],
    candidates: &CandidateSet,
    chunk: usize,
    scorer: F,
    progress: &dyn Progress,
) -> Option<ScanResult>
where
    F: Fn(&Code, &Code) -> Score + Sync,
{
    let total = search_space.len();
    let pool = candidates.as_slice();
    let mut best: Option<Best> = None;
    let mut scanned = 0;

    for batch in search_space.chunks(chunk.max(1)) {
        // Lowest position in the batch known to split every candidate;
        // probes after it cannot be chosen and are left unscored
        let cutoff = AtomicUsize::new(usize::MAX);
        let worst_cases: Vec<Option<usize>> = batch
            .par_iter()
            .enumerate()
            .map(|(position, probe)| {
                if position > cutoff.load(Ordering::Relaxed) {
                    return None;
                }
                let worst_case = calculate_max_remaining_by(probe, pool, &scorer);
                if worst_case <= 1 {
                    cutoff.fetch_min(position, Ordering::Relaxed);
                }
                Some(worst_case)
            })
            .collect();

        for (&probe, worst_case) in batch.iter().zip(worst_cases) {
            // Skipped probes only follow one that ends the scan below
            let Some(worst_case) = worst_case else {
                break;
            };
            scanned += 1;

            let replace = best.as_ref().is_none_or(|current| {
                worst_case < current.worst_case
                    || (worst_case == current.worst_case
                        && !current.consistent
                        && candidates.contains(&probe))
            });

            if replace {
                best = Some(Best {
                    guess: probe,
                    worst_case,
                    consistent: candidates.contains(&probe),
                });
            }

            if let Some(found) = best.filter(|b| b.worst_case <= 1) {
                log::debug!(
                    "{} splits every candidate, stopping after {scanned} of {total} probes",
                    found.guess
                );
                progress.report(1.0);
                return Some(found.into_result(scanned, false));
            }
        }

        progress.report(scanned as f64 / total as f64);
    }

    best.map(|b| b.into_result(scanned, true))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::universe;
    use std::sync::Mutex;

    fn code(text: &str) -> Code {
        Code::new(text).unwrap()
    }

    fn set(texts: &[&str]) -> CandidateSet {
        CandidateSet::from_codes(texts.iter().map(|t| code(t)))
    }

    #[test]
    fn selects_lowest_worst_case() {
        let candidates = set(&["1111", "2222", "3333"]);
        // 1112 scores 3, 1 and 0: one candidate per bucket
        let search = [code("0000"), code("1111"), code("1112")];

        let result = select_best_guess(&search, &candidates).unwrap();
        assert_eq!(result.guess, code("1112"));
        assert_eq!(result.worst_case, 1);
    }

    #[test]
    fn tie_prefers_candidate_member() {
        let candidates = set(&["1111", "2222", "3333"]);
        // 1200 -> [1, 2]; 1111 -> [2, 0, 0, 0, 1]; both leave at most 2
        let search = [code("1200"), code("1111")];

        let result = select_best_guess(&search, &candidates).unwrap();
        assert_eq!(result.worst_case, 2);
        assert_eq!(result.guess, code("1111"));
    }

    #[test]
    fn tie_keeps_earlier_member() {
        let candidates = set(&["1111", "2222", "3333"]);
        let search = [code("1111"), code("2222"), code("1200")];

        let result = select_best_guess(&search, &candidates).unwrap();
        assert_eq!(result.guess, code("1111"));
        assert!(result.exhausted);
    }

    #[test]
    fn strictly_better_non_member_wins() {
        let candidates = set(&["1111", "2222", "3333"]);
        let search = [code("1111"), code("1112")];

        let result = select_best_guess(&search, &candidates).unwrap();
        assert_eq!(result.guess, code("1112"));
        assert!(!candidates.contains(&result.guess));
    }

    #[test]
    fn returns_none_on_empty_search_space() {
        let candidates = set(&["1234"]);
        assert!(select_best_guess(&[], &candidates).is_none());
    }

    #[test]
    fn stops_at_first_perfect_split() {
        let candidates = set(&["1111", "1112", "1122"]);
        let calls = AtomicUsize::new(0);
        let counting = |a: &Code, b: &Code| {
            calls.fetch_add(1, Ordering::Relaxed);
            Score::calculate(a, b)
        };

        let result =
            select_best_guess_by(universe(), &candidates, 1, counting, &Silent).unwrap();

        assert_eq!(result.worst_case, 1);
        assert!(!result.exhausted);
        assert_eq!(result.probes_scanned, result.guess.index() + 1);
        assert!(result.probes_scanned < universe().len());
        assert_eq!(
            calls.load(Ordering::Relaxed),
            result.probes_scanned * candidates.len()
        );
    }

    #[test]
    fn stops_inside_a_full_chunk() {
        // 0011 scores 2, 1 and 0: the first perfect split, well inside one chunk
        let candidates = set(&["1111", "1112", "1122"]);
        let calls = AtomicUsize::new(0);
        let counting = |a: &Code, b: &Code| {
            calls.fetch_add(1, Ordering::Relaxed);
            Score::calculate(a, b)
        };

        // One worker scores the chunk in order, so nothing runs past the split
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(1)
            .build()
            .unwrap();
        let result = pool
            .install(|| {
                select_best_guess_by(universe(), &candidates, DEFAULT_CHUNK, counting, &Silent)
            })
            .unwrap();

        assert_eq!(result.guess, code("0011"));
        assert_eq!(result.probes_scanned, 12);
        assert!(!result.exhausted);
        assert_eq!(calls.load(Ordering::Relaxed), 12 * candidates.len());
    }

    #[test]
    fn chunk_size_does_not_change_choice() {
        let mut candidates = CandidateSet::initial();
        candidates.update(code("0123"), Score::new(1).unwrap()).unwrap();
        candidates.update(code("4567"), Score::new(1).unwrap()).unwrap();
        candidates.update(code("8901"), Score::new(1).unwrap()).unwrap();
        let search = &universe()[..2_000];

        let reference = select_best_guess_by(search, &candidates, 1, Score::calculate, &Silent);
        for chunk in [7, 256, 5_000] {
            let result = select_best_guess_by(search, &candidates, chunk, Score::calculate, &Silent);
            assert_eq!(result, reference);
        }
    }

    #[test]
    fn progress_reaches_completion() {
        let candidates = set(&["1111", "2222", "3333", "4444", "5555", "6666"]);
        let search = &universe()[..1_000];
        let seen = Mutex::new(Vec::new());
        let observer = |fraction: f64| seen.lock().unwrap().push(fraction);

        let result =
            select_best_guess_by(search, &candidates, 100, Score::calculate, &observer).unwrap();

        let seen = seen.into_inner().unwrap();
        assert!(result.exhausted);
        assert_eq!(seen.len(), 10);
        assert!(seen.windows(2).all(|pair| pair[0] <= pair[1]));
        assert!((seen[seen.len() - 1] - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn ties_resolved_consistently() {
        let candidates = set(&["5555"]);
        let search = [code("0000"), code("1111")];

        let first = select_best_guess(&search, &candidates);
        let second = select_best_guess(&search, &candidates);
        assert_eq!(first, second);
    }
}
