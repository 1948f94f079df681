// End-to-end game scenarios
// These drive the public session API the way a front end would

use codebreaker::core::{Code, Score, universe};
use codebreaker::solver::minimax::select_best_guess_by;
use codebreaker::solver::{
    CandidateSet, DEFAULT_MAX_TURNS, GuessSelector, Outcome, Phase, SecretOracle, Session, Silent,
    SolverError,
};
use std::sync::atomic::{AtomicUsize, Ordering};

fn code(text: &str) -> Code {
    Code::new(text).unwrap()
}

#[test]
fn test_secret_1234_is_solved() {
    let secret = code("1234");
    let mut session = Session::default();

    let first = session.next_guess().unwrap();
    assert_eq!(first, code("0123"));
    assert_eq!(Score::calculate(&secret, &first).value(), 0);

    let update = session.record_feedback(first, 0).unwrap();
    assert_eq!(update.remaining, 6561);
    assert!(session.candidates().contains(&secret));

    let mut oracle = SecretOracle::new(secret);
    assert_eq!(session.play(&mut oracle, DEFAULT_MAX_TURNS), Ok(Outcome::Success));
    assert_eq!(session.phase(), Phase::Solved(secret));

    // Every recorded score is the true one
    for &(guess, score) in session.history() {
        assert_eq!(Score::calculate(&secret, &guess), score);
    }
}

#[test]
fn test_contradiction_ends_session() {
    let mut session = Session::default();
    let first = session.next_guess().unwrap();
    session.record_feedback(first, 0).unwrap();

    // Every remaining candidate scores 0 against the opening
    let err = session.record_feedback(first, 1).unwrap_err();
    assert!(matches!(err, SolverError::Contradiction { .. }));
    assert!(!err.is_recoverable());
    assert_eq!(session.outcome(), Some(Outcome::Contradiction));
    assert!(session.is_terminal());
    assert!(matches!(
        session.next_guess(),
        Err(SolverError::SessionOver(Outcome::Contradiction))
    ));
}

#[test]
fn test_undo_after_mistyped_score() {
    let secret = code("4999");
    let mut session = Session::default();

    let first = session.next_guess().unwrap();
    session.record_feedback(first, 0).unwrap();
    let second = session.next_guess().unwrap();
    assert_eq!(second, code("4567"));

    // The true score is 1; a wrong answer is taken back and corrected
    session.record_feedback(second, 3).unwrap();
    session.undo();
    assert_eq!(session.turn(), 2);
    session.record_feedback(second, 1).unwrap();

    let mut oracle = SecretOracle::new(secret);
    assert_eq!(session.play(&mut oracle, DEFAULT_MAX_TURNS), Ok(Outcome::Success));
}

#[test]
fn test_coverage_probes_ignore_candidate_contents() {
    let selector = GuessSelector::default();

    let mut candidates = CandidateSet::initial();
    candidates.update(code("0123"), Score::new(1).unwrap()).unwrap();
    assert!(candidates.len() > 500);
    assert_eq!(selector.next_guess(&candidates, 2).unwrap(), code("4567"));

    let other = CandidateSet::from_codes(universe().iter().copied().skip(9_000));
    assert_eq!(selector.next_guess(&other, 2).unwrap(), code("4567"));
    assert_eq!(selector.next_guess(&other, 3).unwrap(), code("8901"));
}

#[test]
fn test_tie_break_prefers_member() {
    let candidates = CandidateSet::from_codes([code("1111"), code("2222"), code("3333")]);
    // 1200 and 1111 both leave at most two candidates; only 1111 can win
    let search = [code("1200"), code("1111")];

    let result = select_best_guess_by(&search, &candidates, 4, Score::calculate, &Silent).unwrap();
    assert_eq!(result.guess, code("1111"));
}

#[test]
fn test_early_exit_counts_scoring_calls() {
    let candidates = CandidateSet::from_codes([code("4444"), code("4445"), code("4455")]);
    let calls = AtomicUsize::new(0);
    let counting = |a: &Code, b: &Code| {
        calls.fetch_add(1, Ordering::Relaxed);
        Score::calculate(a, b)
    };

    let result = select_best_guess_by(universe(), &candidates, 1, counting, &Silent).unwrap();

    assert_eq!(result.worst_case, 1);
    assert!(!result.exhausted);
    let full_scan = universe().len() * candidates.len();
    let used = calls.load(Ordering::Relaxed);
    assert_eq!(used, result.probes_scanned * candidates.len());
    assert!(used < full_scan);
}

#[test]
fn test_small_sets_guess_a_candidate() {
    let selector = GuessSelector::default();
    for pair in [["0042", "9000"], ["1234", "1234"]] {
        let candidates = CandidateSet::from_codes(pair.iter().map(|t| code(t)));
        let guess = selector.next_guess(&candidates, 6).unwrap();
        assert!(candidates.contains(&guess));
    }
}

#[test]
fn test_invalid_score_is_recoverable() {
    let mut session = Session::default();
    let guess = session.next_guess().unwrap();

    let err = session.record_feedback(guess, 9).unwrap_err();
    assert_eq!(err, SolverError::InvalidScore(9));
    assert!(err.is_recoverable());
    assert_eq!(session.phase(), Phase::AwaitingFeedback(guess));
    assert_eq!(session.candidates().len(), 10_000);
}

#[test]
fn test_sessions_are_independent() {
    let mut first = Session::default();
    let mut second = Session::default();

    let guess = first.next_guess().unwrap();
    first.record_feedback(guess, 2).unwrap();

    assert_eq!(second.candidates().len(), 10_000);
    assert_eq!(second.next_guess().unwrap(), code("0123"));
}
