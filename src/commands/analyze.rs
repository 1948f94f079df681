//! Probe analysis command
//!
//! Shows how a probe would split the candidates left by some feedback.

use crate::core::{Code, Score};
use crate::solver::minimax::{Histogram, score_histogram};
use crate::solver::{CandidateSet, SolverError};
use anyhow::{Context, Result};

/// Result of analyzing a probe
pub struct AnalysisResult {
    pub probe: Code,
    pub histogram: Histogram,
    pub worst_case: usize,
    pub consistent: bool,
    pub total_candidates: usize,
}

/// Parse feedback written as `CODE=SCORE`, e.g. `0123=1`
///
/// # Errors
///
/// Returns an error if either side is malformed or the score is above 4.
pub fn parse_feedback(text: &str) -> Result<(Code, Score)> {
    let (code, score) = text
        .split_once('=')
        .with_context(|| format!("Feedback '{text}' must look like CODE=SCORE"))?;

    let code = Code::new(code).with_context(|| format!("Invalid code in '{text}'"))?;
    let raw: u8 = score
        .trim()
        .parse()
        .with_context(|| format!("Invalid score in '{text}'"))?;
    let score = Score::new(raw).ok_or(SolverError::InvalidScore(raw))?;

    Ok((code, score))
}

/// Analyze `probe` against the candidates consistent with `feedback`
///
/// # Errors
///
/// Returns an error if the probe or any feedback entry is malformed, or if
/// the feedback contradicts itself.
pub fn analyze_probe(probe: &str, feedback: &[String]) -> Result<AnalysisResult> {
    let probe = Code::new(probe).with_context(|| format!("Invalid probe '{probe}'"))?;

    let mut candidates = CandidateSet::initial();
    for entry in feedback {
        let (guess, score) = parse_feedback(entry)?;
        candidates.update(guess, score)?;
    }

    let histogram = score_histogram(&probe, candidates.as_slice());

    Ok(AnalysisResult {
        probe,
        histogram,
        worst_case: histogram.iter().copied().max().unwrap_or(0),
        consistent: candidates.contains(&probe),
        total_candidates: candidates.len(),
    })
}
