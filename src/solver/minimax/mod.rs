//! Minimax guess selection
//!
//! Implements the worst-case minimization scan over a probe space.

mod calculator;
mod selector;

pub use calculator::{Histogram, calculate_max_remaining, score_histogram, score_histogram_by};
pub use selector::{ScanResult, select_best_guess, select_best_guess_by};
