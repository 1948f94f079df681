//! Formatting utilities for terminal output

use crate::core::{CODE_LEN, Score};

/// Format a score as filled and empty pegs, e.g. `●●○○` for 2
#[must_use]
pub fn score_to_pegs(score: Score) -> String {
    let hits = usize::from(score.value());
    format!("{}{}", "●".repeat(hits), "○".repeat(CODE_LEN - hits))
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pegs_for_each_score() {
        assert_eq!(score_to_pegs(Score::new(0).unwrap()), "○○○○");
        assert_eq!(score_to_pegs(Score::new(2).unwrap()), "●●○○");
        assert_eq!(score_to_pegs(Score::PERFECT), "●●●●");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
