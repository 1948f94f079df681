//! Terminal progress bar for minimax scans

use crate::solver::Progress;
use indicatif::{ProgressBar, ProgressStyle};

/// Scans over fewer probes than this finish too fast to be worth a bar
const MIN_VISIBLE_WORK: usize = 2_000;

const STEPS: u64 = 100;

/// Progress observer drawing an indicatif bar in percent
pub struct ScanProgressBar {
    bar: ProgressBar,
}

impl ScanProgressBar {
    /// Create a bar, hidden when `visible` is false
    #[must_use]
    pub fn new(visible: bool) -> Self {
        let bar = if visible {
            ProgressBar::new(STEPS)
        } else {
            ProgressBar::hidden()
        };
        if let Ok(style) = ProgressStyle::default_bar()
            .template("   >> analysing [{bar:30.cyan/blue}] {pos}%")
        {
            bar.set_style(style.progress_chars("█▓░"));
        }
        Self { bar }
    }

    /// Bar sized for a scan over `search_space` probes
    #[must_use]
    pub fn for_search_space(search_space: usize) -> Self {
        Self::new(search_space > MIN_VISIBLE_WORK)
    }

    /// Remove the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl Progress for ScanProgressBar {
    fn report(&self, fraction: f64) {
        let position = (fraction.clamp(0.0, 1.0) * STEPS as f64).round() as u64;
        self.bar.set_position(position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_bar_tracks_position() {
        let progress = ScanProgressBar::new(false);
        progress.report(0.42);
        assert_eq!(progress.bar.position(), 42);

        progress.report(7.0);
        assert_eq!(progress.bar.position(), STEPS);
        progress.finish();
    }

    #[test]
    fn small_scans_stay_hidden() {
        assert!(ScanProgressBar::for_search_space(500).bar.is_hidden());
    }
}
