//! Tuning constants for guess selection
//!
//! The defaults are empirical choices: a fixed opening, two coverage probes that
//! put every digit in play by turn 3, and a 500-candidate cut-off above which
//! a scan of the whole universe is too slow to be interactive.

use crate::core::Code;

/// Configuration for `GuessSelector`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorConfig {
    /// Turn 1 guess, played without looking at the candidates
    pub opening: Code,

    /// Fixed probes for turns 2, 3, ... while the pool is still large
    pub coverage_probes: Vec<Code>,

    /// Candidates <= this scan the whole universe; above it, only the
    /// candidates are tried as probes (default: 500)
    pub global_search_threshold: usize,

    /// Candidates <= this guess the first candidate directly (default: 2)
    pub finish_threshold: usize,

    /// Probes scored in parallel before merging in enumeration order
    pub scan_chunk: usize,
}

impl SelectorConfig {
    /// Create a configuration with custom opening moves and thresholds
    #[must_use]
    pub const fn new(
        opening: Code,
        coverage_probes: Vec<Code>,
        global_search_threshold: usize,
        finish_threshold: usize,
    ) -> Self {
        Self {
            opening,
            coverage_probes,
            global_search_threshold,
            finish_threshold,
            scan_chunk: DEFAULT_SCAN_CHUNK,
        }
    }

    /// Change how many probes are scored per parallel batch
    ///
    /// Values below 1 are treated as 1. The chosen guess never depends on it.
    #[must_use]
    pub fn with_scan_chunk(mut self, scan_chunk: usize) -> Self {
        self.scan_chunk = scan_chunk.max(1);
        self
    }

    /// Coverage probe for a turn, if that turn has one
    #[must_use]
    pub fn coverage_probe(&self, turn: usize) -> Option<Code> {
        turn.checked_sub(2)
            .and_then(|slot| self.coverage_probes.get(slot))
            .copied()
    }
}

const DEFAULT_SCAN_CHUNK: usize = 256;

impl Default for SelectorConfig {
    fn default() -> Self {
        Self::new(
            Code::from_digits([0, 1, 2, 3]),
            vec![
                Code::from_digits([4, 5, 6, 7]),
                Code::from_digits([8, 9, 0, 1]),
            ],
            500, // global_search_threshold: <= 500 scans all 10,000 codes
            2,   // finish_threshold: 1-2 candidates are guessed directly
        )
    }
}
