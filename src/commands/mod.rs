//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod simple;
pub mod solve;

pub use analyze::{AnalysisResult, analyze_probe, parse_feedback};
pub use benchmark::{BenchmarkResult, run_benchmark, sample_secrets};
pub use simple::run_simple;
pub use solve::{SolveConfig, SolveResult, SolveStep, solve_secret, solve_secret_with_progress};
