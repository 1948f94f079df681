//! Guess selection and game state
//!
//! This module contains the candidate bookkeeping, the tiered minimax engine
//! and the session state machine that drives them.

mod candidates;
mod config;
mod engine;
mod error;
pub mod minimax;
mod oracle;
mod progress;
mod session;

pub use candidates::{CandidateSet, Update};
pub use config::SelectorConfig;
pub use engine::{GuessSelector, Tier};
pub use error::SolverError;
pub use oracle::{Oracle, SecretOracle};
pub use progress::{Progress, Silent};
pub use session::{DEFAULT_MAX_TURNS, Outcome, Phase, Session};
