//! Code Breaker
//!
//! A solver for the four-digit code-breaking game where each guess is answered
//! only with the number of digits in the right position. Guesses are chosen by
//! a tiered minimax search that may play a code known not to be the secret
//! when it splits the remaining possibilities better.
//!
//! # Quick Start
//!
//! ```rust
//! use codebreaker::core::{Code, Score};
//! use codebreaker::solver::Session;
//!
//! let secret = Code::new("1234").unwrap();
//! let mut session = Session::default();
//!
//! let guess = session.next_guess().unwrap();
//! assert_eq!(guess.to_string(), "0123");
//!
//! let score = Score::calculate(&secret, &guess);
//! let update = session.record_feedback(guess, score.value()).unwrap();
//! assert_eq!(update.remaining, 6561);
//! assert!(session.candidates().contains(&secret));
//! ```

// Core domain types
pub mod core;

// Solving algorithms
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
