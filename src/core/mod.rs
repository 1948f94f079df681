//! Core domain types for the code-breaking game
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod code;
mod score;
mod universe;

pub use code::{CODE_LEN, CODE_SPACE, Code, CodeError};
pub use score::Score;
pub use universe::universe;
