//! The universe of all possible codes
//!
//! Built once on first use and shared for the life of the process.

use super::code::{CODE_SPACE, Code};
use std::sync::LazyLock;

static UNIVERSE: LazyLock<Vec<Code>> = LazyLock::new(|| {
    (0..CODE_SPACE)
        .filter_map(|index| Code::from_index(index).ok())
        .collect()
});

/// All 10,000 codes in enumeration order ("0000", "0001", ..., "9999")
///
/// # Examples
/// ```
/// use codebreaker::core::universe;
///
/// let all = universe();
/// assert_eq!(all.len(), 10_000);
/// assert_eq!(all[0].to_string(), "0000");
/// assert_eq!(all[9_999].to_string(), "9999");
/// ```
#[must_use]
pub fn universe() -> &'static [Code] {
    &UNIVERSE
}
