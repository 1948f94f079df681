//! Four-digit code representation
//!
//! A Code is the shared type for secrets, guesses and candidates: exactly four
//! digits 0-9, repeats allowed.

use std::fmt;
use std::str::FromStr;

/// Number of digit positions in a code
pub const CODE_LEN: usize = 4;

/// Number of distinct codes ("0000" through "9999")
pub const CODE_SPACE: usize = 10_000;

/// A four-digit code
///
/// Stores digit values (not ASCII bytes). Ordering is lexicographic on the
/// digits, which is the same as numeric ordering of the code's index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Code([u8; CODE_LEN]);

/// Error type for invalid codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeError {
    InvalidLength(usize),
    InvalidDigit(char),
    IndexOutOfRange(usize),
}

impl fmt::Display for CodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Code must be exactly {CODE_LEN} digits, got {len}")
            }
            Self::InvalidDigit(ch) => write!(f, "Code contains a non-digit character '{ch}'"),
            Self::IndexOutOfRange(index) => {
                write!(f, "Code index {index} is outside 0..{CODE_SPACE}")
            }
        }
    }
}

impl std::error::Error for CodeError {}

impl Code {
    /// Parse a code from text such as `"0123"`
    ///
    /// Surrounding whitespace is ignored.
    ///
    /// # Errors
    /// Returns `CodeError` if:
    /// - Length is not exactly 4 characters
    /// - Any character is not an ASCII digit
    ///
    /// # Examples
    /// ```
    /// use codebreaker::core::Code;
    ///
    /// let code = Code::new("0123").unwrap();
    /// assert_eq!(code.to_string(), "0123");
    ///
    /// assert!(Code::new("12345").is_err());
    /// assert!(Code::new("12a4").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, CodeError> {
        let text = text.trim();
        let len = text.chars().count();
        if len != CODE_LEN {
            return Err(CodeError::InvalidLength(len));
        }

        let mut digits = [0u8; CODE_LEN];
        for (slot, ch) in digits.iter_mut().zip(text.chars()) {
            let value = ch.to_digit(10).ok_or(CodeError::InvalidDigit(ch))?;
            *slot = value as u8;
        }

        Ok(Self(digits))
    }

    /// Create a code from raw digit values
    ///
    /// # Panics
    /// Panics in debug mode if any digit is above 9
    #[inline]
    #[must_use]
    pub const fn from_digits(digits: [u8; CODE_LEN]) -> Self {
        debug_assert!(
            digits[0] < 10 && digits[1] < 10 && digits[2] < 10 && digits[3] < 10,
            "Code digits must be 0-9"
        );
        Self(digits)
    }

    /// Build a code from its index in enumeration order (`42` is `"0042"`)
    ///
    /// # Errors
    /// Returns `CodeError::IndexOutOfRange` for indices of 10,000 or more.
    pub fn from_index(index: usize) -> Result<Self, CodeError> {
        if index >= CODE_SPACE {
            return Err(CodeError::IndexOutOfRange(index));
        }

        let mut digits = [0u8; CODE_LEN];
        let mut rest = index;
        for slot in digits.iter_mut().rev() {
            *slot = (rest % 10) as u8;
            rest /= 10;
        }

        Ok(Self(digits))
    }

    /// Position of this code in enumeration order
    #[inline]
    #[must_use]
    pub fn index(self) -> usize {
        self.0
            .iter()
            .fold(0, |acc, &digit| acc * 10 + usize::from(digit))
    }

    /// Digit values, most significant first
    #[inline]
    #[must_use]
    pub const fn digits(&self) -> &[u8; CODE_LEN] {
        &self.0
    }

    /// Digit at a specific position (0-3)
    ///
    /// # Panics
    /// Panics if position >= 4
    #[inline]
    #[must_use]
    pub const fn digit_at(&self, position: usize) -> u8 {
        self.0[position]
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &digit in &self.0 {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}

impl FromStr for Code {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
