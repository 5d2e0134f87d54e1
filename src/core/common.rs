//! Common types for Bulls and Cows: digit sequences, evaluations and guess errors.

use core::fmt;

use super::config::NUMBER_LENGTH;

/// A fixed-length sequence of decimal digits, most significant first.
pub type Digits = [u8; NUMBER_LENGTH];

/// Outcome of comparing a guess against the secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Evaluation {
    /// Digits matching in value and position.
    pub bulls: u8,
    /// Digits matching in value but not position.
    pub cows: u8,
}

impl Evaluation {
    pub const fn new(bulls: u8, cows: u8) -> Self {
        Self { bulls, cows }
    }

    /// True when every digit is a bull.
    pub fn is_win(&self) -> bool {
        self.bulls as usize == NUMBER_LENGTH
    }
}

/// Reasons a raw guess is rejected or cannot be submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessError {
    /// Input contains something other than ASCII digits.
    NotANumber,
    /// Input has the wrong number of digits.
    WrongLength { expected: usize, found: usize },
    /// Input starts with `0`.
    LeadingZero,
    /// The round already ended with a win.
    RoundFinished,
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuessError::NotANumber => write!(f, "NOT a number!"),
            GuessError::WrongLength { expected, .. } => write!(f, "NOT {} digits!", expected),
            GuessError::LeadingZero => write!(f, "CANNOT start with zero!"),
            GuessError::RoundFinished => write!(f, "Round is already finished"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GuessError {}
