use core::fmt;

use super::common::{Digits, GuessError};
use super::config::NUMBER_LENGTH;

/// A validated player guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Guess(Digits);

impl Guess {
    /// Validate raw text as a guess. Surrounding whitespace is ignored.
    ///
    /// Checks run in a fixed order: digits only, then length, then leading
    /// zero, so `"0x"` is reported as not a number rather than too short.
    pub fn parse(raw: &str) -> Result<Self, GuessError> {
        let input = raw.trim();
        if input.is_empty() || !input.chars().all(|c| c.is_ascii_digit()) {
            return Err(GuessError::NotANumber);
        }
        let found = input.chars().count();
        if found != NUMBER_LENGTH {
            return Err(GuessError::WrongLength {
                expected: NUMBER_LENGTH,
                found,
            });
        }
        let mut digits = [0u8; NUMBER_LENGTH];
        for (slot, b) in digits.iter_mut().zip(input.bytes()) {
            *slot = b - b'0';
        }
        if digits[0] == 0 {
            return Err(GuessError::LeadingZero);
        }
        Ok(Self(digits))
    }

    /// Build a guess from a number in 1000..=9999.
    pub fn from_number(n: u16) -> Option<Self> {
        if !(1000..=9999).contains(&n) {
            return None;
        }
        Some(Self([
            (n / 1000) as u8,
            (n / 100 % 10) as u8,
            (n / 10 % 10) as u8,
            (n % 10) as u8,
        ]))
    }

    pub fn digits(&self) -> &Digits {
        &self.0
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in self.0 {
            write!(f, "{}", d)?;
        }
        Ok(())
    }
}
