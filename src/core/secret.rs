// Secret generation. Digits may repeat; only the leading digit is constrained.

use core::fmt;

use rand::Rng;

use super::common::Digits;
use super::config::NUMBER_LENGTH;

/// The hidden number a round is played against.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Secret(Digits);

impl Secret {
    /// Draw a new secret: leading digit uniform in 1-9, the rest uniform in 0-9.
    pub fn generate<R: Rng>(rng: &mut R) -> Self {
        let mut digits = [0u8; NUMBER_LENGTH];
        digits[0] = rng.random_range(1..=9);
        for d in digits.iter_mut().skip(1) {
            *d = rng.random_range(0..=9);
        }
        Self(digits)
    }

    /// Build a secret from known digits. Returns `None` unless every digit is
    /// in 0-9 and the first is non-zero.
    pub fn from_digits(digits: Digits) -> Option<Self> {
        if digits[0] == 0 || digits.iter().any(|&d| d > 9) {
            return None;
        }
        Some(Self(digits))
    }

    pub fn digits(&self) -> &Digits {
        &self.0
    }
}

// Keep the secret out of debug output.
impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(****)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::SmallRng, SeedableRng};

    #[test]
    fn generated_secret_has_nonzero_leading_digit() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..1000 {
            let s = Secret::generate(&mut rng);
            assert!(s.digits()[0] >= 1 && s.digits()[0] <= 9);
            assert!(s.digits().iter().all(|&d| d <= 9));
        }
    }

    #[test]
    fn same_seed_same_secret() {
        let a = Secret::generate(&mut SmallRng::seed_from_u64(42));
        let b = Secret::generate(&mut SmallRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn repeated_digits_are_produced() {
        let mut rng = SmallRng::seed_from_u64(1);
        let repeated = (0..2000).map(|_| Secret::generate(&mut rng)).any(|s| {
            let d = s.digits();
            (0..4).any(|i| (i + 1..4).any(|j| d[i] == d[j]))
        });
        assert!(repeated);
    }

    #[test]
    fn from_digits_rejects_leading_zero() {
        assert!(Secret::from_digits([0, 1, 2, 3]).is_none());
        assert!(Secret::from_digits([1, 10, 2, 3]).is_none());
        assert!(Secret::from_digits([1, 0, 0, 0]).is_some());
    }
}
