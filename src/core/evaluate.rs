// Bulls and cows scoring.
// Works on plain digit arrays and avoids heap allocations.

use super::common::{Digits, Evaluation};

/// Score `guess` against `secret`.
///
/// Bulls count equal positions. Cows are then counted per digit value over the
/// remaining (non-bull) positions only, as the smaller of the two occurrence
/// counts, so each digit occurrence is matched at most once. The result is
/// symmetric in its arguments.
pub fn evaluate(secret: &Digits, guess: &Digits) -> Evaluation {
    let mut bulls = 0u8;
    let mut secret_counts = [0u8; 10];
    let mut guess_counts = [0u8; 10];

    for (&s, &g) in secret.iter().zip(guess.iter()) {
        if s == g {
            bulls += 1;
        } else {
            secret_counts[s as usize] += 1;
            guess_counts[g as usize] += 1;
        }
    }

    let cows = secret_counts
        .iter()
        .zip(guess_counts.iter())
        .map(|(&s, &g)| s.min(g))
        .sum();

    Evaluation { bulls, cows }
}
