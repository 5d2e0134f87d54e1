// Candidate elimination for automatic play.
// A candidate survives feedback only if it would have produced the same
// evaluation for the guess that was made.

use alloc::vec::Vec;

use rand::Rng;

use super::{
    common::Evaluation,
    config::{CANDIDATE_COUNT, MAX_NUMBER, MIN_NUMBER},
    evaluate::evaluate,
    guess::Guess,
};

/// Set of numbers still consistent with every evaluation seen so far.
#[derive(Debug, Clone)]
pub struct CandidateSet {
    candidates: Vec<Guess>,
}

impl CandidateSet {
    /// Start with every well-formed number.
    pub fn new() -> Self {
        let mut candidates = Vec::with_capacity(CANDIDATE_COUNT);
        candidates.extend((MIN_NUMBER..=MAX_NUMBER).filter_map(Guess::from_number));
        Self { candidates }
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn contains(&self, guess: &Guess) -> bool {
        self.candidates.contains(guess)
    }

    /// Drop candidates that disagree with `evaluation` for `guess`.
    pub fn narrow(&mut self, guess: &Guess, evaluation: Evaluation) {
        self.candidates
            .retain(|c| evaluate(c.digits(), guess.digits()) == evaluation);
    }

    /// Pick a remaining candidate uniformly at random.
    pub fn pick<R: Rng>(&self, rng: &mut R) -> Option<Guess> {
        if self.candidates.is_empty() {
            return None;
        }
        Some(self.candidates[rng.random_range(0..self.candidates.len())])
    }
}

impl Default for CandidateSet {
    fn default() -> Self {
        Self::new()
    }
}
