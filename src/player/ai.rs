#![cfg(feature = "std")]

use std::string::{String, ToString};

use rand::rngs::SmallRng;

use crate::core::{CandidateSet, Evaluation, Guess, GuessError};

use super::Player;

/// Solver that guesses a random number still consistent with all feedback.
pub struct AiPlayer {
    rng: SmallRng,
    candidates: CandidateSet,
    last_guess: Option<Guess>,
    guesses: Vec<Guess>,
    rounds_left: u32,
}

impl AiPlayer {
    /// Create a solver that will play `rounds` rounds in total. The first
    /// round always runs, so `0` behaves like `1`.
    pub fn new(rng: SmallRng, rounds: u32) -> Self {
        Self {
            rng,
            candidates: CandidateSet::new(),
            last_guess: None,
            guesses: Vec::new(),
            rounds_left: rounds.saturating_sub(1),
        }
    }

    /// Guesses made in the current round, in order.
    pub fn guesses(&self) -> &[Guess] {
        &self.guesses
    }

    pub fn candidates_remaining(&self) -> usize {
        self.candidates.len()
    }
}

impl Player for AiPlayer {
    fn next_line(&mut self) -> anyhow::Result<Option<String>> {
        let guess = self
            .candidates
            .pick(&mut self.rng)
            .ok_or_else(|| anyhow::anyhow!("no candidates left; feedback was inconsistent"))?;
        log::debug!("AI guessing {} ({} candidates)", guess, self.candidates.len());
        self.last_guess = Some(guess);
        self.guesses.push(guess);
        Ok(Some(guess.to_string()))
    }

    fn on_round_start(&mut self) {
        self.candidates = CandidateSet::new();
        self.last_guess = None;
        self.guesses.clear();
    }

    fn on_rejected(&mut self, err: &GuessError) {
        log::warn!("AI guess {:?} rejected: {}", self.last_guess, err);
    }

    fn on_feedback(&mut self, guess: &Guess, evaluation: Evaluation) {
        self.candidates.narrow(guess, evaluation);
    }

    fn play_again(&mut self) -> anyhow::Result<bool> {
        if self.rounds_left == 0 {
            return Ok(false);
        }
        self.rounds_left -= 1;
        Ok(true)
    }
}
