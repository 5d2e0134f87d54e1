//! Player trait and implementations
//!
//! This module defines the Player trait and provides concrete implementations:
//! - CliPlayer: Interactive player reading guesses line by line
//! - AiPlayer: Solver that only guesses numbers consistent with all feedback

#![cfg(feature = "std")]

use std::string::String;

use crate::core::{Evaluation, Guess, GuessError};

/// Source of guesses for a round.
///
/// A Player is responsible for:
/// - Supplying raw guess text (validation happens in the round)
/// - Reacting to rejections and feedback
/// - Deciding whether to play another round
pub trait Player {
    /// Next raw line of input, or `None` when input is exhausted.
    fn next_line(&mut self) -> anyhow::Result<Option<String>>;

    /// Called at the start of each round.
    fn on_round_start(&mut self) {}

    /// Inform the player its last input was not a valid guess.
    fn on_rejected(&mut self, _err: &GuessError) {}

    /// Inform the player of the evaluation of its last guess.
    fn on_feedback(&mut self, _guess: &Guess, _evaluation: Evaluation) {}

    /// Whether to start another round after a win.
    fn play_again(&mut self) -> anyhow::Result<bool>;
}

pub mod ai;
pub use ai::AiPlayer;

pub mod cli;
pub use cli::CliPlayer;
