#![cfg(feature = "std")]

//! One round of play: a secret, an attempt counter and a timer.

use std::time::{Duration, Instant};

use rand::Rng;

use crate::core::{evaluate, Evaluation, Guess, GuessError, Secret};
use crate::player::Player;
use crate::ui::Display;

/// Where a round is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    AwaitingGuess,
    Finished,
}

/// Result of a single accepted guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    pub guess: Guess,
    pub evaluation: Evaluation,
    /// Attempts made so far, including this one.
    pub attempts: u32,
}

/// What a won round produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundOutcome {
    pub attempts: u32,
    pub elapsed: Duration,
}

/// State machine for a single round.
#[derive(Debug)]
pub struct Round {
    secret: Secret,
    attempts: u32,
    started: Instant,
    elapsed: Option<Duration>,
}

impl Round {
    /// Start a round against a freshly generated secret.
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        Self::with_secret(Secret::generate(rng))
    }

    /// Start a round against a known secret.
    pub fn with_secret(secret: Secret) -> Self {
        log::debug!("Round started");
        Self {
            secret,
            attempts: 0,
            started: Instant::now(),
            elapsed: None,
        }
    }

    pub fn state(&self) -> RoundState {
        if self.elapsed.is_some() {
            RoundState::Finished
        } else {
            RoundState::AwaitingGuess
        }
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Time taken to win, once the round is finished.
    pub fn elapsed(&self) -> Option<Duration> {
        self.elapsed
    }

    /// Summary of a finished round.
    pub fn outcome(&self) -> Option<RoundOutcome> {
        self.elapsed.map(|elapsed| RoundOutcome {
            attempts: self.attempts,
            elapsed,
        })
    }

    /// Validate and score raw input.
    ///
    /// Rejected input leaves the attempt count untouched. A winning guess
    /// stops the timer and finishes the round.
    pub fn submit(&mut self, raw: &str) -> Result<Turn, GuessError> {
        if self.state() == RoundState::Finished {
            return Err(GuessError::RoundFinished);
        }
        let guess = Guess::parse(raw)?;
        self.attempts += 1;
        let evaluation = evaluate(self.secret.digits(), guess.digits());
        if evaluation.is_win() {
            let elapsed = self.started.elapsed();
            self.elapsed = Some(elapsed);
            log::info!(
                "Round won in {} attempts after {:.2}s",
                self.attempts,
                elapsed.as_secs_f64()
            );
        }
        Ok(Turn {
            guess,
            evaluation,
            attempts: self.attempts,
        })
    }
}

/// Drive `round` to completion with input from `player`.
///
/// Returns `None` if the player runs out of input before winning.
pub fn play_round<P, D>(
    round: &mut Round,
    player: &mut P,
    display: &mut D,
) -> anyhow::Result<Option<RoundOutcome>>
where
    P: Player + ?Sized,
    D: Display + ?Sized,
{
    player.on_round_start();
    while round.state() == RoundState::AwaitingGuess {
        display.prompt()?;
        let Some(line) = player.next_line()? else {
            log::debug!("Input closed after {} attempts", round.attempts());
            return Ok(None);
        };
        match round.submit(&line) {
            Ok(turn) => {
                display.feedback(turn.evaluation)?;
                player.on_feedback(&turn.guess, turn.evaluation);
            }
            Err(err) => {
                display.rejected(&err)?;
                player.on_rejected(&err);
            }
        }
    }
    Ok(round.outcome())
}
