//! Commonly used types and utilities for ease of import.

pub use crate::{evaluate, Evaluation, Guess, GuessError, ScoreLedger, Secret};

#[cfg(feature = "std")]
pub use crate::{
    AiPlayer, CliPlayer, ConsoleDisplay, Display, FileStore, MemoryStore, Player, Round,
    ScoreStore, Session,
};
