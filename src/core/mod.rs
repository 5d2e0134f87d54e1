//! Core Bulls and Cows logic (no_std compatible)
//!
//! This module contains the pure game rules with no I/O: secret generation,
//! guess validation, scoring, the bounded score ledger and the candidate
//! solver. It only needs `alloc` and `rand`.

pub mod common;
pub mod config;
pub mod evaluate;
pub mod guess;
pub mod ledger;
pub mod secret;
pub mod solver;

// Re-export commonly used types
pub use common::{Digits, Evaluation, GuessError};
pub use config::*;
pub use evaluate::evaluate;
pub use guess::Guess;
pub use ledger::{is_valid_score, ScoreLedger};
pub use secret::Secret;
pub use solver::CandidateSet;
