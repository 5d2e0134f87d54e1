#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod core;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod player;
pub mod prelude;
#[cfg(feature = "std")]
pub mod round;
#[cfg(feature = "std")]
pub mod session;
#[cfg(feature = "std")]
pub mod storage;
#[cfg(feature = "std")]
pub mod ui;

pub use crate::core::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV};
#[cfg(feature = "std")]
pub use player::{AiPlayer, CliPlayer, Player};
#[cfg(feature = "std")]
pub use round::{play_round, Round, RoundOutcome, RoundState, Turn};
#[cfg(feature = "std")]
pub use session::{RoundSummary, Session};
#[cfg(feature = "std")]
pub use storage::{record_and_persist, FileStore, MemoryStore, ScoreStore, StoreError};
#[cfg(feature = "std")]
pub use ui::{ConsoleDisplay, Display, QuietDisplay};
