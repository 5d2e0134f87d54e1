#![cfg(feature = "std")]

//! A sequence of rounds sharing one score ledger.

use rand::Rng;
use serde::Serialize;

use crate::{
    core::ScoreLedger,
    player::Player,
    round::{play_round, Round, RoundOutcome},
    storage::{record_and_persist, ScoreStore},
    ui::Display,
};

/// Result of a won round, as reported to the player.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RoundSummary {
    pub attempts: u32,
    pub elapsed_secs: f64,
    /// 1-based leaderboard placement, `None` if the time did not qualify.
    pub rank: Option<usize>,
}

/// Owns the ledger and its store for the lifetime of a session.
pub struct Session<S: ScoreStore> {
    store: S,
    ledger: Option<ScoreLedger>,
    /// Set when the store could not be read; it is then never written.
    read_only: bool,
}

impl<S: ScoreStore> Session<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            ledger: None,
            read_only: false,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Current ledger, loading it from the store on first use.
    ///
    /// A store that cannot be read is reported on `display` and treated as empty.
    pub fn ledger<D: Display + ?Sized>(&mut self, display: &mut D) -> anyhow::Result<&ScoreLedger> {
        if self.ledger.is_none() {
            let ledger = match self.store.load() {
                Ok(ledger) => ledger,
                Err(e) => {
                    log::warn!("{}", e);
                    display.warning(&std::format!(
                        "{}; starting with an empty leaderboard that will not be saved",
                        e
                    ))?;
                    self.read_only = true;
                    ScoreLedger::new()
                }
            };
            self.ledger = Some(ledger);
        }
        Ok(&*self.ledger.get_or_insert_with(ScoreLedger::new))
    }

    /// Record a won round on the leaderboard and show the end credits.
    ///
    /// A failed save is shown as a warning; the win is reported regardless.
    pub fn finish_round<D: Display + ?Sized>(
        &mut self,
        outcome: RoundOutcome,
        display: &mut D,
    ) -> anyhow::Result<RoundSummary> {
        // A round can't take zero time on the leaderboard.
        let elapsed_secs = outcome.elapsed.as_secs_f64().max(f64::MIN_POSITIVE);
        let mut ledger = self.ledger(display)?.clone();
        let rank = if self.read_only {
            log::debug!("Store unreadable, keeping score in memory only");
            ledger.record(elapsed_secs)
        } else {
            let (updated, rank, saved) = record_and_persist(&self.store, ledger, elapsed_secs);
            if let Err(e) = saved {
                log::warn!("{}", e);
                display.warning(&std::format!("Could not save highscore: {}", e))?;
            }
            ledger = updated;
            rank
        };
        let summary = RoundSummary {
            attempts: outcome.attempts,
            elapsed_secs,
            rank,
        };
        display.credits(&summary, &ledger)?;
        self.ledger = Some(ledger);
        Ok(summary)
    }

    /// Play rounds until the player declines another or runs out of input.
    pub fn run<P, D, R>(
        &mut self,
        player: &mut P,
        rng: &mut R,
        display: &mut D,
    ) -> anyhow::Result<Vec<RoundSummary>>
    where
        P: Player + ?Sized,
        D: Display + ?Sized,
        R: Rng,
    {
        let mut summaries = Vec::new();
        display.introduction()?;
        self.ledger(display)?;
        loop {
            if !summaries.is_empty() {
                display.round_divider()?;
            }
            let mut round = Round::new(rng);
            let Some(outcome) = play_round(&mut round, player, display)? else {
                break;
            };
            summaries.push(self.finish_round(outcome, display)?);
            if !player.play_again()? {
                break;
            }
        }
        Ok(summaries)
    }
}
