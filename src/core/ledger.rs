use alloc::vec::Vec;

use super::config::LEDGER_CAPACITY;

/// Bounded, ascending list of the fastest completion times in seconds.
///
/// Entries are always sorted ascending and never exceed [`LEDGER_CAPACITY`].
/// Equal times keep insertion order: an older entry ranks ahead of a newer one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreLedger {
    entries: Vec<f64>,
}

/// A score is usable if it is a positive, finite number of seconds.
pub fn is_valid_score(secs: f64) -> bool {
    secs.is_finite() && secs > 0.0
}

impl ScoreLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a ledger from unordered times, dropping invalid ones.
    pub fn from_entries<I: IntoIterator<Item = f64>>(entries: I) -> Self {
        let mut entries: Vec<f64> = entries.into_iter().filter(|&s| is_valid_score(s)).collect();
        entries.sort_by(f64::total_cmp);
        entries.truncate(LEDGER_CAPACITY);
        Self { entries }
    }

    /// Insert a completion time, returning its 1-based rank or `None` if it
    /// did not make the cut (or was not a valid time).
    pub fn record(&mut self, secs: f64) -> Option<usize> {
        if !is_valid_score(secs) {
            return None;
        }
        // Stable sort places the new entry after any equal ones.
        let rank = self.entries.iter().filter(|&&e| e <= secs).count() + 1;
        self.entries.push(secs);
        self.entries.sort_by(f64::total_cmp);
        self.entries.truncate(LEDGER_CAPACITY);
        (rank <= LEDGER_CAPACITY).then_some(rank)
    }

    pub fn entries(&self) -> &[f64] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `secs` would enter the ledger if recorded now.
    pub fn qualifies(&self, secs: f64) -> bool {
        is_valid_score(secs)
            && (self.entries.len() < LEDGER_CAPACITY
                || self.entries.last().map_or(true, |&worst| secs < worst))
    }
}
