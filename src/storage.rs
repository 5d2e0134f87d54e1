#![cfg(feature = "std")]

//! Persistence for the score ledger.
//!
//! The on-disk format is plain text with one completion time in seconds per
//! line. Lines that do not hold a positive, finite number are skipped with a
//! warning; loading never fails because of file content.

use std::cell::RefCell;
use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::string::String;

use crate::core::{is_valid_score, ScoreLedger};

/// Failure reading or writing a score store.
#[derive(Debug)]
pub enum StoreError {
    /// Reading the store failed for a reason other than it being absent.
    Read { path: PathBuf, source: io::Error },
    /// Writing the store failed.
    Write { path: PathBuf, source: io::Error },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Read { path, source } => {
                write!(f, "could not read scores from {}: {}", path.display(), source)
            }
            StoreError::Write { path, source } => {
                write!(f, "could not save scores to {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Read { source, .. } | StoreError::Write { source, .. } => Some(source),
        }
    }
}

/// Narrow load/save interface the session uses for its ledger.
pub trait ScoreStore {
    /// Load the full ledger. A missing store yields an empty ledger.
    fn load(&self) -> Result<ScoreLedger, StoreError>;

    /// Replace the stored ledger with `ledger`.
    fn save(&self, ledger: &ScoreLedger) -> Result<(), StoreError>;
}

/// Record `secs` into `ledger` and persist the result.
///
/// The updated ledger and rank are returned even when saving fails, so the
/// caller can still report the win.
pub fn record_and_persist<S: ScoreStore + ?Sized>(
    store: &S,
    mut ledger: ScoreLedger,
    secs: f64,
) -> (ScoreLedger, Option<usize>, Result<(), StoreError>) {
    let rank = ledger.record(secs);
    let saved = store.save(&ledger);
    (ledger, rank, saved)
}

/// Parse store text into a ledger, skipping unusable lines.
pub fn parse_scores(text: &str) -> ScoreLedger {
    let entries = text.lines().enumerate().filter_map(|(idx, line)| {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        match line.parse::<f64>() {
            Ok(secs) if is_valid_score(secs) => Some(secs),
            _ => {
                log::warn!("Skipping invalid score on line {}: {:?}", idx + 1, line);
                None
            }
        }
    });
    ScoreLedger::from_entries(entries)
}

/// Render a ledger in store format, one time per line, ascending.
pub fn format_scores(ledger: &ScoreLedger) -> String {
    let mut out = String::new();
    for secs in ledger.entries() {
        out.push_str(&std::format!("{}\n", secs));
    }
    out
}

/// Ledger stored in a plain-text file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_err(&self, source: io::Error) -> StoreError {
        StoreError::Write {
            path: self.path.clone(),
            source,
        }
    }
}

impl ScoreStore for FileStore {
    fn load(&self) -> Result<ScoreLedger, StoreError> {
        match fs::read(&self.path) {
            Ok(bytes) => {
                // Undecodable bytes become U+FFFD, so that line fails to parse and is skipped.
                let ledger = parse_scores(&String::from_utf8_lossy(&bytes));
                log::debug!("Loaded {} scores from {}", ledger.len(), self.path.display());
                Ok(ledger)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("No score file at {}, starting empty", self.path.display());
                Ok(ScoreLedger::new())
            }
            Err(source) => Err(StoreError::Read {
                path: self.path.clone(),
                source,
            }),
        }
    }

    fn save(&self, ledger: &ScoreLedger) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.write_err(e))?;
        }
        // Write a sibling file then rename, so the old ledger survives a failed write.
        let mut tmp_name = self.path.file_name().unwrap_or_default().to_os_string();
        tmp_name.push(".tmp");
        let tmp = self.path.with_file_name(tmp_name);
        let result = fs::File::create(&tmp)
            .and_then(|mut f| {
                f.write_all(format_scores(ledger).as_bytes())?;
                f.sync_all()
            })
            .and_then(|()| fs::rename(&tmp, &self.path));
        if let Err(e) = result {
            let _ = fs::remove_file(&tmp);
            return Err(self.write_err(e));
        }
        log::debug!("Saved {} scores to {}", ledger.len(), self.path.display());
        Ok(())
    }
}

/// In-process store, used for headless runs and tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    text: RefCell<Option<String>>,
    fail_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with existing store text, as if read from a file.
    pub fn with_contents(text: impl Into<String>) -> Self {
        Self {
            text: RefCell::new(Some(text.into())),
            fail_writes: false,
        }
    }

    /// A store whose every `save` fails with a permission error.
    pub fn failing() -> Self {
        Self {
            text: RefCell::new(None),
            fail_writes: true,
        }
    }

    /// Current stored text, if anything was ever stored.
    pub fn contents(&self) -> Option<String> {
        self.text.borrow().clone()
    }
}

impl ScoreStore for MemoryStore {
    fn load(&self) -> Result<ScoreLedger, StoreError> {
        Ok(self
            .text
            .borrow()
            .as_deref()
            .map(parse_scores)
            .unwrap_or_default())
    }

    fn save(&self, ledger: &ScoreLedger) -> Result<(), StoreError> {
        if self.fail_writes {
            return Err(StoreError::Write {
                path: PathBuf::from("<memory>"),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "store is read-only"),
            });
        }
        *self.text.borrow_mut() = Some(format_scores(ledger));
        Ok(())
    }
}
