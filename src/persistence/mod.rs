//! High score persistence
//!
//! The only durable state is one integer under [`HIGH_SCORE_KEY`]. Backends
//! report problems through [`PersistenceError`] internally, but the
//! [`HighScoreStore`] surface is infallible: a missing or corrupt value reads
//! as 0 and a failed write is logged and forgotten.

#[cfg(not(target_arch = "wasm32"))]
mod file;
#[cfg(target_arch = "wasm32")]
mod local_storage;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;
#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorageStore;

pub use crate::consts::HIGH_SCORE_KEY;

/// Why a store could not read or write
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("stored value {0:?} is not a score")]
    Parse(String),
}

/// Durable single-integer high score
pub trait HighScoreStore {
    /// Stored high score, 0 if absent or unreadable
    fn load_high_score(&self) -> u32;
    /// Persist a new high score; failures are swallowed
    fn save_high_score(&mut self, score: u32);
}

/// Parse a stored value. Absent reads as 0; anything non-numeric is an error.
pub fn parse_score(raw: Option<&str>) -> Result<u32, PersistenceError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(0),
        Some(text) => text
            .parse::<u32>()
            .map_err(|_| PersistenceError::Parse(text.to_string())),
    }
}

/// Collapse a load result to a score, logging failures
pub fn score_or_default(result: Result<u32, PersistenceError>) -> u32 {
    result.unwrap_or_else(|e| {
        log::warn!("Ignoring stored high score: {}", e);
        0
    })
}

/// Volatile store for tests and sessions without storage
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    value: Option<String>,
    /// Number of writes, for inspection
    pub saves: u32,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with a raw value, as if written by an earlier session
    pub fn with_raw(raw: &str) -> Self {
        Self {
            value: Some(raw.to_string()),
            saves: 0,
        }
    }

    pub fn raw(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl HighScoreStore for MemoryStore {
    fn load_high_score(&self) -> u32 {
        score_or_default(parse_score(self.raw()))
    }

    fn save_high_score(&mut self, score: u32) {
        self.value = Some(score.to_string());
        self.saves += 1;
    }
}
