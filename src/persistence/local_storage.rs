//! Browser store: the high score as a string in LocalStorage

use super::{HIGH_SCORE_KEY, HighScoreStore, PersistenceError, parse_score, score_or_default};

/// LocalStorage-backed store under [`HIGH_SCORE_KEY`]
#[derive(Debug, Clone, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Result<web_sys::Storage, PersistenceError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or_else(|| PersistenceError::Unavailable("no LocalStorage".to_string()))
    }

    pub fn try_load(&self) -> Result<u32, PersistenceError> {
        let storage = Self::storage()?;
        let raw = storage
            .get_item(HIGH_SCORE_KEY)
            .map_err(|e| PersistenceError::Unavailable(format!("{:?}", e)))?;
        parse_score(raw.as_deref())
    }

    pub fn try_save(&self, score: u32) -> Result<(), PersistenceError> {
        Self::storage()?
            .set_item(HIGH_SCORE_KEY, &score.to_string())
            .map_err(|e| PersistenceError::Unavailable(format!("{:?}", e)))
    }
}

impl HighScoreStore for LocalStorageStore {
    fn load_high_score(&self) -> u32 {
        score_or_default(self.try_load())
    }

    fn save_high_score(&mut self, score: u32) {
        match self.try_save(score) {
            Ok(()) => log::info!("High score {} saved", score),
            Err(e) => log::warn!("Could not save high score: {}", e),
        }
    }
}
