//! Native store: the high score as plain text in a data directory

use std::fs;
use std::path::{Path, PathBuf};

use super::{HIGH_SCORE_KEY, HighScoreStore, PersistenceError, parse_score, score_or_default};

/// Stores the score in `<dir>/neonBoostHighScore`
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(HIGH_SCORE_KEY),
        }
    }

    /// Store in the default data directory:
    /// `$XDG_DATA_HOME/neon-boost`, then `~/.local/share/neon-boost`, then the CWD
    pub fn in_default_dir() -> Self {
        Self::new(default_dir())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn try_load(&self) -> Result<u32, PersistenceError> {
        match fs::read_to_string(&self.path) {
            Ok(text) => parse_score(Some(&text)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(0),
            Err(e) => Err(e.into()),
        }
    }

    pub fn try_save(&self, score: u32) -> Result<(), PersistenceError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, score.to_string())?;
        Ok(())
    }
}

impl HighScoreStore for FileStore {
    fn load_high_score(&self) -> u32 {
        score_or_default(self.try_load())
    }

    fn save_high_score(&mut self, score: u32) {
        match self.try_save(score) {
            Ok(()) => log::info!("High score {} saved to {}", score, self.path.display()),
            Err(e) => log::warn!("Could not save high score: {}", e),
        }
    }
}

fn default_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_DATA_HOME") {
        if !xdg.is_empty() {
            return PathBuf::from(xdg).join("neon-boost");
        }
    }
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".local/share/neon-boost");
    }
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}
