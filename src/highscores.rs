//! High score gateway
//!
//! Sits between the simulation's score events and a durable
//! [`HighScoreStore`]. The simulation keeps the live in-memory high score; the
//! gateway loads it once at startup and persists each raise.

use crate::persistence::HighScoreStore;
use crate::sim::SimEvent;

/// Persists high score raises reported by the simulation
#[derive(Debug)]
pub struct HighScoreGateway<S: HighScoreStore> {
    store: S,
    /// Highest value known to be persisted (or loaded)
    persisted: u32,
}

impl<S: HighScoreStore> HighScoreGateway<S> {
    /// Wrap a store and read the current high score from it
    pub fn load(store: S) -> Self {
        let persisted = store.load_high_score();
        log::info!("Loaded high score {}", persisted);
        Self { store, persisted }
    }

    /// High score as of the last load or save
    pub fn high_score(&self) -> u32 {
        self.persisted
    }

    /// Persist `score` if it beats what is stored. Returns whether it wrote.
    pub fn record(&mut self, score: u32) -> bool {
        if score <= self.persisted {
            return false;
        }
        self.persisted = score;
        self.store.save_high_score(score);
        true
    }

    /// React to one simulation event
    pub fn observe(&mut self, event: &SimEvent) {
        if let SimEvent::HighScoreChanged { high_score } = *event {
            self.record(high_score);
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;

    #[test]
    fn test_load_reads_store() {
        let gateway = HighScoreGateway::load(MemoryStore::with_raw("5"));
        assert_eq!(gateway.high_score(), 5);
    }

    #[test]
    fn test_record_only_raises() {
        let mut gateway = HighScoreGateway::load(MemoryStore::with_raw("5"));
        assert!(!gateway.record(3));
        assert!(!gateway.record(5));
        assert_eq!(gateway.store().saves, 0);

        assert!(gateway.record(6));
        assert_eq!(gateway.high_score(), 6);
        assert_eq!(gateway.store().raw(), Some("6"));
        assert_eq!(gateway.store().saves, 1);
    }

    #[test]
    fn test_observe_persists_high_score_events() {
        let mut gateway = HighScoreGateway::load(MemoryStore::new());
        gateway.observe(&SimEvent::ScoreChanged { score: 1 });
        assert_eq!(gateway.store().saves, 0);

        gateway.observe(&SimEvent::HighScoreChanged { high_score: 1 });
        gateway.observe(&SimEvent::HighScoreChanged { high_score: 2 });
        assert_eq!(gateway.store().load_high_score(), 2);
        assert_eq!(gateway.store().saves, 2);
    }
}
