//! High-score persistence contract.
//!
//! The stored value is the minimum elapsed seconds across completed games.
//! Hosts own the actual storage (browser storage, a file, memory); the
//! session only ever emits a [`crate::Command::RecordTime`].

use log::info;

/// Host-side storage for the single best-time record. An absent value means
/// "no record yet", not an error.
pub trait ScoreStore {
    fn get(&self) -> Option<u64>;
    fn set(&mut self, seconds: u64);
}

/// Record a completed game, keeping only strictly better times. Returns true
/// when the record was updated.
pub fn record(store: &mut impl ScoreStore, seconds: u64) -> bool {
    match store.get() {
        Some(best) if best <= seconds => false,
        previous => {
            info!("new best time: {}s (was {:?})", seconds, previous);
            store.set(seconds);
            true
        }
    }
}

/// In-memory store, for tests and headless hosts.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemoryStore(Option<u64>);

impl MemoryStore {
    pub fn new(initial: Option<u64>) -> Self {
        MemoryStore(initial)
    }
}

impl ScoreStore for MemoryStore {
    fn get(&self) -> Option<u64> {
        self.0
    }

    fn set(&mut self, seconds: u64) {
        self.0 = Some(seconds);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_on_empty_store() {
        let mut store = MemoryStore::default();
        assert!(record(&mut store, 42));
        assert_eq!(store.get(), Some(42));
    }

    #[test]
    fn test_record_keeps_strictly_better_times() {
        let mut store = MemoryStore::new(Some(42));
        assert!(!record(&mut store, 50));
        assert_eq!(store.get(), Some(42));
        // Ties do not overwrite
        assert!(!record(&mut store, 42));
        assert_eq!(store.get(), Some(42));
        assert!(record(&mut store, 40));
        assert_eq!(store.get(), Some(40));
    }
}
