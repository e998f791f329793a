//! Winner history log
//!
//! Insertion-ordered newest-first, append-only apart from full clears.
//! Persisted to LocalStorage on the web build.

use serde::{Deserialize, Serialize};

use crate::roster::{Participant, ParticipantId};

/// A winner snapshot plus the moment the spin settled
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WinnerRecord {
    pub id: ParticipantId,
    pub name: String,
    pub color: String,
    /// Unix timestamp (ms) when the spin settled
    pub timestamp_ms: f64,
}

/// Newest-first winner log
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WinnerLog {
    pub entries: Vec<WinnerRecord>,
}

impl WinnerLog {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "prize_wheel_winners";

    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Prepend a winner; the most recent draw is always first
    pub fn record(&mut self, winner: Participant, timestamp_ms: f64) {
        self.entries.insert(
            0,
            WinnerRecord {
                id: winner.id,
                name: winner.name,
                color: winner.color,
                timestamp_ms,
            },
        );
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn latest(&self) -> Option<&WinnerRecord> {
        self.entries.first()
    }

    /// Display rank of the entry at `index`: the oldest winner is #1
    pub fn rank(&self, index: usize) -> usize {
        self.entries.len() - index
    }

    /// Load the log from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(log) = serde_json::from_str::<WinnerLog>(&json) {
                    log::info!("Loaded {} winner records", log.entries.len());
                    return log;
                }
            }
        }

        log::info!("No winner history found, starting fresh");
        Self::new()
    }

    /// Save the log to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Winner history saved ({} entries)", self.entries.len());
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::new()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}
