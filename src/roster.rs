//! Participant roster and fair shuffling
//!
//! Ordering is semantically significant: slice `i` of the wheel belongs to
//! the participant at index `i`. Ids are unique for the lifetime of the
//! roster; entries are immutable after insertion apart from removal.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Palette cycled through when assigning participant colors
pub const COLOR_PALETTE: [&str; 10] = [
    "#ef4444", // red
    "#f97316", // orange
    "#f59e0b", // amber
    "#84cc16", // lime
    "#10b981", // emerald
    "#06b6d4", // cyan
    "#3b82f6", // blue
    "#8b5cf6", // violet
    "#d946ef", // fuchsia
    "#f43f5e", // rose
];

/// Unique participant identity, allocated by the owning roster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParticipantId(pub u64);

/// A wheel entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    /// Display name (free text)
    pub name: String,
    /// Display color (cosmetic only)
    pub color: String,
}

/// Unbiased Fisher-Yates shuffle. Returns a new vector; the input slice is
/// left untouched.
pub fn shuffled<T: Clone, R: Rng>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    for i in (1..out.len()).rev() {
        let j = rng.random_range(0..=i);
        out.swap(i, j);
    }
    out
}

/// Ordered participant set with unique ids
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Roster {
    entries: Vec<Participant>,
    next_id: u64,
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}

impl Roster {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new participant id
    fn next_participant_id(&mut self) -> ParticipantId {
        let id = ParticipantId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Append a single participant. Color cycles through the palette by
    /// current roster length.
    pub fn add(&mut self, name: &str) -> ParticipantId {
        let id = self.next_participant_id();
        let color = COLOR_PALETTE[self.entries.len() % COLOR_PALETTE.len()];
        self.entries.push(Participant {
            id,
            name: name.to_string(),
            color: color.to_string(),
        });
        id
    }

    /// Bulk import: one name per line, trimmed, empty lines dropped. Each
    /// entry gets a uniformly random palette color and the batch is shuffled
    /// before appending. Returns the number of participants added.
    pub fn add_bulk<R: Rng>(&mut self, text: &str, rng: &mut R) -> usize {
        let batch: Vec<Participant> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|name| {
                let id = self.next_participant_id();
                let color = COLOR_PALETTE[rng.random_range(0..COLOR_PALETTE.len())];
                Participant {
                    id,
                    name: name.to_string(),
                    color: color.to_string(),
                }
            })
            .collect();

        let added = batch.len();
        self.entries.extend(shuffled(&batch, rng));
        added
    }

    /// Remove a participant by id. Returns whether an entry was removed.
    pub fn remove(&mut self, id: ParticipantId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|p| p.id != id);
        self.entries.len() != before
    }

    /// Remove all participants
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Randomly permute slice assignment
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.entries = shuffled(&self.entries, rng);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Live ordered entries (slice order)
    pub fn participants(&self) -> &[Participant] {
        &self.entries
    }

    pub fn get(&self, id: ParticipantId) -> Option<&Participant> {
        self.entries.iter().find(|p| p.id == id)
    }

    /// Copy of the current entries, frozen for an in-flight spin
    pub fn snapshot(&self) -> Vec<Participant> {
        self.entries.clone()
    }
}
