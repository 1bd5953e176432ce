//! Append-only game history with cursor navigation.
//!
//! Entries are full deep-copy snapshots, one per finalized ply plus one for
//! the initial position. Adding an entry while the cursor sits behind the
//! latest one truncates the abandoned branch first, matching ordinary editor
//! undo semantics.

use chrono::{DateTime, Utc};

use crate::game_state::chess_types::Move;
use crate::game_state::game_snapshot::GameSnapshot;

/// One history entry. `played` is `None` only for the initial position.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub move_number: usize,
    pub played: Option<Move>,
    pub snapshot: GameSnapshot,
    pub notation: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct HistoryManager {
    entries: Vec<HistoryEntry>,
    cursor: usize,
}

impl HistoryManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry, discarding anything beyond the cursor first.
    pub fn add_entry(&mut self, played: Option<Move>, snapshot: GameSnapshot, notation: String) {
        if !self.entries.is_empty() {
            self.entries.truncate(self.cursor + 1);
        }
        let move_number = self.entries.len();
        self.entries.push(HistoryEntry {
            move_number,
            played,
            snapshot,
            notation,
            timestamp: Utc::now(),
        });
        self.cursor = self.entries.len() - 1;
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = 0;
    }

    #[inline]
    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    #[inline]
    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// Step the cursor back one entry. `None` at the start.
    pub fn go_back(&mut self) -> Option<GameSnapshot> {
        if !self.can_go_back() {
            return None;
        }
        self.cursor -= 1;
        Some(self.entries[self.cursor].snapshot.clone())
    }

    /// Step the cursor forward one entry. `None` at the latest.
    pub fn go_forward(&mut self) -> Option<GameSnapshot> {
        if !self.can_go_forward() {
            return None;
        }
        self.cursor += 1;
        Some(self.entries[self.cursor].snapshot.clone())
    }

    /// Jump to an arbitrary entry. Out-of-range indices are a no-op.
    pub fn go_to_entry(&mut self, index: usize) -> Option<GameSnapshot> {
        if index >= self.entries.len() {
            return None;
        }
        self.cursor = index;
        Some(self.entries[self.cursor].snapshot.clone())
    }

    pub fn go_to_start(&mut self) -> Option<GameSnapshot> {
        self.go_to_entry(0)
    }

    pub fn go_to_latest(&mut self) -> Option<GameSnapshot> {
        if self.entries.is_empty() {
            return None;
        }
        self.go_to_entry(self.entries.len() - 1)
    }

    #[inline]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}
