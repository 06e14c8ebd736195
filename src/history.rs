//! Linear undo/redo history over raster snapshots.
//!
//! A bounded stack of full canvas captures with a cursor at the "current"
//! entry. Pushing while the cursor sits before the end discards the redo
//! tail (no undo tree); overflowing the cap evicts the oldest entry and
//! shifts the cursor so the relative position is preserved.
//!
//! Invariant: `cursor < len` whenever the history is non-empty.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use crate::consts::HISTORY_CAP;
use crate::surface::Snapshot;

/// Bounded snapshot stack with an undo/redo cursor.
#[derive(Debug)]
pub struct History {
    entries: Vec<Snapshot>,
    cursor: Option<usize>,
    cap: usize,
}

impl History {
    #[must_use]
    pub fn new() -> Self {
        Self::with_cap(HISTORY_CAP)
    }

    /// History bounded at `cap` entries. A cap of zero is treated as one.
    #[must_use]
    pub fn with_cap(cap: usize) -> Self {
        Self { entries: Vec::new(), cursor: None, cap: cap.max(1) }
    }

    /// Append a snapshot as the new current entry, discarding any redo tail
    /// and evicting the oldest entry if the cap is exceeded.
    pub fn push(&mut self, snapshot: Snapshot) {
        match self.cursor {
            Some(cursor) => self.entries.truncate(cursor + 1),
            None => self.entries.clear(),
        }
        self.entries.push(snapshot);
        let mut cursor = self.entries.len() - 1;
        if self.entries.len() > self.cap {
            self.entries.remove(0);
            cursor -= 1;
        }
        self.cursor = Some(cursor);
    }

    /// Step the cursor back and return the entry to repaint from.
    /// No-op at the oldest entry.
    pub fn undo(&mut self) -> Option<&Snapshot> {
        let cursor = self.cursor?;
        if cursor == 0 {
            return None;
        }
        self.cursor = Some(cursor - 1);
        self.entries.get(cursor - 1)
    }

    /// Step the cursor forward and return the entry to repaint from.
    /// No-op at the newest entry.
    pub fn redo(&mut self) -> Option<&Snapshot> {
        let cursor = self.cursor?;
        if cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor = Some(cursor + 1);
        self.entries.get(cursor + 1)
    }

    /// The entry the cursor points at, if any.
    #[must_use]
    pub fn current(&self) -> Option<&Snapshot> {
        self.entries.get(self.cursor?)
    }

    #[must_use]
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.cursor.is_some_and(|c| c > 0)
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.cursor.is_some_and(|c| c + 1 < self.entries.len())
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
