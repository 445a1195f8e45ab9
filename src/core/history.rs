//! Linear undo/redo history of visited states.
//!
//! History is an arena of entries with a cursor pointing at the current one.
//! Entries before the cursor can be undone to, entries after it can be
//! redone to. Recording a new entry drops everything after the cursor.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::Duration;

/// One visited state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    /// Name of the state at this point in history
    pub state: String,
    /// Event that led here, `None` for the root and for direct state changes
    pub event: Option<String>,
    /// When the state was entered
    pub entered_at: DateTime<Utc>,
}

impl HistoryEntry {
    /// Entry for a state reached without an event.
    pub fn new(state: impl Into<String>) -> Self {
        Self {
            state: state.into(),
            event: None,
            entered_at: Utc::now(),
        }
    }

    /// Entry for a state reached through `event`.
    pub fn via(state: impl Into<String>, event: impl Into<String>) -> Self {
        Self {
            event: Some(event.into()),
            ..Self::new(state)
        }
    }
}

/// Ordered history with a movable cursor.
///
/// There is always at least one entry (the root), and the cursor always
/// points at a valid entry.
///
/// # Example
///
/// ```rust
/// use waypoint::core::{History, HistoryEntry};
///
/// let mut history = History::new("draft");
/// history.record(HistoryEntry::new("review"));
/// history.record(HistoryEntry::new("published"));
///
/// assert!(history.undo());
/// assert_eq!(history.current().state, "review");
///
/// history.record(HistoryEntry::new("draft"));
/// assert!(!history.can_redo()); // "published" is gone
/// assert_eq!(history.path(), vec!["draft", "review", "draft"]);
/// ```
#[derive(Clone, Debug, Serialize)]
pub struct History {
    entries: Vec<HistoryEntry>,
    cursor: usize,
}

impl History {
    /// Create a history holding only a root entry at `root`.
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            entries: vec![HistoryEntry::new(root)],
            cursor: 0,
        }
    }

    /// The entry under the cursor.
    pub fn current(&self) -> &HistoryEntry {
        &self.entries[self.cursor]
    }

    /// Record `entry` after the cursor and move onto it.
    ///
    /// Any entries that could have been redone are discarded.
    pub fn record(&mut self, entry: HistoryEntry) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(entry);
        self.cursor += 1;
    }

    /// Step back one entry. Returns `false` at the root.
    pub fn undo(&mut self) -> bool {
        if self.can_undo() {
            self.cursor -= 1;
            true
        } else {
            false
        }
    }

    /// Step forward one entry. Returns `false` when nothing was undone.
    pub fn redo(&mut self) -> bool {
        if self.can_redo() {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    /// Whether an entry exists before the cursor.
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// Whether an entry exists after the cursor.
    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// All recorded entries, including those after the cursor.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Index of the current entry.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of recorded entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`; a history holds at least its root.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// State names from the root up to and including the current entry.
    pub fn path(&self) -> Vec<&str> {
        self.entries[..=self.cursor]
            .iter()
            .map(|e| e.state.as_str())
            .collect()
    }

    /// Time between entering the root and entering the current state.
    pub fn duration(&self) -> Duration {
        self.current()
            .entered_at
            .signed_duration_since(self.entries[0].entered_at)
            .to_std()
            .unwrap_or(Duration::ZERO)
    }
}
