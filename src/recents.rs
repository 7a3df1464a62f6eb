//! Recently opened boards.
//!
//! DESIGN
//! ======
//! A bounded move-to-front list. Opening a board prepends a snapshot stamped
//! with [`OPENED_TODAY`]; any older entry for the same board is dropped, and
//! the list is truncated to [`RECENT_BOARDS_CAP`] so stale boards fall off
//! the tail. The date headings shown by the recent views come from `grouped`,
//! a stable partition over the entry labels.

use std::collections::HashMap;

use crate::model::Board;

#[cfg(test)]
#[path = "recents_test.rs"]
mod recents_test;

/// Maximum number of entries the recency list retains.
pub const RECENT_BOARDS_CAP: usize = 15;

/// Date label stamped on a board when it is opened.
pub const OPENED_TODAY: &str = "Today";

/// A board the user opened, with the date label it is filed under.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecencyEntry {
    /// Snapshot of the board at the moment it was opened.
    pub board: Board,
    /// Grouping label. Entries pushed this session carry [`OPENED_TODAY`].
    pub opened: String,
}

/// Bounded most-recently-opened board list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecentBoards {
    /// Entries most recent first, unique by board id, bounded by
    /// [`RECENT_BOARDS_CAP`].
    pub entries: Vec<RecencyEntry>,
}

/// One date bucket of the recency list.
#[derive(Debug, PartialEq, Eq)]
pub struct DateGroup<'a> {
    pub label: &'a str,
    pub entries: Vec<&'a RecencyEntry>,
}

impl RecentBoards {
    /// Records that `board` was just opened, moving it to the front.
    ///
    /// Any existing entry with the same board id is removed first, then the
    /// list is truncated so the oldest boards fall off the tail.
    pub fn push(&mut self, board: Board) {
        self.entries.retain(|e| e.board.id != board.id);
        self.entries.insert(
            0,
            RecencyEntry {
                board,
                opened: OPENED_TODAY.to_owned(),
            },
        );
        self.entries.truncate(RECENT_BOARDS_CAP);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries partitioned by date label.
    ///
    /// Groups appear in the order their label is first seen, and entries keep
    /// their relative order within each group. Labels are opaque strings and
    /// are never parsed as dates.
    #[must_use]
    pub fn grouped(&self) -> Vec<DateGroup<'_>> {
        let mut groups: Vec<DateGroup<'_>> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();
        for entry in &self.entries {
            match index.get(entry.opened.as_str()) {
                Some(&at) => groups[at].entries.push(entry),
                None => {
                    index.insert(entry.opened.as_str(), groups.len());
                    groups.push(DateGroup {
                        label: &entry.opened,
                        entries: vec![entry],
                    });
                }
            }
        }
        groups
    }
}
