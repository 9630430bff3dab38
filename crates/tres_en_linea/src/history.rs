//! Snapshot history.
//!
//! Stores every board from the empty start to the latest move. Recording a
//! board after an earlier snapshot discards everything past that snapshot.

use super::Board;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Error returned when a history index does not name a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum HistoryError {
    /// The index is past the last snapshot.
    #[display("Move #{} does not exist (history holds {} snapshots)", index, len)]
    InvalidIndex {
        /// Requested index.
        index: usize,
        /// Number of snapshots at the time of the request.
        len: usize,
    },

    /// Loaded history without even the starting board.
    #[display("History holds no snapshots")]
    Empty,
}

/// Ordered board snapshots. Index 0 is always the empty board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SnapshotList")]
pub struct History {
    snapshots: Vec<Board>,
}

/// Serialized shape of [`History`], checked before use.
#[derive(Deserialize)]
struct SnapshotList {
    snapshots: Vec<Board>,
}

impl TryFrom<SnapshotList> for History {
    type Error = HistoryError;

    fn try_from(list: SnapshotList) -> Result<Self, Self::Error> {
        if list.snapshots.is_empty() {
            return Err(HistoryError::Empty);
        }
        Ok(Self {
            snapshots: list.snapshots,
        })
    }
}

impl History {
    /// Creates a history holding only the empty board.
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::new()],
        }
    }

    /// Number of snapshots (never zero).
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false: the empty board is never removed.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Returns the snapshot at `index`.
    pub fn get(&self, index: usize) -> Option<&Board> {
        self.snapshots.get(index)
    }

    /// Returns the latest snapshot.
    pub fn last(&self) -> &Board {
        // `snapshots` starts with one board and is never truncated below it.
        &self.snapshots[self.snapshots.len() - 1]
    }

    /// Returns snapshot `index`, which the caller has already validated.
    pub(crate) fn at(&self, index: usize) -> &Board {
        &self.snapshots[index]
    }

    /// Iterates snapshots from the empty board onward.
    pub fn iter(&self) -> std::slice::Iter<'_, Board> {
        self.snapshots.iter()
    }

    /// Returns `index` if it names a snapshot.
    pub fn check(&self, index: usize) -> Result<usize, HistoryError> {
        if index < self.len() {
            Ok(index)
        } else {
            Err(HistoryError::InvalidIndex {
                index,
                len: self.len(),
            })
        }
    }

    /// Keeps snapshots `0..=after`, then appends `board`.
    ///
    /// An `after` past the last snapshot appends without discarding.
    /// Returns the index of the appended board and how many snapshots were
    /// discarded.
    #[instrument(skip(self, board), fields(len = self.snapshots.len()))]
    pub fn record_after(&mut self, after: usize, board: Board) -> Record {
        let after = after.min(self.len() - 1);
        let discarded = self.len() - after - 1;
        if discarded > 0 {
            debug!(discarded, "Discarding future snapshots");
        }
        self.snapshots.truncate(after + 1);
        self.snapshots.push(board);
        Record {
            index: self.len() - 1,
            discarded,
        }
    }

    #[cfg(test)]
    pub(crate) fn snapshots_mut(&mut self) -> &mut Vec<Board> {
        &mut self.snapshots
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a Board;
    type IntoIter = std::slice::Iter<'a, Board>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Result of [`History::record_after`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record {
    /// Index of the appended snapshot.
    pub index: usize,
    /// Number of snapshots removed before appending.
    pub discarded: usize,
}
