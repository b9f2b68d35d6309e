//! Board snapshots and the linear move history.

use super::position::{column, row};
use super::{Board, Position};
use derive_getters::Getters;
use serde::Serialize;
use tracing::{debug, instrument};

/// The board as it stood after a given move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Getters)]
pub struct Snapshot {
    /// Board after the move.
    board: Board,
    /// Cell that was just played; `None` for the opening snapshot.
    origin: Option<Position>,
    /// Number of moves played to reach this board.
    move_number: usize,
}

impl Snapshot {
    /// The empty board before any move.
    pub fn start() -> Self {
        Self {
            board: Board::new(),
            origin: None,
            move_number: 0,
        }
    }

    /// Snapshot produced by playing `origin` as move number `move_number`.
    pub fn after_move(board: Board, origin: Position, move_number: usize) -> Self {
        Self {
            board,
            origin: Some(origin),
            move_number,
        }
    }

    /// Human-readable description used in the history list.
    pub fn description(&self) -> String {
        match self.origin {
            Some(pos) if self.move_number > 0 => {
                let index = pos.to_index();
                format!(
                    "move #{} at ({}, {})",
                    self.move_number,
                    row(index),
                    column(index)
                )
            }
            _ => "go to game start".to_string(),
        }
    }
}

/// Ordered snapshots from game start to the latest move.
///
/// Never empty: entry 0 is always the empty board, and entry `k` always
/// has move number `k`. Only [`History::branch`] adds entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct History {
    snapshots: Vec<Snapshot>,
}

impl History {
    /// Creates a history holding only the opening snapshot.
    pub fn new() -> Self {
        Self {
            snapshots: vec![Snapshot::start()],
        }
    }

    /// Number of snapshots, including the opening one.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false: the opening snapshot is never removed.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Snapshot at `step`, if it exists.
    pub fn get(&self, step: usize) -> Option<&Snapshot> {
        self.snapshots.get(step)
    }

    /// Most recent snapshot.
    pub fn latest(&self) -> &Snapshot {
        // Non-empty by construction.
        &self.snapshots[self.snapshots.len() - 1]
    }

    /// Iterates snapshots in move order.
    pub fn iter(&self) -> std::slice::Iter<'_, Snapshot> {
        self.snapshots.iter()
    }

    /// Records `board` as the move played at `origin` from `step`.
    ///
    /// Snapshots after `step` are discarded first, so the new snapshot always
    /// gets the next move number. Steps past the end branch from the latest
    /// snapshot.
    #[instrument(skip(self, board), fields(len = self.snapshots.len()))]
    pub fn branch(&mut self, step: usize, board: Board, origin: Position) -> &Snapshot {
        let keep = step.saturating_add(1).min(self.snapshots.len());
        if keep < self.snapshots.len() {
            debug!(dropped = self.snapshots.len() - keep, "Discarding future branch");
            self.snapshots.truncate(keep);
        }

        let move_number = self.snapshots.len();
        self.snapshots
            .push(Snapshot::after_move(board, origin, move_number));
        self.latest()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a Snapshot;
    type IntoIter = std::slice::Iter<'a, Snapshot>;

    fn into_iter(self) -> Self::IntoIter {
        self.snapshots.iter()
    }
}
