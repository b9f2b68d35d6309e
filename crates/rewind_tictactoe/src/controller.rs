//! Game controller: move history, step pointer and display order.
//!
//! The controller is the only mutable piece of the game. Every intent from
//! the front end maps onto one method here, and every rejected intent leaves
//! the controller exactly as it was.

use super::action::{JumpError, MoveError};
use super::history::{History, Snapshot};
use super::rules::{self, WinResult};
use super::status::Status;
use super::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// One line of the history list, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Step to jump to when this entry is selected.
    pub step: usize,
    /// Human-readable description of the move.
    pub description: String,
    /// Whether this entry is the step currently shown.
    pub is_current: bool,
}

/// Tic-tac-toe game with time travel over its own history.
///
/// Serializable for output only; start one with [`GameController::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameController {
    history: History,
    current_step: usize,
    next_player: Player,
    reverse_display: bool,
}

impl GameController {
    /// Creates a new game at the empty board, history listed oldest first.
    #[instrument]
    pub fn new() -> Self {
        Self::with_reverse_display(false)
    }

    /// Creates a new game with the given initial history order.
    #[instrument]
    pub fn with_reverse_display(reverse_display: bool) -> Self {
        Self {
            history: History::new(),
            current_step: 0,
            next_player: Player::X,
            reverse_display,
        }
    }

    /// Plays the next player's mark at `pos` on the current board.
    ///
    /// Any moves recorded after the current step are discarded first, so
    /// playing from an earlier step starts a new branch.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] if the current board already has a
    /// winner, or [`MoveError::SquareOccupied`] if `pos` is taken. The game
    /// is unchanged in both cases.
    #[instrument(skip(self), fields(step = self.current_step, player = %self.next_player))]
    pub fn apply_move(&mut self, pos: Position) -> Result<Player, MoveError> {
        let board = *self.current_board();

        if let Some(win) = rules::evaluate(&board) {
            debug!(winner = %win.winner, "Move rejected: game already won");
            return Err(MoveError::GameOver(win.winner));
        }

        if !board.is_empty(pos) {
            debug!(position = %pos, "Move rejected: square occupied");
            return Err(MoveError::SquareOccupied(pos));
        }

        let player = self.next_player;
        let next_board = board.with_mark(pos, player);
        let move_number = *self
            .history
            .branch(self.current_step, next_board, pos)
            .move_number();
        self.current_step = move_number;
        self.next_player = player.opponent();

        info!(position = %pos, move_number, "Move applied");
        Ok(player)
    }

    /// Plays at a raw cell index (0-8).
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] for indices off the board, or any
    /// error from [`GameController::apply_move`].
    #[instrument(skip(self))]
    pub fn apply_index(&mut self, index: usize) -> Result<Player, MoveError> {
        let pos = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        self.apply_move(pos)
    }

    /// Shows the board at `step` without touching the history.
    ///
    /// # Errors
    ///
    /// Returns [`JumpError::OutOfRange`] if `step` is not in the history.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), JumpError> {
        if step >= self.history.len() {
            debug!("Jump rejected: step out of range");
            return Err(JumpError::OutOfRange {
                step,
                len: self.history.len(),
            });
        }

        self.current_step = step;
        self.next_player = Player::for_step(step);
        info!(step, next_player = %self.next_player, "Jumped to step");
        Ok(())
    }

    /// Flips the history display order and returns the new setting.
    #[instrument(skip(self))]
    pub fn toggle_reverse_display(&mut self) -> bool {
        self.reverse_display = !self.reverse_display;
        debug!(reverse_display = self.reverse_display, "Toggled history order");
        self.reverse_display
    }

    /// Status for the board at the current step.
    pub fn status(&self) -> Status {
        if let Some(winner) = rules::check_winner(self.current_board()) {
            Status::Winner(winner)
        } else if rules::is_full(self.current_board()) {
            Status::Draw
        } else {
            Status::NextPlayer(self.next_player)
        }
    }

    /// True if no further move can be played from the current step.
    pub fn is_terminal(&self) -> bool {
        self.status().is_terminal()
    }

    /// Winning line on the current board, if any.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        self.win().map(|win| win.line)
    }

    /// Full win evaluation of the current board.
    pub fn win(&self) -> Option<WinResult> {
        rules::evaluate(self.current_board())
    }

    /// Snapshot at the current step.
    pub fn current_snapshot(&self) -> &Snapshot {
        self.history
            .get(self.current_step)
            .unwrap_or_else(|| self.history.latest())
    }

    /// Board at the current step.
    pub fn current_board(&self) -> &Board {
        self.current_snapshot().board()
    }

    /// Index of the snapshot currently shown.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Player whose mark the next move places.
    pub fn next_player(&self) -> Player {
        self.next_player
    }

    /// Whether the history is listed newest first.
    pub fn reverse_display(&self) -> bool {
        self.reverse_display
    }

    /// All recorded snapshots.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// History entries in display order.
    pub fn history_entries(&self) -> Vec<HistoryEntry> {
        let entries = self.history.iter().map(|snap| HistoryEntry {
            step: *snap.move_number(),
            description: snap.description(),
            is_current: *snap.move_number() == self.current_step,
        });

        if self.reverse_display {
            entries.rev().collect()
        } else {
            entries.collect()
        }
    }

    /// History descriptions in display order.
    pub fn history_descriptions(&self) -> Vec<String> {
        self.history_entries()
            .into_iter()
            .map(|entry| entry.description)
            .collect()
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}
