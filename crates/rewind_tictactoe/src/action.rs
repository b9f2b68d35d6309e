//! Rejection types for player intents.
//!
//! A rejected intent never changes the game. Callers that only care about
//! the resulting state may ignore these errors entirely.

use super::{Player, Position};

/// Error returned when a move cannot be applied to the current board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The board being played on already has a winner.
    #[display("Game is already over: {} won", _0)]
    GameOver(Player),

    /// The raw cell index is not on the board.
    #[display("Cell index {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),
}

impl std::error::Error for MoveError {}

/// Error returned when a history jump targets a step that does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum JumpError {
    /// The step is past the end of the history.
    #[display("Step {} is out of range (history has {} entries)", step, len)]
    OutOfRange {
        /// Requested step.
        step: usize,
        /// History length at the time of the request.
        len: usize,
    },
}

impl std::error::Error for JumpError {}
