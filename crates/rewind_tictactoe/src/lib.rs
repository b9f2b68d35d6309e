//! Tic-tac-toe with a time-travelling move history.
//!
//! The crate is pure game logic with no I/O. Front ends drive a
//! [`GameController`] with three intents (play a cell, jump to a step,
//! flip the history order) and read back the board, status and history.
//!
//! ```
//! use rewind_tictactoe::{GameController, Position, Status, Player};
//!
//! let mut game = GameController::new();
//! for cell in [0, 3, 4, 5, 8] {
//!     game.apply_index(cell).unwrap();
//! }
//! assert_eq!(game.status(), Status::Winner(Player::X));
//! assert_eq!(
//!     game.winning_line(),
//!     Some([Position::TopLeft, Position::Center, Position::BottomRight])
//! );
//!
//! game.jump_to(0).unwrap();
//! assert_eq!(game.status().to_string(), "next player is X");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod controller;
mod history;
mod position;
pub mod rules;
mod status;
mod types;

pub use action::{JumpError, MoveError};
pub use controller::{GameController, HistoryEntry};
pub use history::{History, Snapshot};
pub use position::{Position, column, row};
pub use rules::{WinResult, evaluate};
pub use status::Status;
pub use types::{Board, Player, Square};
