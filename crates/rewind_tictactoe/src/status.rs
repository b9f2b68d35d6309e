//! Derived game status.

use super::Player;
use serde::{Deserialize, Serialize};

/// What the status line shows for the current step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Status {
    /// The current board has a completed line.
    #[display("winner is {}", _0)]
    Winner(Player),
    /// All nine squares are filled with no line.
    #[display("draw")]
    Draw,
    /// Play continues with the given player.
    #[display("next player is {}", _0)]
    NextPlayer(Player),
}

impl Status {
    /// True once no further move can be played.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Status::NextPlayer(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_text() {
        assert_eq!(Status::Winner(Player::X).to_string(), "winner is X");
        assert_eq!(Status::Draw.to_string(), "draw");
        assert_eq!(Status::NextPlayer(Player::O).to_string(), "next player is O");
    }
}
