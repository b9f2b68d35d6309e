//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board). Rules are kept apart from
//! the history controller so they can be checked on any board in isolation.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, WinResult, check_winner, evaluate};
