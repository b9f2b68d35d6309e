//! Rewind front end: terminal UI and headless replay for time-travel tic-tac-toe.
//!
//! Game rules and history live in [`rewind_tictactoe`]; this crate only
//! turns key presses and clicks into controller calls and draws the result.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod logging;
pub mod replay;
pub mod tui;

pub use cli::{Cli, Command};
pub use config::{ConfigError, Settings};
pub use replay::{GameView, ReplayStep, render, replay};
