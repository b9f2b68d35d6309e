//! Command-line interface for rewind.

use crate::replay::ReplayStep;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Rewind - tic-tac-toe with a time-travelling move history
#[derive(Parser, Debug)]
#[command(name = "rewind")]
#[command(about = "Tic-tac-toe with a time-travelling move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Path to the settings file (missing file means defaults)
        #[arg(short, long, default_value = "rewind.toml")]
        config: PathBuf,

        /// List the move history newest first
        #[arg(long)]
        reverse: bool,
    },

    /// Replay moves without a UI and print the resulting game
    Replay {
        /// Cells to play (0-8 or a label like "center"); `@N` jumps to step N
        #[arg(required = true)]
        steps: Vec<ReplayStep>,

        /// List the move history newest first
        #[arg(long)]
        reverse: bool,

        /// Print the game as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Command {
    /// The command used when none is given on the command line.
    pub fn default_play() -> Self {
        Command::Play {
            config: PathBuf::from("rewind.toml"),
            reverse: false,
        }
    }
}
