//! Headless replay: drive a game from a list of steps and print the result.

use anyhow::{Context, Result};
use rewind_tictactoe::{GameController, HistoryEntry, Player, Position, Square};
use serde::Serialize;
use std::fmt::Write as _;
use std::str::FromStr;
use tracing::{info, instrument, warn};

/// One scripted intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayStep {
    /// Play the next mark at a cell.
    Play(Position),
    /// Jump to a history step.
    Jump(usize),
}

impl FromStr for ReplayStep {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(step) = s.strip_prefix('@') {
            return step
                .trim()
                .parse::<usize>()
                .map(ReplayStep::Jump)
                .map_err(|_| format!("invalid jump target: {}", s));
        }
        Position::from_label_or_number(s)
            .map(ReplayStep::Play)
            .ok_or_else(|| format!("invalid cell: {} (expected 0-8 or a label)", s))
    }
}

impl std::fmt::Display for ReplayStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReplayStep::Play(pos) => write!(f, "{}", pos.to_index()),
            ReplayStep::Jump(step) => write!(f, "@{}", step),
        }
    }
}

/// Read-only view of a game, as printed by `replay`.
#[derive(Debug, Clone, Serialize)]
pub struct GameView {
    /// Cells in row-major order; `None` for empty.
    pub board: [Option<Player>; 9],
    /// Status line text.
    pub status: String,
    /// Step currently shown.
    pub current_step: usize,
    /// Winning line on the shown board, if any.
    pub winning_line: Option<[Position; 3]>,
    /// History in display order.
    pub history: Vec<HistoryEntry>,
    /// Steps that were ignored, with the reason.
    pub rejected: Vec<String>,
}

impl GameView {
    /// Captures the controller's current state.
    pub fn capture(game: &GameController, rejected: Vec<String>) -> Self {
        let board = (*game.current_board().squares()).map(Square::player);
        Self {
            board,
            status: game.status().to_string(),
            current_step: game.current_step(),
            winning_line: game.winning_line(),
            history: game.history_entries(),
            rejected,
        }
    }
}

/// Applies `steps` to a fresh game. Illegal steps are skipped and recorded.
#[instrument(skip(steps), fields(count = steps.len()))]
pub fn replay(steps: &[ReplayStep], reverse: bool) -> GameView {
    let mut game = GameController::with_reverse_display(reverse);
    let mut rejected = Vec::new();

    for step in steps {
        let outcome = match step {
            ReplayStep::Play(pos) => game.apply_move(*pos).map(|_| ()).map_err(|e| e.to_string()),
            ReplayStep::Jump(target) => game.jump_to(*target).map_err(|e| e.to_string()),
        };
        if let Err(reason) = outcome {
            warn!(%step, %reason, "Step ignored");
            rejected.push(format!("{}: {}", step, reason));
        }
    }

    info!(status = %game.status(), step = game.current_step(), "Replay finished");
    GameView::capture(&game, rejected)
}

/// Renders a replay as plain text or JSON.
pub fn render(view: &GameView, json: bool) -> Result<String> {
    if json {
        return serde_json::to_string_pretty(view).context("Failed to serialize game view");
    }

    let mut out = String::new();
    for row in 0..3 {
        let cells: Vec<String> = (0..3)
            .map(|col| {
                let index = row * 3 + col;
                match view.board[index] {
                    Some(player) => player.to_string(),
                    None => ".".to_string(),
                }
            })
            .collect();
        writeln!(out, "{}", cells.join(" "))?;
    }
    writeln!(out)?;
    writeln!(out, "{}", view.status)?;
    writeln!(out)?;
    for entry in &view.history {
        let marker = if entry.is_current { ">" } else { " " };
        writeln!(out, "{} {}. {}", marker, entry.step, entry.description)?;
    }
    for reason in &view.rejected {
        writeln!(out, "ignored {}", reason)?;
    }
    Ok(out)
}
