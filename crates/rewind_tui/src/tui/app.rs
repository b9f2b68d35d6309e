//! Application state and intent dispatch.

use super::input::{self, Action};
use crossterm::event::KeyCode;
use ratatui::layout::{Position as ScreenPos, Rect};
use rewind_tictactoe::{GameController, Position};
use tracing::{debug, instrument};

/// Which panel receives arrow keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys move the history selection.
    History,
}

/// Screen areas recorded by the last draw, used to resolve mouse clicks.
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    /// One area per board cell.
    pub cells: Vec<(Position, Rect)>,
    /// One line per history entry, tagged with its step.
    pub history: Vec<(usize, Rect)>,
    /// The order checkbox.
    pub toggle: Option<Rect>,
}

impl HitMap {
    fn cell_at(&self, point: ScreenPos) -> Option<Position> {
        self.cells
            .iter()
            .find(|(_, area)| area.contains(point))
            .map(|(pos, _)| *pos)
    }

    fn step_at(&self, point: ScreenPos) -> Option<usize> {
        self.history
            .iter()
            .find(|(_, area)| area.contains(point))
            .map(|(step, _)| *step)
    }
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    game: GameController,
    show_hints: bool,
    cursor: Position,
    focus: Focus,
    selected: usize,
    hits: HitMap,
    running: bool,
}

impl App {
    /// Creates a new application.
    pub fn new(reverse_history: bool, show_hints: bool) -> Self {
        Self {
            game: GameController::with_reverse_display(reverse_history),
            show_hints,
            cursor: Position::Center,
            focus: Focus::Board,
            selected: 0,
            hits: HitMap::default(),
            running: true,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameController {
        &self.game
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused panel.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Selected history line, as an index into the displayed list.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Whether empty cells show their key hint.
    pub fn show_hints(&self) -> bool {
        self.show_hints
    }

    /// False once the user asked to quit.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Stores the areas from the latest draw.
    pub fn set_hits(&mut self, hits: HitMap) {
        self.hits = hits;
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        match input::action_for(key, self.focus) {
            Action::Quit => self.running = false,
            Action::Play(pos) => self.play(pos),
            Action::MoveCursor(key) => {
                self.cursor = input::move_cursor(self.cursor, key);
            }
            Action::MoveSelection(delta) => {
                let last = self.game.history().len() - 1;
                self.selected = self.selected.saturating_add_signed(delta).min(last);
            }
            Action::Activate => match self.focus {
                Focus::Board => self.play(self.cursor),
                Focus::History => self.jump_to_selected(),
            },
            Action::SwitchFocus => {
                self.focus = match self.focus {
                    Focus::Board => Focus::History,
                    Focus::History => Focus::Board,
                };
                self.select_current();
            }
            Action::ToggleOrder => self.toggle_order(),
            Action::Ignore => {}
        }
    }

    /// Handles a left click at a terminal cell.
    #[instrument(skip(self))]
    pub fn handle_click(&mut self, column: u16, row: u16) {
        let point = ScreenPos::new(column, row);
        if let Some(pos) = self.hits.cell_at(point) {
            self.cursor = pos;
            self.focus = Focus::Board;
            self.play(pos);
        } else if let Some(step) = self.hits.step_at(point) {
            self.focus = Focus::History;
            self.jump(step);
        } else if self.hits.toggle.is_some_and(|area| area.contains(point)) {
            self.toggle_order();
        }
    }

    fn play(&mut self, pos: Position) {
        // Illegal moves are a no-op for the player; the reason only goes to the log.
        if let Err(e) = self.game.apply_move(pos) {
            debug!(error = %e, "Ignoring move");
        }
        self.select_current();
    }

    fn jump(&mut self, step: usize) {
        if let Err(e) = self.game.jump_to(step) {
            debug!(error = %e, "Ignoring jump");
        }
        self.select_current();
    }

    fn jump_to_selected(&mut self) {
        if let Some(entry) = self.game.history_entries().get(self.selected) {
            self.jump(entry.step);
        }
    }

    fn toggle_order(&mut self) {
        self.game.toggle_reverse_display();
        self.select_current();
    }

    /// Points the history selection at the current step.
    fn select_current(&mut self) {
        self.selected = self
            .game
            .history_entries()
            .iter()
            .position(|entry| entry.is_current)
            .unwrap_or(0);
    }
}
