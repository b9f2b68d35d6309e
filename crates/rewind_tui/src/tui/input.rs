//! Keyboard mapping and cursor movement.

use super::app::Focus;
use crossterm::event::KeyCode;
use rewind_tictactoe::Position;

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Leave the program.
    Quit,
    /// Play the next mark at a cell.
    Play(Position),
    /// Move the board cursor.
    MoveCursor(KeyCode),
    /// Move the history selection up (-1) or down (+1).
    MoveSelection(isize),
    /// Play at the cursor, or jump to the selected history entry.
    Activate,
    /// Switch focus between board and history.
    SwitchFocus,
    /// Flip the history order.
    ToggleOrder,
    /// Key has no binding.
    Ignore,
}

/// Maps a key to an action given the focused panel.
pub fn action_for(key: KeyCode, focus: Focus) -> Action {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('r') => Action::ToggleOrder,
        KeyCode::Tab | KeyCode::BackTab => Action::SwitchFocus,
        KeyCode::Enter | KeyCode::Char(' ') => Action::Activate,
        KeyCode::Char(c) => c
            .to_digit(10)
            .filter(|d| (1..=9).contains(d))
            .and_then(|d| Position::from_index(d as usize - 1))
            .map_or(Action::Ignore, Action::Play),
        KeyCode::Up | KeyCode::Down if focus == Focus::History => {
            Action::MoveSelection(if key == KeyCode::Up { -1 } else { 1 })
        }
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => Action::MoveCursor(key),
        _ => Action::Ignore,
    }
}

/// Moves cursor based on arrow keys.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.column());
    let target = match key {
        KeyCode::Right => Position::from_coords(row, col + 1),
        KeyCode::Left => col.checked_sub(1).and_then(|c| Position::from_coords(row, c)),
        KeyCode::Down => Position::from_coords(row + 1, col),
        KeyCode::Up => row.checked_sub(1).and_then(|r| Position::from_coords(r, col)),
        _ => None,
    };
    // No change at the edges or for other keys
    target.unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_play_cells() {
        assert_eq!(
            action_for(KeyCode::Char('1'), Focus::Board),
            Action::Play(Position::TopLeft)
        );
        assert_eq!(
            action_for(KeyCode::Char('9'), Focus::History),
            Action::Play(Position::BottomRight)
        );
        assert_eq!(action_for(KeyCode::Char('0'), Focus::Board), Action::Ignore);
    }

    #[test]
    fn test_arrows_depend_on_focus() {
        assert_eq!(
            action_for(KeyCode::Up, Focus::Board),
            Action::MoveCursor(KeyCode::Up)
        );
        assert_eq!(action_for(KeyCode::Up, Focus::History), Action::MoveSelection(-1));
        assert_eq!(action_for(KeyCode::Down, Focus::History), Action::MoveSelection(1));
    }

    #[test]
    fn test_move_cursor_stops_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Right), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Down), Position::BottomCenter);
        assert_eq!(
            move_cursor(Position::BottomRight, KeyCode::Right),
            Position::BottomRight
        );
    }
}
