//! Rendering and mouse tests for the terminal UI.

use ratatui::{Terminal, backend::TestBackend, buffer::Buffer, style::Modifier};
use rewind_tictactoe::{Player, Position, Status};
use rewind_tui::tui::{App, HitMap, draw};

fn render(app: &mut App) -> (Buffer, HitMap) {
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).expect("test backend");
    let mut hits = HitMap::default();
    terminal
        .draw(|f| hits = draw(f, app))
        .expect("draw succeeds");
    app.set_hits(hits.clone());
    (terminal.backend().buffer().clone(), hits)
}

fn screen_text(buffer: &Buffer) -> String {
    let width = buffer.area.width as usize;
    buffer
        .content
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn click_cell(app: &mut App, hits: &HitMap, pos: Position) {
    let (_, area) = hits
        .cells
        .iter()
        .find(|(p, _)| *p == pos)
        .expect("cell drawn");
    app.handle_click(area.x + area.width / 2, area.y + 1);
}

#[test]
fn test_initial_screen() {
    let mut app = App::new(false, true);
    let (buffer, hits) = render(&mut app);
    let text = screen_text(&buffer);

    assert!(text.contains("next player is X"));
    assert!(text.contains("[ ] Reverse moves order"));
    assert!(text.contains("> go to game start"));
    assert_eq!(hits.cells.len(), 9);
    assert_eq!(hits.history.len(), 1);
    assert!(hits.toggle.is_some());
}

#[test]
fn test_clicks_play_and_highlight_winner() {
    let mut app = App::new(false, true);
    let (_, hits) = render(&mut app);

    for pos in [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomRight,
    ] {
        click_cell(&mut app, &hits, pos);
    }
    // Occupied and post-win clicks are ignored.
    click_cell(&mut app, &hits, Position::Center);
    click_cell(&mut app, &hits, Position::TopRight);

    assert_eq!(app.game().status(), Status::Winner(Player::X));
    assert_eq!(app.game().history().len(), 6);

    let (buffer, hits) = render(&mut app);
    let text = screen_text(&buffer);
    assert!(text.contains("winner is X"));
    assert!(text.contains("move #5 at (2, 2)"));

    let (_, left) = hits
        .cells
        .iter()
        .find(|(p, _)| *p == Position::MiddleLeft)
        .expect("left cell drawn");
    let left_mark: String = (left.x..left.right())
        .map(|x| buffer[(x, left.y + 1)].symbol())
        .collect();
    assert_eq!(left_mark.trim(), "O");

    let (_, corner) = hits
        .cells
        .iter()
        .find(|(p, _)| *p == Position::BottomRight)
        .expect("corner drawn");
    let row = corner.y + 1;
    let bold = (corner.x..corner.right())
        .map(|x| &buffer[(x, row)])
        .find(|cell| cell.symbol() == "X")
        .map(|cell| cell.modifier.contains(Modifier::BOLD));
    assert_eq!(bold, Some(true));
}

#[test]
fn test_history_click_jumps_back() {
    let mut app = App::new(false, true);
    let (_, hits) = render(&mut app);
    click_cell(&mut app, &hits, Position::TopLeft);
    click_cell(&mut app, &hits, Position::Center);

    let (_, hits) = render(&mut app);
    assert_eq!(hits.history.len(), 3);
    let (step, area) = hits.history[0];
    assert_eq!(step, 0);
    app.handle_click(area.x, area.y);

    assert_eq!(app.game().current_step(), 0);
    assert_eq!(app.game().history().len(), 3);

    let (buffer, _) = render(&mut app);
    let text = screen_text(&buffer);
    assert!(text.contains("next player is X"));
    assert!(text.contains("> go to game start"));
}

#[test]
fn test_checkbox_click_reverses_history() {
    let mut app = App::new(false, true);
    let (_, hits) = render(&mut app);
    click_cell(&mut app, &hits, Position::TopLeft);

    let toggle = hits.toggle.expect("checkbox drawn");
    app.handle_click(toggle.x, toggle.y);
    assert!(app.game().reverse_display());

    let (buffer, hits) = render(&mut app);
    let text = screen_text(&buffer);
    assert!(text.contains("[x] Reverse moves order"));
    assert_eq!(hits.history[0].0, 1);
    assert_eq!(hits.history[1].0, 0);
}

#[test]
fn test_hints_can_be_hidden() {
    let mut app = App::new(false, false);
    let (buffer, hits) = render(&mut app);

    let (_, area) = hits
        .cells
        .iter()
        .find(|(p, _)| *p == Position::TopLeft)
        .expect("cell drawn");
    let shows_digit = (area.x..area.right()).any(|x| buffer[(x, area.y + 1)].symbol() == "1");
    assert!(!shows_digit);
}
