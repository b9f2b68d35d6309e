//! Stateless UI rendering for the game and its history.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use rewind_tictactoe::{Player, Position, Square};

use super::app::{App, Focus, HitMap};

const BOARD_WIDTH: u16 = 40;
const BOARD_HEIGHT: u16 = 11;

/// Renders the whole screen and returns the clickable areas.
pub fn draw(frame: &mut Frame, app: &App) -> HitMap {
    let area = frame.area();
    let mut hits = HitMap::default();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(BOARD_HEIGHT),
            Constraint::Length(3), // Key help
        ])
        .split(area);

    let title = Paragraph::new("Rewind - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(BOARD_WIDTH + 4), Constraint::Min(20)])
        .split(chunks[1]);

    draw_board(frame, body[0], app, &mut hits);
    draw_info(frame, body[1], app, &mut hits);

    let help = Paragraph::new(
        "1-9/click: play  arrows+enter: move/select  tab: switch panel  r: reverse order  q: quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::TOP));
    frame.render_widget(help, chunks[2]);

    hits
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App, hits: &mut HitMap) {
    let board_area = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for (row, row_area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        draw_row(frame, row_area, app, row, hits);
    }
    draw_separator(frame, rows[1]);
    draw_separator(frame, rows[3]);
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, row: usize, hits: &mut HitMap) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(2),
            Constraint::Length(12),
            Constraint::Length(2),
            Constraint::Length(12),
        ])
        .split(area);

    for (col, cell_area) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
        if let Some(pos) = Position::from_coords(row, col) {
            draw_cell(frame, cell_area, app, pos);
            hits.cells.push((pos, cell_area));
        }
    }
    draw_separator_vertical(frame, cols[1]);
    draw_separator_vertical(frame, cols[3]);
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position) {
    let game = app.game();
    let square = game.current_board().get(pos);
    let winning = game.win().is_some_and(|win| win.contains(pos));

    let (symbol, mut style) = match square {
        Square::Empty if app.show_hints() => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Empty => (String::new(), Style::default()),
        Square::Occupied(Player::X) => ("X".to_string(), Style::default().fg(Color::Blue)),
        Square::Occupied(Player::O) => ("O".to_string(), Style::default().fg(Color::Red)),
    };

    if winning {
        style = style.fg(Color::Yellow).add_modifier(Modifier::BOLD);
    }
    if pos == app.cursor() && app.focus() == Focus::Board {
        style = style.bg(Color::White).fg(Color::Black);
    }

    // Vertically center the mark in the 3-line cell
    let text = vec![
        Line::default(),
        Line::from(Span::styled(format!(" {} ", symbol), style)),
    ];
    let paragraph = Paragraph::new(text).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_info(frame: &mut Frame, area: Rect, app: &App, hits: &mut HitMap) {
    let game = app.game();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Status
            Constraint::Length(1), // Order toggle
            Constraint::Min(3),    // History
        ])
        .split(area);

    let status = Paragraph::new(game.status().to_string())
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, chunks[0]);

    let checkbox = if game.reverse_display() { "[x]" } else { "[ ]" };
    let toggle = Paragraph::new(format!("{} Reverse moves order", checkbox));
    frame.render_widget(toggle, chunks[1]);
    hits.toggle = Some(chunks[1]);

    let border_style = if app.focus() == Focus::History {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title("History");
    let inner = block.inner(chunks[2]);
    frame.render_widget(block, chunks[2]);

    let entries = game.history_entries();
    let mut lines = Vec::with_capacity(entries.len());
    for (i, entry) in entries.iter().enumerate() {
        let mut style = Style::default();
        if entry.is_current {
            style = style.add_modifier(Modifier::BOLD);
        }
        if app.focus() == Focus::History && i == app.selected() {
            style = style.add_modifier(Modifier::REVERSED);
        }
        let marker = if entry.is_current { "> " } else { "  " };
        lines.push(Line::from(Span::styled(
            format!("{}{}", marker, entry.description),
            style,
        )));

        let y = inner.y.saturating_add(i as u16);
        if y < inner.bottom() {
            hits.history
                .push((entry.step, Rect::new(inner.x, y, inner.width, 1)));
        }
    }
    frame.render_widget(Paragraph::new(lines), inner);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); area.height as usize])
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
