//! Stateless UI rendering for tic-tac-toe.
//!
//! Layout is computed by [`screen_layout`] so that drawing and mouse hit
//! testing always agree on where each cell sits.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::app::App;
use crate::games::tictactoe::{GameStatus, Player, Position, Square};

/// Width of one board cell, borders included.
pub const CELL_WIDTH: u16 = 9;
/// Height of one board cell, borders included.
pub const CELL_HEIGHT: u16 = 3;

const RESTART_WIDTH: u16 = 13;

/// Screen regions for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Title bar.
    pub title: Rect,
    /// Status line.
    pub status: Rect,
    /// The nine cells in index order.
    pub cells: [Rect; 9],
    /// Restart button.
    pub restart: Rect,
    /// Help and accessibility line.
    pub footer: Rect,
}

/// A clickable element under the mouse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    /// A board cell.
    Cell(Position),
    /// The restart button.
    Restart,
}

/// Splits `area` into the screen regions.
pub fn screen_layout(area: Rect) -> ScreenLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),               // Title
            Constraint::Length(3),               // Status
            Constraint::Min(CELL_HEIGHT * 3),    // Board
            Constraint::Length(3),               // Restart
            Constraint::Length(3),               // Footer
        ])
        .split(area);

    let board = center_rect(chunks[2], CELL_WIDTH * 3, CELL_HEIGHT * 3);
    let cells = std::array::from_fn(|index| {
        let (row, col) = ((index / 3) as u16, (index % 3) as u16);
        Rect::new(
            board.x + col * CELL_WIDTH,
            board.y + row * CELL_HEIGHT,
            CELL_WIDTH,
            CELL_HEIGHT,
        )
        .intersection(board)
    });

    ScreenLayout {
        title: chunks[0],
        status: chunks[1],
        cells,
        restart: center_rect(chunks[3], RESTART_WIDTH, 3),
        footer: chunks[4],
    }
}

/// Finds the clickable element at a terminal coordinate.
pub fn hit_test(area: Rect, column: u16, row: u16) -> Option<Hit> {
    let layout = screen_layout(area);
    if let Some(index) = layout
        .cells
        .iter()
        .position(|cell| contains(*cell, column, row))
    {
        return Position::from_index(index).map(Hit::Cell);
    }
    contains(layout.restart, column, row).then_some(Hit::Restart)
}

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let theme = app.theme();
    let layout = screen_layout(frame.area());

    frame.render_widget(
        Block::default().style(Style::default().bg(theme.background).fg(theme.text)),
        frame.area(),
    );

    // Title
    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(theme.accent).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(theme.muted)),
        );
    frame.render_widget(title, layout.title);

    // Status
    let status = Paragraph::new(app.game().status_text())
        .style(Style::default().fg(theme.text).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.muted)),
        );
    frame.render_widget(status, layout.status);

    for pos in Position::ALL {
        draw_cell(frame, layout.cells[pos.to_index()], app, pos);
    }

    let restart = Paragraph::new("Restart")
        .style(Style::default().fg(theme.accent).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(theme.accent)),
        );
    frame.render_widget(restart, layout.restart);

    let footer = Paragraph::new(vec![
        Line::from(app.game().cell_label(app.cursor())),
        Line::from("Arrows: move | Enter/Space/1-9/click: place | R: restart | Q: quit"),
    ])
    .style(Style::default().fg(theme.muted))
    .alignment(Alignment::Center);
    frame.render_widget(footer, layout.footer);
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position) {
    let theme = app.theme();
    let game = app.game();

    let (symbol, mut style) = match game.board().get(pos) {
        Square::Empty => (
            pos.number().to_string(),
            Style::default().fg(theme.muted).add_modifier(Modifier::DIM),
        ),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(theme.secondary).add_modifier(Modifier::BOLD),
        ),
    };

    if let GameStatus::Won { line, .. } = game.status() {
        if line.contains(&pos) {
            style = style.bg(theme.win);
        }
    }
    if app.pulse().is_some_and(|pulse| pulse.position() == pos) {
        style = style.bg(theme.pulse).add_modifier(Modifier::BOLD);
    }

    let block = if pos == app.cursor() {
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Thick)
            .border_style(Style::default().fg(theme.cursor))
    } else {
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.muted))
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(symbol, style)))
        .alignment(Alignment::Center)
        .style(style)
        .block(block);

    frame.render_widget(paragraph, area);
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
