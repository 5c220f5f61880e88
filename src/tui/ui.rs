//! Stateless UI rendering for the game.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::app::App;
use noughts_core::{Board, Cell, Outcome, Player, Position, Statistics};

const STATS_WIDTH: u16 = 24;

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let (main, stats) = if app.show_statistics() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(40), Constraint::Length(STATS_WIDTH)])
            .split(area);
        (cols[0], Some(cols[1]))
    } else {
        (area, None)
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Heading
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Footer
        ])
        .split(main);

    let state = app.engine().state();

    let heading = Paragraph::new(format!("Next turn: {}", state.current_player()))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(heading, chunks[0]);

    draw_board(frame, chunks[1], state.board(), app.cursor());
    draw_footer(frame, chunks[2], app);

    if let Some(area) = stats {
        draw_statistics(frame, area, state.statistics());
    }

    if state.outcome().is_terminal() {
        draw_game_over(frame, area, state.outcome());
    }
}

fn draw_board(frame: &mut Frame, area: Rect, board: &Board, cursor: Position) {
    let board_area = center_rect(area, 38, 11);

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

    for row in 0..3 {
        draw_row(frame, rows[row * 2], board, cursor, row);
        if row < 2 {
            let sep = Paragraph::new("─".repeat(board_area.width as usize))
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(sep, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, board: &Board, cursor: Position, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for col in 0..3 {
        if let Some(pos) = Position::from_row_col(row, col) {
            draw_cell(frame, cols[col * 2], board, cursor, pos);
        }
        if col < 2 {
            let sep = Paragraph::new(vec![Line::from("│"); 3])
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(sep, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, board: &Board, cursor: Position, pos: Position) {
    let label = (pos.to_index() + 1).to_string();
    let (symbol, base_style) = match board.get(pos) {
        Cell::Empty => (label.as_str(), Style::default().fg(Color::DarkGray)),
        Cell::Mark(Player::X) => (
            "X",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Cell::Mark(Player::O) => (
            "O",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if pos == cursor {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    // Vertically center the symbol in the 3-line cell
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(format!(" {} ", symbol), style)),
        Line::from(""),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &App) {
    let reset_hint = if app.reset_enabled() {
        "[r] Reset"
    } else {
        "Reset unavailable"
    };
    let text = if app.status_message().is_empty() {
        format!("arrows/1-9 select  ·  {}  ·  [q] Quit", reset_hint)
    } else {
        format!("{}  ·  {}  ·  [q] Quit", app.status_message(), reset_hint)
    };

    let footer = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}

fn draw_statistics(frame: &mut Frame, area: Rect, stats: &Statistics) {
    let lines = vec![
        Line::from(format!("Total games: {}", stats.total_games())),
        Line::from("─".repeat(STATS_WIDTH.saturating_sub(2) as usize)),
        Line::from(format!("X wins: {}", stats.x_wins())),
        Line::from(format!("O wins: {}", stats.o_wins())),
        Line::from(format!("Draws: {}", stats.draws())),
    ];

    let block = Block::default().borders(Borders::ALL).title("Statistics");
    let panel = Paragraph::new(lines).block(block);
    frame.render_widget(panel, area);
}

fn draw_game_over(frame: &mut Frame, area: Rect, outcome: Outcome) {
    let dialog = center_rect(area, 32, 7);

    let lines = vec![
        Line::from(""),
        Line::from(outcome.to_string()),
        Line::from(""),
        Line::from(Span::styled(
            "[Enter] OK",
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Game Over")
                .style(Style::default().fg(Color::White).bg(Color::Black)),
        );

    frame.render_widget(Clear, dialog);
    frame.render_widget(paragraph, dialog);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
