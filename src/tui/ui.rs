//! Stateless UI rendering for the game.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app::App;
use noughts_engine::{GameState, Marker, Square, WinningLine};

const HELP: &str = "arrows move · enter place · r restart · a retry AI · q quit";

/// Renders title, board, status and key help.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let size = app.state().board().size().get() as u16;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),         // Title
            Constraint::Min(size * 2 - 1), // Board
            Constraint::Length(3),         // Status
            Constraint::Length(1),         // Help
        ])
        .split(area);

    let title = Paragraph::new(app.title())
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let board_area = center_rect(chunks[1], size * 4 - 1, size * 2 - 1);
    let board = Paragraph::new(board_lines(app.state(), app.cursor(), app.winning_line()));
    frame.render_widget(board, board_area);

    let status = Paragraph::new(app.status())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

/// Builds the board as text lines: cells separated by box-drawing rules.
pub fn board_lines(
    state: &GameState,
    cursor: usize,
    winning: Option<&WinningLine>,
) -> Vec<Line<'static>> {
    let board = state.board();
    let n = board.size().get();
    let rule = Style::default().fg(Color::DarkGray);

    let mut lines = Vec::with_capacity(n * 2);
    for row in 0..n {
        let mut spans = Vec::with_capacity(n * 2);
        for col in 0..n {
            if col > 0 {
                spans.push(Span::styled("│", rule));
            }
            let index = board.index_of(row, col);
            spans.push(cell_span(
                board.get(index).unwrap_or(Square::Empty),
                index == cursor,
                winning.is_some_and(|line| line.contains(index)),
            ));
        }
        lines.push(Line::from(spans));

        if row + 1 < n {
            lines.push(Line::from(Span::styled(vec!["───"; n].join("┼"), rule)));
        }
    }
    lines
}

fn cell_span(square: Square, is_cursor: bool, is_winning: bool) -> Span<'static> {
    let (symbol, base_style) = match square {
        Square::Empty => ("   ", Style::default().fg(Color::DarkGray)),
        Square::Occupied(Marker::X) => (
            " X ",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Marker::O) => (
            " O ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if is_cursor {
        base_style.bg(Color::White).fg(Color::Black)
    } else if is_winning {
        base_style.bg(Color::Green).fg(Color::Black)
    } else {
        base_style
    };

    Span::styled(symbol, style)
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
