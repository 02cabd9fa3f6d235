//! Stateless UI rendering for the board, status line, and move list.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictac_rewind::{GameView, Player, Position, Square};

use super::app::App;

const HELP: &str = "arrows move | enter/1-9 play | [ ] step | home/end | r restart | q quit";

/// Renders one frame from a fresh view of the app's session.
pub fn draw(frame: &mut Frame, app: &App) {
    let view = app.view();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(3), // Status
            Constraint::Min(11),   // Board + moves
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let status = Paragraph::new(view.status_text())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[1]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[2]);

    draw_board(frame, body[0], &view, app.cursor());
    draw_moves(frame, body[1], &view);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn draw_board(frame: &mut Frame, area: Rect, view: &GameView, cursor: Position) {
    let block = Block::default().title("Board").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let board_area = center_rect(inner, 17, 5);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1); 5])
        .split(board_area);

    for row in 0..3 {
        let mut spans = Vec::with_capacity(5);
        for col in 0..3 {
            if let Some(pos) = Position::from_row_col(row, col) {
                let is_winning = view.winning_line().is_some_and(|line| line.contains(pos));
                let square = view.board().get(pos);
                spans.push(Span::styled(
                    cell_symbol(square, pos),
                    cell_style(square, is_winning, pos == cursor),
                ));
            }
            if col < 2 {
                spans.push(Span::styled("|", Style::default().fg(Color::DarkGray)));
            }
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), rows[row * 2]);

        if row < 2 {
            let sep = Paragraph::new("-----+-----+-----").style(Style::default().fg(Color::DarkGray));
            frame.render_widget(sep, rows[row * 2 + 1]);
        }
    }
}

fn draw_moves(frame: &mut Frame, area: Rect, view: &GameView) {
    let lines: Vec<Line> = view
        .moves()
        .iter()
        .map(|entry| {
            let style = if entry.is_current {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Line::from(Span::styled(format!("{}. {}", entry.index, entry.label()), style))
        })
        .collect();

    let moves = Paragraph::new(lines).block(Block::default().title("Moves").borders(Borders::ALL));
    frame.render_widget(moves, area);
}

/// Empty cells show their key (1-9) so they can be played directly.
fn cell_symbol(square: Square, pos: Position) -> String {
    match square {
        Square::Empty => format!("  {}  ", pos.to_index() + 1),
        Square::Occupied(player) => format!("  {}  ", player),
    }
}

/// Style of one cell: winning-line marks in red, cursor inverted.
fn cell_style(square: Square, is_winning: bool, is_cursor: bool) -> Style {
    let base = match square {
        Square::Empty => Style::default().fg(Color::DarkGray),
        Square::Occupied(_) if is_winning => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        Square::Occupied(Player::X) => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        Square::Occupied(Player::O) => Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
    };

    if is_cursor {
        base.add_modifier(Modifier::REVERSED)
    } else {
        base
    }
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_winning_mark_is_red() {
        let style = cell_style(Square::Occupied(Player::O), true, false);
        assert_eq!(style.fg, Some(Color::Red));
    }

    #[test]
    fn test_marks_differ_by_player() {
        let x = cell_style(Square::Occupied(Player::X), false, false);
        let o = cell_style(Square::Occupied(Player::O), false, false);
        assert_ne!(x.fg, o.fg);
        assert_ne!(x.fg, Some(Color::Red));
    }

    #[test]
    fn test_cursor_is_reversed() {
        let style = cell_style(Square::Empty, false, true);
        assert!(style.add_modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn test_cell_symbol() {
        assert_eq!(cell_symbol(Square::Empty, Position::TopLeft), "  1  ");
        assert_eq!(cell_symbol(Square::Occupied(Player::X), Position::Center), "  X  ");
    }
}
