use crate::game::{Cell, Phase, PlayerId, SessionState};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::animation::DropAnimation;

const TOKEN: &str = " ● ";
const EMPTY: &str = " . ";
const BLANK: &str = "   ";

pub fn player_color(player: PlayerId) -> Color {
    match player {
        PlayerId::First => Color::Red,
        PlayerId::Second => Color::Cyan,
    }
}

pub fn render(
    frame: &mut Frame,
    state: &SessionState,
    selected_column: usize,
    animation: Option<&DropAnimation>,
    message: &Option<String>,
) {
    let board_height = state.grid.height() as u16 + 5;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Header
            Constraint::Min(board_height),    // Board
            Constraint::Length(3),            // Message
            Constraint::Length(3),            // Controls
        ])
        .split(frame.area());

    render_header(frame, state, animation.is_some(), chunks[0]);
    render_board(frame, state, selected_column, animation, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn render_header(frame: &mut Frame, state: &SessionState, animating: bool, area: Rect) {
    // Hold the result back until the last token has landed
    let (status, color) = match state.phase {
        Phase::Won(player) if !animating => (state.phase.to_string(), player_color(player)),
        Phase::Tied if !animating => (state.phase.to_string(), Color::Yellow),
        _ => (
            format!("{}'s Turn", state.current_player.name()),
            player_color(state.current_player),
        ),
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Connect 4"));

    frame.render_widget(header, area);
}

fn render_board(
    frame: &mut Frame,
    state: &SessionState,
    selected_column: usize,
    animation: Option<&DropAnimation>,
    area: Rect,
) {
    let width = state.grid.width();
    let height = state.grid.height();
    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")];
    for col in 0..width {
        let label = format!("{:^3}", col + 1);
        if col == selected_column {
            col_line.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(label));
        }
    }
    col_line.push(Span::raw("  "));
    lines.push(Line::from(col_line));

    // Hovering token: the falling one while animating, otherwise the current
    // player's token over the selected column
    let hover = match animation {
        Some(anim) if anim.current_row() >= height => Some((anim.column, anim.owner)),
        Some(_) => None,
        None if !state.phase.is_terminal() => Some((selected_column, state.current_player)),
        None => None,
    };
    let mut hover_line = vec![Span::raw("   ")];
    for col in 0..width {
        match hover {
            Some((c, owner)) if c == col => hover_line.push(Span::styled(
                TOKEN,
                Style::default().fg(player_color(owner)),
            )),
            _ => hover_line.push(Span::raw(BLANK)),
        }
    }
    hover_line.push(Span::raw("  "));
    lines.push(Line::from(hover_line));

    let rule = "═".repeat(width * 3 + 1);
    lines.push(Line::from(format!("  ╔{rule}╗")));

    for row in (0..height).rev() {
        let mut row_spans = vec![Span::raw("  ║")];
        for col in 0..width {
            row_spans.push(cell_span(state, animation, col, row));
        }
        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{rule}╝")));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn cell_span(
    state: &SessionState,
    animation: Option<&DropAnimation>,
    col: usize,
    row: usize,
) -> Span<'static> {
    if let Some(anim) = animation {
        if anim.column == col {
            if anim.current_row() == row {
                return Span::styled(TOKEN, Style::default().fg(player_color(anim.owner)));
            }
            // The landing cell is committed but not drawn until the token arrives
            if anim.target_row == row {
                return Span::styled(EMPTY, Style::default().fg(Color::DarkGray));
            }
        }
    }

    match state.cell_at(col, row) {
        Cell::Empty => Span::styled(EMPTY, Style::default().fg(Color::DarkGray)),
        Cell::Owner(owner) => {
            let mut style = Style::default().fg(player_color(owner));
            let in_run = state
                .winning_run
                .as_ref()
                .is_some_and(|run| run.contains(col, row));
            if in_run && animation.is_none() {
                style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
            }
            Span::styled(TOKEN, style)
        }
    }
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let controls = Paragraph::new("←/→: Move  |  Space/Enter: Drop  |  R: Restart  |  Q: Quit")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
