use super::App;
use crate::game::{Cell, Grid, PlayerKind, Round, COLUMN_COUNT, ROW_COUNT};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(11),   // Grid
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, app.round(), chunks[0]);
    render_grid(frame, app.round(), app.selected_column(), chunks[1]);
    render_message(frame, app.message(), chunks[2]);
    render_controls(frame, chunks[3]);
}

fn player_color(kind: PlayerKind) -> Color {
    match kind {
        PlayerKind::Human => Color::Yellow,
        PlayerKind::Ai => Color::Red,
    }
}

fn render_header(frame: &mut Frame, round: &Round, area: Rect) {
    let current = round.current_player();

    let status = if round.is_over() {
        "Game Over".to_string()
    } else {
        format!("Current Player: {} ({})", current.name(), current.marker())
    };

    let header = Paragraph::new(status)
        .style(
            Style::default()
                .fg(player_color(current.kind()))
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Connect Four"));

    frame.render_widget(header, area);
}

fn cell_span(round: &Round, cell: Cell) -> Span<'static> {
    match cell {
        Cell::Empty => Span::styled(" . ", Style::default().fg(Color::DarkGray)),
        Cell::Occupied(marker) => {
            let kind = round
                .players()
                .iter()
                .find(|p| p.marker() == marker)
                .map(|p| p.kind())
                .unwrap_or(PlayerKind::Human);
            Span::styled(
                format!(" {} ", marker),
                Style::default()
                    .fg(player_color(kind))
                    .add_modifier(Modifier::BOLD),
            )
        }
    }
}

fn grid_lines(round: &Round, selected_column: usize) -> Vec<Line<'static>> {
    let grid: &Grid = round.grid();
    let mut lines = Vec::with_capacity(ROW_COUNT + 4);

    // Column numbers with selection indicator
    let mut numbers = vec![Span::raw("   ")];
    for column in 0..COLUMN_COUNT {
        let label = format!(" {} ", column + 1);
        if column == selected_column {
            numbers.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            numbers.push(Span::raw(label));
        }
    }
    numbers.push(Span::raw("  "));
    lines.push(Line::from(numbers));

    lines.push(Line::from("  ╔══════════════════════╗"));

    let mut row_spans = Vec::new();
    for (_, column, cell) in grid.cells() {
        if column == 0 {
            row_spans.push(Span::raw("  ║"));
        }
        row_spans.push(cell_span(round, cell));
        if column == COLUMN_COUNT - 1 {
            row_spans.push(Span::raw(" ║"));
            lines.push(Line::from(std::mem::take(&mut row_spans)));
        }
    }

    lines.push(Line::from("  ╚══════════════════════╝"));

    let mut indicator = vec![Span::raw("   ")];
    for column in 0..COLUMN_COUNT {
        if column == selected_column {
            indicator.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator.push(Span::raw("   "));
        }
    }
    indicator.push(Span::raw("  "));
    lines.push(Line::from(indicator));

    lines
}

fn render_grid(frame: &mut Frame, round: &Round, selected_column: usize, area: Rect) {
    let widget = Paragraph::new(grid_lines(round, selected_column)).alignment(Alignment::Center);
    frame.render_widget(widget, area);
}

fn render_message(frame: &mut Frame, message: Option<&str>, area: Rect) {
    let msg_widget = Paragraph::new(message.unwrap_or(""))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let controls = Paragraph::new("←/→: Move  |  1-7/Enter: Drop  |  R: New round  |  Q: Quit")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
