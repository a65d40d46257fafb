use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;

pub fn draw(f: &mut Frame, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
        .split(f.area());
    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)].as_ref())
        .split(rows[0]);

    // Source panel, scrolled so the cursor stays visible
    let (row, col) = app.cursor_position();
    let inner_height = panes[0].height.saturating_sub(2) as usize;
    let scroll = (row + 1).saturating_sub(inner_height);
    let source: Vec<Line> = app.source_lines().into_iter().map(Line::from).collect();
    let source = Paragraph::new(source)
        .block(Block::default().borders(Borders::ALL).title(app.title()))
        .scroll((scroll as u16, 0));
    f.render_widget(source, panes[0]);
    f.set_cursor_position((
        panes[0].x + 1 + col as u16,
        panes[0].y + 1 + row.saturating_sub(scroll) as u16,
    ));

    // Token panel
    let mode = if app.session().options().live_preview {
        "Tokens (live preview)"
    } else {
        "Tokens (full render)"
    };
    let tokens: Vec<Line> = app
        .token_lines()
        .into_iter()
        .map(|line| {
            let style = if line.ends_with("(hidden)") {
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::DIM)
            } else {
                Style::default()
            };
            Line::from(Span::styled(line, style))
        })
        .collect();
    let tokens = Paragraph::new(tokens).block(Block::default().borders(Borders::ALL).title(mode));
    f.render_widget(tokens, panes[1]);

    let help = Line::from(vec![
        Span::raw("Esc: Quit | "),
        Span::raw("F2: Toggle live preview | "),
        Span::raw("Ctrl-S: Save"),
        Span::styled(
            if app.status.is_empty() {
                String::new()
            } else {
                format!(" | {}", app.status)
            },
            Style::default().fg(Color::Yellow),
        ),
    ]);
    f.render_widget(Paragraph::new(help), rows[1]);
}
