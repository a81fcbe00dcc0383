use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::Component;
use crate::presentation::renderers::tui::app::AppState;

pub(crate) struct DashboardComponent;

impl Component for DashboardComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title bar
                Constraint::Length(3), // Status box (with borders)
            ])
            .split(area);

        render_title_bar(f, chunks[0], state);
        render_status_box(f, chunks[1], state);
    }
}

fn render_title_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let title = Line::from(vec![
        Span::styled(
            "━━ ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "Todowatch",
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" → {}", state.provider_id),
            Style::default().fg(Color::White),
        ),
        Span::styled(
            " ━━",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    let badge_style = if state.auto_refresh {
        Style::default()
            .fg(Color::LightRed)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    };

    let badge_text = if state.auto_refresh {
        "🔴 LIVE"
    } else {
        "⏸  PAUSED"
    };

    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(area);

    f.render_widget(Paragraph::new(title), layout[0]);
    f.render_widget(
        Paragraph::new(badge_text)
            .style(badge_style)
            .alignment(Alignment::Right),
        layout[1],
    );
}

fn render_status_box(f: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green))
        .title(Span::styled(
            " Status ",
            Style::default()
                .fg(Color::LightGreen)
                .add_modifier(Modifier::BOLD),
        ));

    let mut spans = vec![
        Span::styled("Last updated: ", Style::default().fg(Color::Gray)),
        Span::styled(
            state
                .last_updated
                .clone()
                .unwrap_or_else(|| "never".to_string()),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" │ "),
        Span::styled("Items: ", Style::default().fg(Color::Gray)),
        Span::styled(
            format!("{} ({} shown)", state.total, state.rows.len()),
            Style::default().fg(Color::LightCyan),
        ),
        Span::raw(" │ "),
        Span::styled("Filter: ", Style::default().fg(Color::Gray)),
        Span::styled(
            state.filter.as_str(),
            Style::default()
                .fg(Color::LightMagenta)
                .add_modifier(Modifier::BOLD),
        ),
    ];

    if state.is_loading {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            "refreshing…",
            Style::default().fg(Color::Yellow),
        ));
    }

    f.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
