use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use super::Component;
use crate::presentation::renderers::tui::app::AppState;

pub(crate) struct TodoListComponent;

impl Component for TodoListComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(Span::styled(
                " Todos ",
                Style::default()
                    .fg(Color::LightCyan)
                    .add_modifier(Modifier::BOLD),
            ));

        if state.rows.is_empty() {
            let empty = Paragraph::new(Line::from(Span::styled(
                "No todo items to show.",
                Style::default().fg(Color::DarkGray),
            )))
            .block(block);
            f.render_widget(empty, area);
            return;
        }

        let items: Vec<ListItem> = state
            .rows
            .iter()
            .map(|row| {
                let (marker, marker_color, label_color) = if row.completed {
                    ("[x] ", Color::Green, Color::Green)
                } else {
                    ("[ ] ", Color::Yellow, Color::Yellow)
                };
                ListItem::new(Line::from(vec![
                    Span::styled(marker, Style::default().fg(marker_color)),
                    Span::styled(row.title.clone(), Style::default().fg(Color::White)),
                    Span::styled(
                        format!("  ({})", row.label),
                        Style::default().fg(label_color),
                    ),
                ]))
            })
            .collect();

        f.render_widget(List::new(items).block(block), area);
    }
}
