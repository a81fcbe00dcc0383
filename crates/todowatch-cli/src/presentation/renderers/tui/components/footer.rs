use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
};

use super::Component;
use crate::presentation::renderers::tui::app::AppState;

pub(crate) struct FooterComponent;

impl Component for FooterComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState) {
        let keys = Line::from(vec![
            Span::styled("a", Style::default().fg(Color::LightCyan)),
            Span::raw("ll / "),
            Span::styled("c", Style::default().fg(Color::LightCyan)),
            Span::raw("ompleted / "),
            Span::styled("i", Style::default().fg(Color::LightCyan)),
            Span::raw("ncomplete filter │ "),
            Span::styled("p", Style::default().fg(Color::LightCyan)),
            Span::raw("ause/resume │ "),
            Span::styled("r", Style::default().fg(Color::LightCyan)),
            Span::raw("efresh │ "),
            Span::styled("q", Style::default().fg(Color::LightCyan)),
            Span::raw("uit"),
        ]);

        let status = match state.latest_message() {
            Some(message) => Line::from(Span::styled(
                message.to_string(),
                Style::default().fg(Color::Gray),
            )),
            None => Line::from(Span::styled(
                state.endpoint.clone(),
                Style::default().fg(Color::DarkGray),
            )),
        };

        let footer = Paragraph::new(Text::from(vec![keys, status])).block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(Color::DarkGray)),
        );

        f.render_widget(footer, area);
    }
}
