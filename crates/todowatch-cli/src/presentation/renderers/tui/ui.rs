use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use super::app::AppState;
use super::components::{Component, DashboardComponent, FooterComponent, TodoListComponent};

pub(crate) fn draw(f: &mut Frame, state: &mut AppState) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Title bar + status box
            Constraint::Min(0),    // Todo list
            Constraint::Length(3), // Footer (key hints + diagnostic)
        ])
        .split(f.area());

    let dashboard = DashboardComponent;
    dashboard.render(f, main_chunks[0], state);

    let todo_list = TodoListComponent;
    todo_list.render(f, main_chunks[1], state);

    let footer = FooterComponent;
    footer.render(f, main_chunks[2], state);
}
