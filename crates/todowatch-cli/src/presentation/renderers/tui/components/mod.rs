use ratatui::{Frame, layout::Rect};

use super::app::AppState;

pub(crate) trait Component {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState);
}

pub(crate) mod dashboard;
pub(crate) mod footer;
pub(crate) mod todo_list;

pub(crate) use dashboard::DashboardComponent;
pub(crate) use footer::FooterComponent;
pub(crate) use todo_list::TodoListComponent;
