use chrono::{DateTime, Local, Utc};
use todowatch_types::TodoItem;

/// One rendered row of the todo list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoRowViewModel {
    pub title: String,
    pub label: &'static str,
    pub completed: bool,
}

impl From<&TodoItem> for TodoRowViewModel {
    fn from(item: &TodoItem) -> Self {
        Self {
            title: item.title.clone(),
            label: item.completion_label(),
            completed: item.completed,
        }
    }
}

/// Wall-clock display format for the "last updated" stamp
pub fn format_clock(timestamp: DateTime<Utc>) -> String {
    timestamp.with_timezone(&Local).format("%H:%M:%S").to_string()
}
