use crate::presentation::view_models::TodoRowViewModel;
use owo_colors::OwoColorize;
use todowatch_types::{Filter, TodoItem};

/// Print the projected list for the one-shot `list` command
pub fn render_todo_list(visible: &[TodoItem], total: usize, filter: Filter, enable_color: bool) {
    if visible.is_empty() {
        println!("No todo items to show.");
        return;
    }

    for item in visible {
        let row = TodoRowViewModel::from(item);
        let marker = if row.completed { "[x]" } else { "[ ]" };
        if enable_color {
            if row.completed {
                println!("{} {} {}", marker.green(), row.title, format!("({})", row.label).dimmed());
            } else {
                println!("{} {} {}", marker.yellow(), row.title, format!("({})", row.label).dimmed());
            }
        } else {
            println!("{} {} ({})", marker, row.title, row.label);
        }
    }

    if filter == Filter::All {
        println!("{} item(s)", total);
    } else {
        println!("{} item(s), {} shown (filter: {})", total, visible.len(), filter);
    }
}
