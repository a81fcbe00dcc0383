use crate::presentation::view_models::{TodoRowViewModel, format_clock};
use std::collections::VecDeque;
use todowatch_runtime::PollSnapshot;
use todowatch_types::Filter;

const MAX_MESSAGES: usize = 4;

pub(crate) struct AppState {
    pub provider_id: String,
    pub endpoint: String,
    pub rows: Vec<TodoRowViewModel>,
    pub total: usize,
    pub filter: Filter,
    pub last_updated: Option<String>,
    pub is_loading: bool,
    pub auto_refresh: bool,
    pub messages: VecDeque<String>,
    pub poll_count: usize,
    pub failure_count: usize,
}

impl AppState {
    pub fn new(provider_id: String, endpoint: String) -> Self {
        Self {
            provider_id,
            endpoint,
            rows: Vec::new(),
            total: 0,
            filter: Filter::All,
            last_updated: None,
            is_loading: false,
            auto_refresh: true,
            messages: VecDeque::new(),
            poll_count: 0,
            failure_count: 0,
        }
    }

    /// Fold the latest engine snapshot into the view
    pub fn apply_snapshot(&mut self, snapshot: &PollSnapshot) {
        self.rows = snapshot.visible.iter().map(TodoRowViewModel::from).collect();
        self.total = snapshot.total;
        self.filter = snapshot.filter;
        self.last_updated = snapshot.last_updated_at.map(format_clock);
        self.is_loading = snapshot.is_loading;
        self.auto_refresh = snapshot.auto_refresh;
    }

    pub fn add_message(&mut self, message: String) {
        self.messages.push_back(message);
        while self.messages.len() > MAX_MESSAGES {
            self.messages.pop_front();
        }
    }

    pub fn latest_message(&self) -> Option<&str> {
        self.messages.back().map(String::as_str)
    }
}
