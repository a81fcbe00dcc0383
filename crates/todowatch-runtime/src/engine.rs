use crate::error::Error;
use chrono::{DateTime, Utc};
use std::time::{Duration, Instant};
use todowatch_types::{Filter, TodoItem, project};

/// Issued for every poll the engine begins; completions carry it back.
///
/// The sequence number is monotonic per engine. A completion whose ticket
/// is not the latest issued sequence is discarded, so an overlapping
/// manual/scheduled poll pair can never overwrite newer data with older.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollTicket {
    seq: u64,
}

impl PollTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }
}

/// Read-only view of engine state taken under the lock, for rendering
#[derive(Debug, Clone)]
pub struct PollSnapshot {
    pub visible: Vec<TodoItem>,
    pub total: usize,
    pub filter: Filter,
    pub last_updated_at: Option<DateTime<Utc>>,
    pub is_loading: bool,
    pub auto_refresh: bool,
}

/// Poll-cycle state machine: Idle → Loading → (Success | Failure) → Idle
///
/// The engine performs no I/O and never reads a clock of its own; callers
/// pass `Instant` for scheduling and a wall-clock timestamp when a poll
/// completes. Transitions:
///
/// - A poll is due once at startup, then every `interval` while
///   auto-refresh is enabled; a requested refresh makes one due
///   unconditionally.
/// - Success replaces the collection wholesale and stamps
///   `last_updated_at`; no diffing or dedup across polls.
/// - Failure leaves collection and `last_updated_at` untouched.
pub struct PollEngine {
    items: Vec<TodoItem>,
    last_updated_at: Option<DateTime<Utc>>,
    filter: Filter,
    interval: Duration,
    auto_refresh: bool,
    is_loading: bool,
    next_due: Option<Instant>,
    latest_seq: u64,
    refresh_requested: bool,
}

impl PollEngine {
    pub fn new(interval: Duration) -> Self {
        Self {
            items: Vec::new(),
            last_updated_at: None,
            filter: Filter::All,
            interval,
            auto_refresh: true,
            is_loading: false,
            next_due: None,
            latest_seq: 0,
            refresh_requested: false,
        }
    }

    /// Whether a poll should begin now
    ///
    /// The startup poll (nothing scheduled yet) and explicit refresh
    /// requests fire regardless of the auto-refresh gate; scheduled polls
    /// fire only while it is enabled.
    pub fn poll_due(&self, now: Instant) -> bool {
        if self.refresh_requested {
            return true;
        }
        match self.next_due {
            None => true,
            Some(due) => self.auto_refresh && now >= due,
        }
    }

    /// Ask for an immediate poll on the next scheduler pass
    pub fn request_refresh(&mut self) {
        self.refresh_requested = true;
    }

    /// Transition to Loading and schedule the next deadline
    pub fn begin_poll(&mut self, now: Instant) -> PollTicket {
        self.is_loading = true;
        self.refresh_requested = false;
        self.latest_seq += 1;
        self.next_due = Some(now + self.interval);
        PollTicket {
            seq: self.latest_seq,
        }
    }

    /// Complete a poll with its outcome
    ///
    /// Returns false (and changes nothing) when the ticket has been
    /// superseded by a later `begin_poll`. On success the collection is
    /// replaced wholesale; on failure existing data stays on screen.
    pub fn complete(
        &mut self,
        ticket: PollTicket,
        outcome: std::result::Result<Vec<TodoItem>, Error>,
        received_at: DateTime<Utc>,
    ) -> bool {
        if ticket.seq != self.latest_seq {
            return false;
        }
        self.is_loading = false;
        if let Ok(items) = outcome {
            self.items = items;
            self.last_updated_at = Some(received_at);
        }
        true
    }

    /// Gate the recurring trigger
    ///
    /// Disabling stops future scheduled polls without touching an
    /// in-flight one. Re-enabling schedules the next poll a full interval
    /// from `now`, so no trigger fires retroactively for the disabled
    /// span.
    pub fn set_auto_refresh(&mut self, enabled: bool, now: Instant) {
        if enabled && !self.auto_refresh {
            self.next_due = Some(now + self.interval);
        }
        self.auto_refresh = enabled;
    }

    pub fn toggle_auto_refresh(&mut self, now: Instant) -> bool {
        let enabled = !self.auto_refresh;
        self.set_auto_refresh(enabled, now);
        enabled
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    /// Current collection projected through the active filter
    pub fn visible_items(&self) -> Vec<TodoItem> {
        project(&self.items, self.filter)
    }

    pub fn last_updated_at(&self) -> Option<DateTime<Utc>> {
        self.last_updated_at
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn auto_refresh(&self) -> bool {
        self.auto_refresh
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn snapshot(&self) -> PollSnapshot {
        PollSnapshot {
            visible: self.visible_items(),
            total: self.items.len(),
            filter: self.filter,
            last_updated_at: self.last_updated_at,
            is_loading: self.is_loading,
            auto_refresh: self.auto_refresh,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_millis(5000);

    fn engine() -> PollEngine {
        PollEngine::new(INTERVAL)
    }

    fn five_items() -> Vec<TodoItem> {
        vec![
            TodoItem::new(1, "delectus aut autem", false),
            TodoItem::new(2, "quis ut nam", true),
            TodoItem::new(3, "fugiat veniam minus", false),
            TodoItem::new(4, "et porro tempora", true),
            TodoItem::new(5, "laboriosam mollitia", false),
        ]
    }

    #[test]
    fn test_initial_state() {
        let engine = engine();
        assert!(engine.items().is_empty());
        assert!(engine.last_updated_at().is_none());
        assert!(!engine.is_loading());
        assert!(engine.auto_refresh());
        assert_eq!(engine.filter(), Filter::All);
    }

    #[test]
    fn test_startup_poll_is_due_immediately() {
        let engine = engine();
        assert!(engine.poll_due(Instant::now()));
    }

    #[test]
    fn test_poll_not_due_again_until_interval_elapses() {
        let mut engine = engine();
        let t0 = Instant::now();
        let _ = engine.begin_poll(t0);
        assert!(!engine.poll_due(t0 + Duration::from_millis(4999)));
        assert!(engine.poll_due(t0 + INTERVAL));
    }

    #[test]
    fn test_begin_poll_sets_loading() {
        let mut engine = engine();
        let ticket = engine.begin_poll(Instant::now());
        assert!(engine.is_loading());
        assert_eq!(ticket.seq(), 1);
    }

    #[test]
    fn test_success_replaces_collection_wholesale() {
        let mut engine = engine();
        let t0 = Instant::now();

        let ticket = engine.begin_poll(t0);
        let received = Utc::now();
        assert!(engine.complete(ticket, Ok(five_items()), received));
        assert_eq!(engine.items(), five_items().as_slice());
        assert_eq!(engine.last_updated_at(), Some(received));
        assert!(!engine.is_loading());

        // Second poll returns a different set; old records must not survive
        let replacement = vec![TodoItem::new(9, "new world", true)];
        let ticket = engine.begin_poll(t0 + INTERVAL);
        assert!(engine.complete(ticket, Ok(replacement.clone()), Utc::now()));
        assert_eq!(engine.items(), replacement.as_slice());
    }

    #[test]
    fn test_failure_leaves_collection_and_timestamp_untouched() {
        let mut engine = engine();
        let t0 = Instant::now();

        let ticket = engine.begin_poll(t0);
        let received = Utc::now();
        engine.complete(ticket, Ok(five_items()), received);

        let ticket = engine.begin_poll(t0 + INTERVAL);
        assert!(engine.complete(
            ticket,
            Err(Error::Fetch("connection refused".to_string())),
            Utc::now(),
        ));
        assert_eq!(engine.items(), five_items().as_slice());
        assert_eq!(engine.last_updated_at(), Some(received));
        assert!(!engine.is_loading());
    }

    #[test]
    fn test_disabled_auto_refresh_fires_no_scheduled_polls() {
        let mut engine = engine();
        let t0 = Instant::now();
        let ticket = engine.begin_poll(t0);
        engine.complete(ticket, Ok(five_items()), Utc::now());

        engine.set_auto_refresh(false, t0);
        // Advance 20000 ms in steps: zero additional polls become due
        for ms in (0..=20000).step_by(500) {
            assert!(!engine.poll_due(t0 + Duration::from_millis(ms)));
        }
    }

    #[test]
    fn test_reenabling_resumes_one_interval_later() {
        let mut engine = engine();
        let t0 = Instant::now();
        let ticket = engine.begin_poll(t0);
        engine.complete(ticket, Ok(five_items()), Utc::now());

        engine.set_auto_refresh(false, t0);
        let t1 = t0 + Duration::from_millis(20000);
        engine.set_auto_refresh(true, t1);
        assert!(!engine.poll_due(t1));
        assert!(!engine.poll_due(t1 + Duration::from_millis(4999)));
        assert!(engine.poll_due(t1 + INTERVAL));
    }

    #[test]
    fn test_manual_refresh_is_due_even_while_paused() {
        let mut engine = engine();
        let t0 = Instant::now();
        let ticket = engine.begin_poll(t0);
        engine.complete(ticket, Ok(five_items()), Utc::now());
        engine.set_auto_refresh(false, t0);

        assert!(!engine.poll_due(t0 + Duration::from_millis(100)));
        engine.request_refresh();
        assert!(engine.poll_due(t0 + Duration::from_millis(100)));

        // Beginning the poll clears the request
        let _ = engine.begin_poll(t0 + Duration::from_millis(100));
        assert!(!engine.poll_due(t0 + Duration::from_millis(200)));
    }

    #[test]
    fn test_stale_completion_is_discarded() {
        let mut engine = engine();
        let t0 = Instant::now();

        // Scheduled poll goes out, then a manual refresh supersedes it
        let stale = engine.begin_poll(t0);
        let fresh = engine.begin_poll(t0 + Duration::from_millis(100));

        let fresh_items = vec![TodoItem::new(1, "fresh", true)];
        assert!(engine.complete(fresh, Ok(fresh_items.clone()), Utc::now()));

        // The slower, older response arrives afterwards and is dropped
        let stale_received = Utc::now();
        assert!(!engine.complete(stale, Ok(five_items()), stale_received));
        assert_eq!(engine.items(), fresh_items.as_slice());
        assert_ne!(engine.last_updated_at(), Some(stale_received));
    }

    #[test]
    fn test_stale_failure_does_not_clear_loading_of_fresh_poll() {
        let mut engine = engine();
        let t0 = Instant::now();

        let stale = engine.begin_poll(t0);
        let _fresh = engine.begin_poll(t0 + Duration::from_millis(100));
        assert!(engine.is_loading());

        assert!(!engine.complete(stale, Err(Error::Fetch("timeout".into())), Utc::now()));
        // is_loading reflects the most recently issued poll only
        assert!(engine.is_loading());
    }

    #[test]
    fn test_filter_projection_over_polled_collection() {
        let mut engine = engine();
        let ticket = engine.begin_poll(Instant::now());
        engine.complete(ticket, Ok(five_items()), Utc::now());

        assert_eq!(engine.visible_items().len(), 5);
        engine.set_filter(Filter::Completed);
        assert_eq!(engine.visible_items().len(), 2);
        engine.set_filter(Filter::Incomplete);
        assert_eq!(engine.visible_items().len(), 3);
        assert!(engine.last_updated_at().is_some());
    }

    #[test]
    fn test_snapshot_reflects_engine_state() {
        let mut engine = engine();
        let ticket = engine.begin_poll(Instant::now());
        engine.complete(ticket, Ok(five_items()), Utc::now());
        engine.set_filter(Filter::Completed);

        let snapshot = engine.snapshot();
        assert_eq!(snapshot.total, 5);
        assert_eq!(snapshot.visible.len(), 2);
        assert_eq!(snapshot.filter, Filter::Completed);
        assert!(snapshot.auto_refresh);
        assert!(!snapshot.is_loading);
        assert!(snapshot.last_updated_at.is_some());
    }
}
