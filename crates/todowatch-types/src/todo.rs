use serde::{Deserialize, Serialize};

/// One normalized todo record as returned by a remote endpoint.
///
/// Records are immutable once received. A later poll may return a different
/// `completed` value for the same `id`; the whole collection is replaced
/// wholesale in that case, never merged record-by-record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Unique id, stable across polls
    pub id: u64,
    pub title: String,
    pub completed: bool,
}

impl TodoItem {
    pub fn new(id: u64, title: impl Into<String>, completed: bool) -> Self {
        Self {
            id,
            title: title.into(),
            completed,
        }
    }

    /// Display label derived from the completion flag
    pub fn completion_label(&self) -> &'static str {
        if self.completed { "done" } else { "pending" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_label() {
        assert_eq!(TodoItem::new(1, "write tests", true).completion_label(), "done");
        assert_eq!(TodoItem::new(2, "ship it", false).completion_label(), "pending");
    }

    #[test]
    fn test_serde_round_trip() {
        let item = TodoItem::new(7, "buy milk", false);
        let json = serde_json::to_string(&item).unwrap();
        let back: TodoItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }

    #[test]
    fn test_deserializes_canonical_shape() {
        let item: TodoItem =
            serde_json::from_str(r#"{"id":3,"title":"delectus aut autem","completed":false}"#)
                .unwrap();
        assert_eq!(item.id, 3);
        assert_eq!(item.title, "delectus aut autem");
        assert!(!item.completed);
    }
}
