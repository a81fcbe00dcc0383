use crate::error::Result;
use crate::traits::TodoProvider;
use serde::Deserialize;
use todowatch_types::TodoItem;

/// DummyJSON adapter
///
/// `GET {base}?limit={n}` returns an envelope object; the record list sits
/// under `todos` and the title is carried by the `todo` field.
#[derive(Debug)]
pub struct DummyJsonProvider;

#[derive(Debug, Deserialize)]
struct RawEnvelope {
    todos: Vec<RawTodo>,
}

#[derive(Debug, Deserialize)]
struct RawTodo {
    id: u64,
    todo: String,
    completed: bool,
}

impl TodoProvider for DummyJsonProvider {
    fn id(&self) -> &'static str {
        "dummyjson"
    }

    fn default_base_url(&self) -> &'static str {
        "https://dummyjson.com/todos"
    }

    fn request_url(&self, base_url: &str, limit: u32) -> String {
        format!("{}?limit={}", base_url, limit)
    }

    fn parse_response(&self, body: &str) -> Result<Vec<TodoItem>> {
        let envelope: RawEnvelope = serde_json::from_str(body)?;
        Ok(envelope
            .todos
            .into_iter()
            .map(|t| TodoItem {
                id: t.id,
                title: t.todo,
                completed: t.completed,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = r#"{
        "todos": [
            {"id": 1, "todo": "Do something nice", "completed": true, "userId": 26},
            {"id": 2, "todo": "Memorize a poem", "completed": false, "userId": 13}
        ],
        "total": 254,
        "skip": 0,
        "limit": 2
    }"#;

    #[test]
    fn test_request_url_uses_plain_limit() {
        let provider = DummyJsonProvider;
        assert_eq!(
            provider.request_url(provider.default_base_url(), 5),
            "https://dummyjson.com/todos?limit=5"
        );
    }

    #[test]
    fn test_parse_envelope_shape_maps_todo_to_title() {
        let items = DummyJsonProvider.parse_response(BODY).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0], TodoItem::new(1, "Do something nice", true));
        assert_eq!(items[1], TodoItem::new(2, "Memorize a poem", false));
    }

    #[test]
    fn test_bare_array_body_is_an_error() {
        assert!(DummyJsonProvider.parse_response("[]").is_err());
    }

    #[test]
    fn test_missing_todos_key_is_an_error() {
        assert!(DummyJsonProvider.parse_response(r#"{"total": 0}"#).is_err());
    }
}
