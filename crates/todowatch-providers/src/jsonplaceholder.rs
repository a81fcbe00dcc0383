use crate::error::Result;
use crate::traits::TodoProvider;
use serde::Deserialize;
use todowatch_types::TodoItem;

/// JSONPlaceholder adapter
///
/// `GET {base}?_limit={n}` returns a bare JSON array. Field names already
/// match the canonical shape; `userId` is carried by the endpoint but not
/// part of the data model.
#[derive(Debug)]
pub struct JsonPlaceholderProvider;

#[derive(Debug, Deserialize)]
struct RawTodo {
    id: u64,
    title: String,
    completed: bool,
    #[serde(rename = "userId")]
    #[allow(dead_code)]
    user_id: Option<u64>,
}

impl TodoProvider for JsonPlaceholderProvider {
    fn id(&self) -> &'static str {
        "jsonplaceholder"
    }

    fn default_base_url(&self) -> &'static str {
        "https://jsonplaceholder.typicode.com/todos"
    }

    fn request_url(&self, base_url: &str, limit: u32) -> String {
        format!("{}?_limit={}", base_url, limit)
    }

    fn parse_response(&self, body: &str) -> Result<Vec<TodoItem>> {
        let raw: Vec<RawTodo> = serde_json::from_str(body)?;
        Ok(raw
            .into_iter()
            .map(|t| TodoItem {
                id: t.id,
                title: t.title,
                completed: t.completed,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = r#"[
        {"userId": 1, "id": 1, "title": "delectus aut autem", "completed": false},
        {"userId": 1, "id": 2, "title": "quis ut nam facilis", "completed": false},
        {"userId": 1, "id": 3, "title": "fugiat veniam minus", "completed": true}
    ]"#;

    #[test]
    fn test_request_url_uses_underscore_limit() {
        let provider = JsonPlaceholderProvider;
        assert_eq!(
            provider.request_url(provider.default_base_url(), 5),
            "https://jsonplaceholder.typicode.com/todos?_limit=5"
        );
    }

    #[test]
    fn test_parse_bare_array_shape() {
        let items = JsonPlaceholderProvider.parse_response(BODY).unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0], TodoItem::new(1, "delectus aut autem", false));
        assert_eq!(items[2], TodoItem::new(3, "fugiat veniam minus", true));
    }

    #[test]
    fn test_parse_preserves_endpoint_order() {
        let items = JsonPlaceholderProvider.parse_response(BODY).unwrap();
        let ids: Vec<u64> = items.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_missing_user_id_is_tolerated() {
        let body = r#"[{"id": 9, "title": "no user", "completed": true}]"#;
        let items = JsonPlaceholderProvider.parse_response(body).unwrap();
        assert_eq!(items[0].id, 9);
    }

    #[test]
    fn test_malformed_body_is_an_error() {
        assert!(JsonPlaceholderProvider.parse_response("{not json").is_err());
        // Object where an array is expected
        assert!(
            JsonPlaceholderProvider
                .parse_response(r#"{"todos": []}"#)
                .is_err()
        );
    }
}
