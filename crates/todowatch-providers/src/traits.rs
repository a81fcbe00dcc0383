use crate::error::Result;
use todowatch_types::TodoItem;

/// Endpoint adapter: knows one remote API's URL scheme and response shape
///
/// Responsibilities:
/// - Build the request URL for a base endpoint and page size
/// - Normalize the provider-specific JSON body into canonical `TodoItem`s
///
/// The core never sees raw provider shapes; everything enters the data
/// model through `parse_response`.
pub trait TodoProvider: std::fmt::Debug + Send + Sync {
    /// Unique provider ID (e.g., "jsonplaceholder", "dummyjson")
    fn id(&self) -> &'static str;

    /// Default endpoint URL used when configuration supplies none
    fn default_base_url(&self) -> &'static str;

    /// Build the GET URL for the given base endpoint and page size
    fn request_url(&self, base_url: &str, limit: u32) -> String;

    /// Normalize a response body into canonical todo records
    ///
    /// Returned items keep endpoint order. Malformed bodies are an error;
    /// the poll cycle treats that as a fetch failure.
    fn parse_response(&self, body: &str) -> Result<Vec<TodoItem>>;
}
