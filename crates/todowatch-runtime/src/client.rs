use crate::error::{Error, Result};
use std::time::Duration;
use todowatch_providers::TodoProvider;
use todowatch_types::TodoItem;

/// Blocking HTTP fetch through a provider adapter
///
/// Transport errors and non-success statuses collapse into the single
/// `Fetch` error kind; the poll cycle does not distinguish them.
pub struct TodoClient {
    agent: ureq::Agent,
    provider: Box<dyn TodoProvider>,
    base_url: String,
    limit: u32,
}

impl TodoClient {
    pub fn new(
        provider: Box<dyn TodoProvider>,
        base_url: Option<String>,
        limit: u32,
        timeout: Duration,
    ) -> Self {
        let base_url = base_url.unwrap_or_else(|| provider.default_base_url().to_string());
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        Self {
            agent,
            provider,
            base_url,
            limit,
        }
    }

    pub fn provider_id(&self) -> &'static str {
        self.provider.id()
    }

    pub fn request_url(&self) -> String {
        self.provider.request_url(&self.base_url, self.limit)
    }

    /// One fetch-and-normalize cycle against the remote endpoint
    pub fn fetch(&self) -> Result<Vec<TodoItem>> {
        let url = self.request_url();
        let response = self
            .agent
            .get(&url)
            .call()
            .map_err(|err| Error::Fetch(err.to_string()))?;
        let body = response
            .into_string()
            .map_err(|err| Error::Fetch(err.to_string()))?;
        Ok(self.provider.parse_response(&body)?)
    }
}
