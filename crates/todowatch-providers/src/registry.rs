use crate::dummyjson::DummyJsonProvider;
use crate::error::{Error, Result};
use crate::jsonplaceholder::JsonPlaceholderProvider;
use crate::traits::TodoProvider;

/// Look up a provider adapter by name
pub fn provider_from_name(name: &str) -> Result<Box<dyn TodoProvider>> {
    match name {
        "jsonplaceholder" => Ok(Box::new(JsonPlaceholderProvider)),
        "dummyjson" => Ok(Box::new(DummyJsonProvider)),
        other => Err(Error::Provider(format!("Unknown provider: {}", other))),
    }
}

/// All registered adapters, for discovery and listing
pub fn all_providers() -> Vec<Box<dyn TodoProvider>> {
    vec![Box::new(JsonPlaceholderProvider), Box::new(DummyJsonProvider)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_providers_resolve() {
        assert_eq!(provider_from_name("jsonplaceholder").unwrap().id(), "jsonplaceholder");
        assert_eq!(provider_from_name("dummyjson").unwrap().id(), "dummyjson");
    }

    #[test]
    fn test_unknown_provider_is_an_error() {
        let err = provider_from_name("typicode").unwrap_err();
        assert!(err.to_string().contains("Unknown provider"));
    }

    #[test]
    fn test_registry_lists_every_adapter() {
        let ids: Vec<&str> = all_providers().iter().map(|p| p.id()).collect();
        assert_eq!(ids, vec!["jsonplaceholder", "dummyjson"]);
    }
}
