// Error types
pub mod error;

// Trait-based architecture (public API)
pub mod traits;

// Provider implementations
pub mod dummyjson;
pub mod jsonplaceholder;

// Provider registry
pub mod registry;

pub use error::{Error, Result};
pub use traits::TodoProvider;

pub use dummyjson::DummyJsonProvider;
pub use jsonplaceholder::JsonPlaceholderProvider;
pub use registry::{all_providers, provider_from_name};
