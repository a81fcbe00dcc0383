pub mod error;
pub mod filter;
pub mod todo;

pub use error::{Error, Result};
pub use filter::{Filter, project};
pub use todo::TodoItem;
