use crate::error::{Error, Result};
use crate::todo::TodoItem;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Client-side view filter over the todo collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Filter {
    #[default]
    All,
    Completed,
    Incomplete,
}

impl Filter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Completed => "completed",
            Filter::Incomplete => "incomplete",
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Filter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "all" => Ok(Filter::All),
            "completed" => Ok(Filter::Completed),
            "incomplete" => Ok(Filter::Incomplete),
            other => Err(Error::UnknownFilter(other.to_string())),
        }
    }
}

/// Project the collection through a filter.
///
/// Pure and deterministic: `All` is the identity, the other two retain
/// records by their `completed` flag. Relative order is always preserved
/// and the input is never mutated.
pub fn project(items: &[TodoItem], filter: Filter) -> Vec<TodoItem> {
    match filter {
        Filter::All => items.to_vec(),
        Filter::Completed => items.iter().filter(|t| t.completed).cloned().collect(),
        Filter::Incomplete => items.iter().filter(|t| !t.completed).cloned().collect(),
    }
}
