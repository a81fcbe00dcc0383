use std::fmt;

/// Result type for todowatch-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug)]
pub enum Error {
    /// Unrecognized filter name
    UnknownFilter(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownFilter(name) => {
                write!(f, "Unknown filter: {} (expected all, completed, incomplete)", name)
            }
        }
    }
}

impl std::error::Error for Error {}
