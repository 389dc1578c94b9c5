use thiserror::Error;

/// Errors raised by request validation before the store is consulted.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PersonError {
    #[error("Name or number missing!")]
    MissingField,
}
