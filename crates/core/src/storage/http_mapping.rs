//! Pure functions for mapping repository errors to HTTP responses.
//!
//! This is the single place that understands the store's error vocabulary.
//! Handlers never branch on error kinds themselves.

use super::{ErrorKind, RepositoryError};

/// Body message for a malformed identifier.
pub const MALFORMED_ID_MESSAGE: &str = "malformed id";

/// Body message for failures that are not classified further.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Status code and `error` message chosen for a failed repository call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedError {
    pub status: u16,
    pub message: String,
}

/// Maps a [`RepositoryError`] to an HTTP status code and error message.
///
/// - `MalformedId` -> 400 `malformed id`
/// - `Validation` -> 400 with the store's message
/// - anything else -> 500 with a generic message
///
/// # Examples
///
/// ```
/// use phonebook_core::storage::{classify_repository_error, RepositoryError};
///
/// let error = RepositoryError::MalformedId("not-an-id".to_string());
/// let classified = classify_repository_error(&error);
/// assert_eq!(classified.status, 400);
/// assert_eq!(classified.message, "malformed id");
/// ```
pub fn classify_repository_error(error: &RepositoryError) -> ClassifiedError {
    match error.kind() {
        ErrorKind::MalformedId => ClassifiedError {
            status: 400,
            message: MALFORMED_ID_MESSAGE.to_string(),
        },
        ErrorKind::Validation => ClassifiedError {
            status: 400,
            message: error.to_string(),
        },
        ErrorKind::Other => ClassifiedError {
            status: 500,
            message: INTERNAL_ERROR_MESSAGE.to_string(),
        },
    }
}
