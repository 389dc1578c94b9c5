use thiserror::Error;

/// Errors that can occur during repository operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// The id is not syntactically valid for the store. This is not the same
    /// as a well-formed id that addresses no record.
    #[error("Malformed id: {0}")]
    MalformedId(String),
    /// The store rejected a write because the document violates its schema.
    #[error("{0}")]
    Validation(String),
    #[error("{entity_type} already exists: {id}")]
    AlreadyExists {
        entity_type: &'static str,
        id: String,
    },
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Coarse classification of a [`RepositoryError`].
///
/// This is the only vocabulary the HTTP layer needs to pick a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MalformedId,
    Validation,
    Other,
}

impl RepositoryError {
    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            RepositoryError::MalformedId(_) => ErrorKind::MalformedId,
            RepositoryError::Validation(_) => ErrorKind::Validation,
            RepositoryError::AlreadyExists { .. }
            | RepositoryError::ConnectionFailed(_)
            | RepositoryError::QueryFailed(_)
            | RepositoryError::Serialization(_) => ErrorKind::Other,
        }
    }
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_error_malformed_id_display() {
        let error = RepositoryError::MalformedId("abc".to_string());
        assert_eq!(error.to_string(), "Malformed id: abc");
    }

    #[test]
    fn test_repository_error_validation_display_is_raw_message() {
        let error = RepositoryError::Validation("Person validation failed: name: x".to_string());
        assert_eq!(error.to_string(), "Person validation failed: name: x");
    }

    #[test]
    fn test_repository_error_already_exists_display() {
        let error = RepositoryError::AlreadyExists {
            entity_type: "Person",
            id: "abc-123".to_string(),
        };
        assert_eq!(error.to_string(), "Person already exists: abc-123");
    }

    #[test]
    fn test_repository_error_connection_failed_display() {
        let error = RepositoryError::ConnectionFailed("timeout after 30s".to_string());
        assert_eq!(error.to_string(), "Connection failed: timeout after 30s");
    }

    #[test]
    fn test_kinds() {
        assert_eq!(
            RepositoryError::MalformedId("x".into()).kind(),
            ErrorKind::MalformedId
        );
        assert_eq!(
            RepositoryError::Validation("x".into()).kind(),
            ErrorKind::Validation
        );
        assert_eq!(
            RepositoryError::QueryFailed("x".into()).kind(),
            ErrorKind::Other
        );
        assert_eq!(
            RepositoryError::Serialization("x".into()).kind(),
            ErrorKind::Other
        );
        assert_eq!(
            RepositoryError::ConnectionFailed("x".into()).kind(),
            ErrorKind::Other
        );
        assert_eq!(
            RepositoryError::AlreadyExists {
                entity_type: "Person",
                id: "x".into()
            }
            .kind(),
            ErrorKind::Other
        );
    }
}
