use async_trait::async_trait;

use crate::person::{NewPerson, Person, UpdatePersonRequest};

use super::Result;

/// Repository for person records.
///
/// Ids arrive as raw text from the request path; implementations parse them
/// and report [`RepositoryError::MalformedId`](super::RepositoryError::MalformedId)
/// for text the store cannot address. Writes are checked against the store
/// schema and report [`RepositoryError::Validation`](super::RepositoryError::Validation).
#[async_trait]
pub trait PersonRepository: Send + Sync {
    /// Gets every person, in insertion order.
    async fn find_all(&self) -> Result<Vec<Person>>;

    /// Gets a person by id.
    async fn find_by_id(&self, id: &str) -> Result<Option<Person>>;

    /// Counts stored persons.
    async fn count_all(&self) -> Result<u64>;

    /// Stores a new person and returns it with its assigned id.
    async fn create(&self, new_person: NewPerson) -> Result<Person>;

    /// Applies an update and returns the post-update record, or `None` if no
    /// record has this id.
    async fn update_by_id(&self, id: &str, update: &UpdatePersonRequest)
        -> Result<Option<Person>>;

    /// Deletes a person and returns the removed record, if there was one.
    async fn delete_by_id(&self, id: &str) -> Result<Option<Person>>;
}
