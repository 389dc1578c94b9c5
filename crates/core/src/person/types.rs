use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::storage::RepositoryError;

/// Identifier assigned by the store when a person is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(Uuid);

impl PersonId {
    /// Generates a fresh identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parses an identifier from its textual form.
    ///
    /// Text that is not a UUID yields [`RepositoryError::MalformedId`], which is
    /// distinct from a well-formed id that addresses no record.
    pub fn parse(raw: &str) -> Result<Self, RepositoryError> {
        Uuid::parse_str(raw)
            .map(Self)
            .map_err(|_| RepositoryError::MalformedId(raw.to_string()))
    }
}

impl Default for PersonId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for PersonId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A phonebook record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub number: String,
}

impl Person {
    /// Creates a person with a freshly generated id.
    pub fn new(name: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            id: PersonId::new(),
            name: name.into(),
            number: number.into(),
        }
    }

    /// Sets a specific ID for this person (useful for testing).
    pub fn with_id(mut self, id: PersonId) -> Self {
        self.id = id;
        self
    }
}

/// A validated person that has not been stored yet and therefore has no id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPerson {
    pub name: String,
    pub number: String,
}

impl NewPerson {
    pub fn new(name: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            number: number.into(),
        }
    }

    /// Attaches a store-assigned id.
    pub fn into_person(self, id: PersonId) -> Person {
        Person {
            id,
            name: self.name,
            number: self.number,
        }
    }
}
