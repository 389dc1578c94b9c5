//! API request types for person operations.
//!
//! Pure data types, shared by the handlers and any client that wants
//! type-safe access to the API.

use serde::{Deserialize, Serialize};

use super::error::PersonError;
use super::operations::validate_create_request;
use super::types::{NewPerson, Person};
use crate::serde::deserialize_lenient_string;

/// Request payload for creating a person.
///
/// Both fields are optional at the type level so that an incomplete payload
/// reaches the validator instead of failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePersonRequest {
    #[serde(
        default,
        deserialize_with = "deserialize_lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub number: Option<String>,
}

impl CreatePersonRequest {
    pub fn new(name: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            number: Some(number.into()),
        }
    }

    /// Validates the payload and converts it into a [`NewPerson`].
    pub fn into_new_person(self) -> Result<NewPerson, PersonError> {
        validate_create_request(&self)?;
        match (self.name, self.number) {
            (Some(name), Some(number)) => Ok(NewPerson { name, number }),
            _ => Err(PersonError::MissingField),
        }
    }
}

/// Request payload for updating a person. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatePersonRequest {
    #[serde(
        default,
        deserialize_with = "deserialize_lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub number: Option<String>,
}

impl UpdatePersonRequest {
    /// Set the new name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the new number.
    pub fn with_number(mut self, number: impl Into<String>) -> Self {
        self.number = Some(number.into());
        self
    }

    /// Applies the present fields to an existing person.
    pub fn apply_to(&self, person: &mut Person) {
        if let Some(name) = &self.name {
            person.name = name.clone();
        }
        if let Some(number) = &self.number {
            person.number = number.clone();
        }
    }
}
