//! Document schema enforced by the storage backends on every write.
//!
//! This is the store's own rule set, separate from the request validator in
//! `operations`: a payload can pass the validator and still be rejected here,
//! in which case the backend reports [`RepositoryError::Validation`].

use super::requests::UpdatePersonRequest;
use super::types::Person;
use crate::storage::RepositoryError;

/// Field constraints for stored person documents.
///
/// The default only requires both fields to be non-empty.
/// [`PersonSchema::strict`] adds the length and phone number format rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersonSchema {
    /// Minimum number of characters in `name`.
    pub name_min_length: usize,
    /// Minimum number of characters in `number`.
    pub number_min_length: usize,
    /// Require `number` to look like `09-1234556` or `040-22334455`.
    pub number_format: bool,
}

impl Default for PersonSchema {
    fn default() -> Self {
        Self {
            name_min_length: 1,
            number_min_length: 1,
            number_format: false,
        }
    }
}

impl PersonSchema {
    /// Names of at least 3 characters, numbers of at least 8 characters in
    /// `NN-N...` or `NNN-N...` form.
    pub fn strict() -> Self {
        Self {
            name_min_length: 3,
            number_min_length: 8,
            number_format: true,
        }
    }

    /// Validates a complete document before it is inserted.
    pub fn validate(&self, person: &Person) -> Result<(), RepositoryError> {
        let violations: Vec<String> = [
            self.check_name(&person.name),
            self.check_number(&person.number),
        ]
        .into_iter()
        .flatten()
        .collect();

        into_result(violations)
    }

    /// Validates only the fields carried by an update.
    pub fn validate_update(&self, update: &UpdatePersonRequest) -> Result<(), RepositoryError> {
        let violations: Vec<String> = [
            update.name.as_deref().and_then(|name| self.check_name(name)),
            update
                .number
                .as_deref()
                .and_then(|number| self.check_number(number)),
        ]
        .into_iter()
        .flatten()
        .collect();

        into_result(violations)
    }

    fn check_name(&self, name: &str) -> Option<String> {
        if name.is_empty() {
            return Some("name: `name` is required".to_string());
        }
        if name.chars().count() < self.name_min_length {
            return Some(format!(
                "name: `{name}` is shorter than the minimum allowed length ({})",
                self.name_min_length
            ));
        }
        None
    }

    fn check_number(&self, number: &str) -> Option<String> {
        if number.is_empty() {
            return Some("number: `number` is required".to_string());
        }
        if number.chars().count() < self.number_min_length {
            return Some(format!(
                "number: `{number}` is shorter than the minimum allowed length ({})",
                self.number_min_length
            ));
        }
        if self.number_format && !is_valid_number_format(number) {
            return Some(format!("number: `{number}` is not a valid phone number"));
        }
        None
    }
}

fn into_result(violations: Vec<String>) -> Result<(), RepositoryError> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(RepositoryError::Validation(format!(
            "Person validation failed: {}",
            violations.join(", ")
        )))
    }
}

/// A phone number is two or three digits, a hyphen, then one or more digits.
fn is_valid_number_format(number: &str) -> bool {
    let Some((prefix, rest)) = number.split_once('-') else {
        return false;
    };

    (2..=3).contains(&prefix.len())
        && prefix.bytes().all(|b| b.is_ascii_digit())
        && !rest.is_empty()
        && rest.bytes().all(|b| b.is_ascii_digit())
}
