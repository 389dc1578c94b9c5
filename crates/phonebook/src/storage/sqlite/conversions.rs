//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain types.

use phonebook_core::person::{Person, PersonId};
use rusqlite::Row;

/// Convert a SQLite row to a Person.
///
/// Expected columns: id, name, number
pub fn row_to_person(row: &Row) -> rusqlite::Result<Person> {
    let id: String = row.get(0)?;
    let name: String = row.get(1)?;
    let number: String = row.get(2)?;

    Ok(Person {
        id: parse_person_id(&id)?,
        name,
        number,
    })
}

fn parse_person_id(s: &str) -> rusqlite::Result<PersonId> {
    PersonId::parse(s).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
    })
}
