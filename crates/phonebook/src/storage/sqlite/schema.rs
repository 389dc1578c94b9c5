//! SQLite schema definitions and SQL query constants.
//!
//! Pure data, no I/O.

/// SQL statement to create all tables.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS persons (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    number TEXT NOT NULL
);
"#;

pub const INSERT_PERSON: &str = r#"
INSERT INTO persons (id, name, number)
VALUES (?1, ?2, ?3)
"#;

pub const SELECT_ALL_PERSONS: &str = r#"
SELECT id, name, number
FROM persons
ORDER BY rowid ASC
"#;

pub const SELECT_PERSON_BY_ID: &str = r#"
SELECT id, name, number
FROM persons
WHERE id = ?1
"#;

pub const COUNT_PERSONS: &str = r#"
SELECT COUNT(*)
FROM persons
"#;

pub const UPDATE_PERSON: &str = r#"
UPDATE persons
SET name = ?2, number = ?3
WHERE id = ?1
"#;

pub const DELETE_PERSON: &str = r#"
DELETE FROM persons
WHERE id = ?1
"#;
