//! SQLite storage backend implementation.
//!
//! This module provides a SQLite-based implementation of [`PersonRepository`]
//! using `rusqlite` for synchronous operations and `tokio-rusqlite` for async wrapping.
//!
//! [`PersonRepository`]: phonebook_core::storage::PersonRepository

mod conversions;
mod error;
mod repository;
mod schema;

pub use repository::SqliteRepository;
