//! Functional core of the phonebook service.
//!
//! Pure data types, validation rules and the repository contract. Nothing in
//! this crate performs I/O; storage backends and the HTTP layer live in the
//! `phonebook` crate.

pub mod person;
pub mod serde;
pub mod storage;
