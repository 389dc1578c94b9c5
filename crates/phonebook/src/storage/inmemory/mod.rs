//! In-memory storage backend.
//!
//! Stores all persons in a `Vec` wrapped in `Arc<RwLock<_>>`, which keeps
//! insertion order for listings. Useful for tests and local development where
//! persistence is not required.
//!
//! # Example
//!
//! ```rust,ignore
//! use phonebook::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! // Use repo for testing...
//! ```

mod repository;

pub use repository::InMemoryRepository;
