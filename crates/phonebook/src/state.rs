//! Application state with repository-based storage.
//!
//! The shared state passed to all request handlers. The repository is a trait
//! object so the storage backend (or a test double) is chosen at construction.

use std::sync::Arc;

use phonebook_core::storage::PersonRepository;

use crate::config::Config;
use crate::storage::InMemoryRepository;

/// Shared application state.
///
/// Cloned for each request handler. Holds no per-request data.
#[derive(Clone)]
pub struct AppState {
    /// Person repository, initialized once at startup.
    pub person_repo: Arc<dyn PersonRepository>,
}

impl AppState {
    /// Creates a new AppState around an existing repository.
    pub fn new(person_repo: Arc<dyn PersonRepository>) -> Self {
        Self { person_repo }
    }

    /// Creates an AppState backed by the storage feature selected at compile time.
    #[cfg(feature = "sqlite")]
    pub async fn from_config(config: &Config) -> anyhow::Result<Self> {
        use crate::storage::SqliteRepository;

        tracing::info!(path = %config.sqlite_path, "Opening SQLite storage");
        let repo = SqliteRepository::new(&config.sqlite_path, config.schema()).await?;
        Ok(Self::new(Arc::new(repo)))
    }

    /// Creates an AppState backed by the storage feature selected at compile time.
    #[cfg(not(feature = "sqlite"))]
    pub async fn from_config(config: &Config) -> anyhow::Result<Self> {
        tracing::info!("Using in-memory storage");
        let repo = InMemoryRepository::with_schema(config.schema());
        Ok(Self::new(Arc::new(repo)))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(InMemoryRepository::new()))
    }
}
