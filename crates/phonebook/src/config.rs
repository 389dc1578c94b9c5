use std::{env, path::PathBuf};

use phonebook_core::person::PersonSchema;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory served for every path that is not an API route (default: "dist")
    pub static_dir: PathBuf,
    /// Minimum length of a stored name (default: 1)
    pub name_min_length: usize,
    /// Minimum length of a stored phone number (default: 1)
    pub number_min_length: usize,
    /// Reject stored numbers not shaped like `09-1234556` (default: false)
    pub number_format: bool,
    /// Path to SQLite database file (default: "phonebook.db")
    /// Note: Only used when the `sqlite` feature is enabled.
    #[allow(dead_code)]
    pub sqlite_path: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `STATIC_DIR` - Static asset directory (default: "dist")
    /// - `NAME_MIN_LENGTH` - Minimum stored name length (default: 1)
    /// - `NUMBER_MIN_LENGTH` - Minimum stored number length (default: 1)
    /// - `NUMBER_FORMAT` - Enforce the phone number format (default: false)
    /// - `SQLITE_PATH` - SQLite database path (default: "phonebook.db")
    pub fn from_env() -> Self {
        let defaults = PersonSchema::default();

        Self {
            static_dir: env::var("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("dist")),
            name_min_length: env::var("NAME_MIN_LENGTH")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.name_min_length),
            number_min_length: env::var("NUMBER_MIN_LENGTH")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.number_min_length),
            number_format: env::var("NUMBER_FORMAT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.number_format),
            sqlite_path: env::var("SQLITE_PATH").unwrap_or_else(|_| "phonebook.db".to_string()),
        }
    }

    /// Get the store schema described by this configuration.
    pub fn schema(&self) -> PersonSchema {
        PersonSchema {
            name_min_length: self.name_min_length,
            number_min_length: self.number_min_length,
            number_format: self.number_format,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
