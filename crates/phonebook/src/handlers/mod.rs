pub mod error;
pub mod fallback;
pub mod info;
pub mod persons;

pub use error::AppError;
