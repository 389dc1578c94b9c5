mod error;
mod http_mapping;
mod traits;

pub use error::{ErrorKind, RepositoryError, Result};
pub use http_mapping::{
    classify_repository_error, ClassifiedError, INTERNAL_ERROR_MESSAGE, MALFORMED_ID_MESSAGE,
};
pub use traits::PersonRepository;
