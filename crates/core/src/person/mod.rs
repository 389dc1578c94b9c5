mod error;
mod operations;
mod requests;
mod schema;
mod types;

pub use error::PersonError;
pub use operations::validate_create_request;
pub use requests::{CreatePersonRequest, UpdatePersonRequest};
pub use schema::PersonSchema;
pub use types::{NewPerson, Person, PersonId};
