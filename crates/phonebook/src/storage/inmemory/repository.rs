//! In-memory repository implementation.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use phonebook_core::person::{NewPerson, Person, PersonId, PersonSchema, UpdatePersonRequest};
use phonebook_core::storage::{PersonRepository, Result};

/// In-memory storage backend.
///
/// Data is not persisted and will be lost when the repository is dropped.
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    persons: Arc<RwLock<Vec<Person>>>,
    schema: PersonSchema,
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRepository {
    /// Creates a new empty repository with the default schema.
    pub fn new() -> Self {
        Self::with_schema(PersonSchema::default())
    }

    /// Creates a new empty repository enforcing the given schema on writes.
    pub fn with_schema(schema: PersonSchema) -> Self {
        Self {
            persons: Arc::new(RwLock::new(Vec::new())),
            schema,
        }
    }
}

#[async_trait]
impl PersonRepository for InMemoryRepository {
    async fn find_all(&self) -> Result<Vec<Person>> {
        let persons = self.persons.read().await;
        Ok(persons.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Person>> {
        let id = PersonId::parse(id)?;
        let persons = self.persons.read().await;
        Ok(persons.iter().find(|p| p.id == id).cloned())
    }

    async fn count_all(&self) -> Result<u64> {
        let persons = self.persons.read().await;
        Ok(persons.len() as u64)
    }

    async fn create(&self, new_person: NewPerson) -> Result<Person> {
        let person = new_person.into_person(PersonId::new());
        self.schema.validate(&person)?;

        self.persons.write().await.push(person.clone());
        Ok(person)
    }

    async fn update_by_id(
        &self,
        id: &str,
        update: &UpdatePersonRequest,
    ) -> Result<Option<Person>> {
        let id = PersonId::parse(id)?;
        self.schema.validate_update(update)?;

        let mut persons = self.persons.write().await;
        Ok(persons.iter_mut().find(|p| p.id == id).map(|person| {
            update.apply_to(person);
            person.clone()
        }))
    }

    async fn delete_by_id(&self, id: &str) -> Result<Option<Person>> {
        let id = PersonId::parse(id)?;
        let mut persons = self.persons.write().await;
        Ok(persons
            .iter()
            .position(|p| p.id == id)
            .map(|index| persons.remove(index)))
    }
}
