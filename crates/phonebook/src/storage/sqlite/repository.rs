//! SQLite repository implementation.
//!
//! Implements [`PersonRepository`] from `phonebook_core::storage` using SQLite.

use async_trait::async_trait;
use tokio_rusqlite::Connection;

use phonebook_core::person::{NewPerson, Person, PersonId, PersonSchema, UpdatePersonRequest};
use phonebook_core::storage::{PersonRepository, RepositoryError, Result};

use super::conversions::row_to_person;
use super::error::map_tokio_rusqlite_error;
use super::schema;

const ENTITY: &str = "Person";

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based repository implementation.
pub struct SqliteRepository {
    conn: Connection,
    schema: PersonSchema,
}

impl SqliteRepository {
    /// Creates a new repository with a file-based database.
    ///
    /// The database file will be created if it doesn't exist.
    /// Schema tables are created automatically.
    pub async fn new(path: &str, schema: PersonSchema) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn, schema })
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn new_in_memory(schema: PersonSchema) -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn, schema })
    }

    /// Initialize the database schema.
    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES).map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }
}

#[async_trait]
impl PersonRepository for SqliteRepository {
    async fn find_all(&self) -> Result<Vec<Person>> {
        self.conn
            .call(|conn| {
                let mut stmt = conn.prepare(schema::SELECT_ALL_PERSONS).map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_person).map_err(wrap_err)?;

                let mut persons = Vec::new();
                for row_result in rows {
                    persons.push(row_result.map_err(wrap_err)?);
                }
                Ok(persons)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, ENTITY, ""))
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Person>> {
        let id = PersonId::parse(id)?;
        let id_str = id.to_string();

        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(schema::SELECT_PERSON_BY_ID).map_err(wrap_err)?;
                match stmt.query_row([&id_str], row_to_person) {
                    Ok(person) => Ok(Some(person)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, ENTITY, id.to_string()))
    }

    async fn count_all(&self) -> Result<u64> {
        self.conn
            .call(|conn| {
                let count: i64 = conn
                    .query_row(schema::COUNT_PERSONS, [], |row| row.get(0))
                    .map_err(wrap_err)?;
                Ok(count)
            })
            .await
            .map(|count| count.max(0) as u64)
            .map_err(|e| map_tokio_rusqlite_error(e, ENTITY, ""))
    }

    async fn create(&self, new_person: NewPerson) -> Result<Person> {
        let person = new_person.into_person(PersonId::new());
        self.schema.validate(&person)?;

        let id = person.id.to_string();
        let name = person.name.clone();
        let number = person.number.clone();

        self.conn
            .call(move |conn| {
                conn.execute(schema::INSERT_PERSON, [&id, &name, &number])
                    .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, ENTITY, person.id.to_string()))?;

        Ok(person)
    }

    async fn update_by_id(
        &self,
        id: &str,
        update: &UpdatePersonRequest,
    ) -> Result<Option<Person>> {
        let id = PersonId::parse(id)?;
        self.schema.validate_update(update)?;

        let id_str = id.to_string();
        let update = update.clone();

        self.conn
            .call(move |conn| {
                let tx = conn.transaction().map_err(wrap_err)?;

                let mut person = match tx.query_row(
                    schema::SELECT_PERSON_BY_ID,
                    [&id_str],
                    row_to_person,
                ) {
                    Ok(person) => person,
                    Err(rusqlite::Error::QueryReturnedNoRows) => return Ok(None),
                    Err(e) => return Err(wrap_err(e)),
                };

                update.apply_to(&mut person);

                tx.execute(
                    schema::UPDATE_PERSON,
                    [&id_str, &person.name, &person.number],
                )
                .map_err(wrap_err)?;
                tx.commit().map_err(wrap_err)?;

                Ok(Some(person))
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, ENTITY, id.to_string()))
    }

    async fn delete_by_id(&self, id: &str) -> Result<Option<Person>> {
        let id = PersonId::parse(id)?;
        let id_str = id.to_string();

        self.conn
            .call(move |conn| {
                let tx = conn.transaction().map_err(wrap_err)?;

                let existing = match tx.query_row(
                    schema::SELECT_PERSON_BY_ID,
                    [&id_str],
                    row_to_person,
                ) {
                    Ok(person) => Some(person),
                    Err(rusqlite::Error::QueryReturnedNoRows) => None,
                    Err(e) => return Err(wrap_err(e)),
                };

                tx.execute(schema::DELETE_PERSON, [&id_str])
                    .map_err(wrap_err)?;
                tx.commit().map_err(wrap_err)?;

                Ok(existing)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, ENTITY, id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn repo() -> SqliteRepository {
        SqliteRepository::new_in_memory(PersonSchema::default())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = repo().await;

        let created = repo
            .create(NewPerson::new("Ada Lovelace", "040-123456"))
            .await
            .unwrap();
        let found = repo.find_by_id(&created.id.to_string()).await.unwrap();

        assert_eq!(found, Some(created));
    }

    #[tokio::test]
    async fn test_find_all_keeps_insertion_order() {
        let repo = repo().await;
        let names = ["Arto Hellas", "Dan Abramov", "Mary Poppendieck"];
        for name in names {
            repo.create(NewPerson::new(name, "040-123456")).await.unwrap();
        }

        let all = repo.find_all().await.unwrap();

        let listed: Vec<&str> = all.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(listed, names);
        assert_eq!(repo.count_all().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_malformed_id() {
        let repo = repo().await;

        assert_eq!(
            repo.find_by_id("5c41c90e84d891c15dfa3431").await,
            Err(RepositoryError::MalformedId(
                "5c41c90e84d891c15dfa3431".to_string()
            ))
        );
    }

    #[tokio::test]
    async fn test_create_enforces_schema() {
        let repo = SqliteRepository::new_in_memory(PersonSchema::strict())
            .await
            .unwrap();

        let result = repo.create(NewPerson::new("Ada", "123")).await;

        assert!(matches!(result, Err(RepositoryError::Validation(_))));
        assert_eq!(repo.count_all().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_update() {
        let repo = repo().await;
        let created = repo
            .create(NewPerson::new("Ada Lovelace", "040-123456"))
            .await
            .unwrap();

        let update = UpdatePersonRequest::default().with_name("Ada King");
        let updated = repo
            .update_by_id(&created.id.to_string(), &update)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.name, "Ada King");
        assert_eq!(updated.number, "040-123456");

        let stored = repo
            .find_by_id(&created.id.to_string())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored, updated);
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_none() {
        let repo = repo().await;
        let update = UpdatePersonRequest::default().with_name("Grace Hopper");

        let result = repo
            .update_by_id(&PersonId::new().to_string(), &update)
            .await
            .unwrap();

        assert_eq!(result, None);
    }

    #[tokio::test]
    async fn test_delete_is_silent_for_unknown_id() {
        let repo = repo().await;
        let created = repo
            .create(NewPerson::new("Ada Lovelace", "040-123456"))
            .await
            .unwrap();

        let removed = repo.delete_by_id(&created.id.to_string()).await.unwrap();
        assert_eq!(removed, Some(created.clone()));

        let again = repo.delete_by_id(&created.id.to_string()).await.unwrap();
        assert_eq!(again, None);
        assert_eq!(repo.count_all().await.unwrap(), 0);
    }
}
