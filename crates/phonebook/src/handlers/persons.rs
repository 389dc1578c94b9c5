//! Person CRUD handlers.
//!
//! Handlers call the repository and shape the response. Store failures are
//! returned as [`AppError`] and classified in one place; only the create-time
//! missing-field check is answered here.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use phonebook_core::person::{CreatePersonRequest, Person, UpdatePersonRequest};
use serde_json::Value;

use crate::{
    handlers::{
        error::{error_response, json_body},
        AppError,
    },
    state::AppState,
};

/// List all persons (GET /api/persons).
pub async fn list_persons(State(state): State<AppState>) -> Result<Json<Vec<Person>>, AppError> {
    let persons = state.person_repo.find_all().await?;
    Ok(Json(persons))
}

/// Get a single person by ID (GET /api/persons/{id}).
///
/// An unknown id is a 404 with an empty body.
pub async fn get_person(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    match state.person_repo.find_by_id(&id).await? {
        Some(person) => Ok(Json(person).into_response()),
        None => Ok(StatusCode::NOT_FOUND.into_response()),
    }
}

/// Create a new person (POST /api/persons).
///
/// Responds 200 with the stored person, including its assigned id.
pub async fn create_person(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Person>, Response> {
    let payload: CreatePersonRequest = json_body(body)?;
    tracing::debug!(payload = ?payload, "Received create person request");

    let new_person = payload
        .into_new_person()
        .map_err(|e| error_response(StatusCode::BAD_REQUEST, e.to_string()))?;

    let person = state
        .person_repo
        .create(new_person)
        .await
        .map_err(|e| AppError::from(e).into_response())?;

    tracing::info!(person_id = %person.id, name = %person.name, "Created new person");

    Ok(Json(person))
}

/// Update a person by ID (PUT /api/persons/{id}).
///
/// Responds with the post-update record, or `null` when no record has this id.
pub async fn update_person(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Option<Person>>, Response> {
    let update: UpdatePersonRequest = json_body(body)?;

    let person = state
        .person_repo
        .update_by_id(&id, &update)
        .await
        .map_err(|e| AppError::from(e).into_response())?;

    match &person {
        Some(person) => tracing::info!(person_id = %person.id, "Updated person"),
        None => tracing::debug!(person_id = %id, "Update matched no person"),
    }

    Ok(Json(person))
}

/// Delete a person by ID (DELETE /api/persons/{id}).
///
/// Always 204, whether or not the record existed.
pub async fn delete_person(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    if state.person_repo.delete_by_id(&id).await?.is_some() {
        tracing::info!(person_id = %id, "Deleted person");
    }

    Ok(StatusCode::NO_CONTENT)
}
