use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;

use phonebook_core::storage::{
    classify_repository_error, ClassifiedError, RepositoryError, INTERNAL_ERROR_MESSAGE,
};

/// JSON error body: `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Error response with message, answered by the handler itself.
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    let msg = message.into();
    tracing::warn!(status = %status, message = %msg, "API error");
    (status, Json(ErrorBody::new(msg))).into_response()
}

/// Reads a JSON body as a payload object.
///
/// Only a JSON object fills payload fields. A request without a JSON content
/// type, or whose body is an array or a scalar, is read as an empty payload so
/// missing fields reach the validator. Unparseable JSON, or a field of the
/// wrong shape, is a 400.
pub fn json_body<T>(body: Result<Json<Value>, JsonRejection>) -> Result<T, Response>
where
    T: DeserializeOwned + Default,
{
    match body {
        Ok(Json(value @ Value::Object(_))) => serde_json::from_value(value)
            .map_err(|e| error_response(StatusCode::BAD_REQUEST, e.to_string())),
        Ok(Json(_)) | Err(JsonRejection::MissingJsonContentType(_)) => Ok(T::default()),
        Err(rejection) => Err(error_response(
            StatusCode::BAD_REQUEST,
            rejection.body_text(),
        )),
    }
}

/// Failure escalated by a handler.
///
/// Converting it into a response is the error classification step: store
/// errors are mapped by [`classify_repository_error`], anything else is a 500.
pub struct AppError(pub anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let classified = match self.0.downcast_ref::<RepositoryError>() {
            Some(repo_error) => classify_repository_error(repo_error),
            None => ClassifiedError {
                status: 500,
                message: INTERNAL_ERROR_MESSAGE.to_string(),
            },
        };

        let status =
            StatusCode::from_u16(classified.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            tracing::error!(error = %self.0, "Unhandled error");
        } else {
            tracing::warn!(status = %status, error = %self.0, "Request failed");
        }

        (status, Json(ErrorBody::new(classified.message))).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_of(response: Response) -> ErrorBody {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_malformed_id_is_400() {
        let response = AppError::from(RepositoryError::MalformedId("x".into())).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_of(response).await, ErrorBody::new("malformed id"));
    }

    #[tokio::test]
    async fn test_validation_is_400_with_message() {
        let response =
            AppError::from(RepositoryError::Validation("Person validation failed".into()))
                .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_of(response).await,
            ErrorBody::new("Person validation failed")
        );
    }

    #[tokio::test]
    async fn test_other_repository_error_is_500() {
        let response =
            AppError::from(RepositoryError::QueryFailed("disk full".into())).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_of(response).await,
            ErrorBody::new(INTERNAL_ERROR_MESSAGE)
        );
    }

    #[tokio::test]
    async fn test_unknown_error_is_500() {
        let response = AppError(anyhow::anyhow!("boom")).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[derive(Debug, Default, PartialEq, Deserialize)]
    struct Payload {
        #[serde(default)]
        name: Option<String>,
    }

    #[test]
    fn test_json_body_reads_objects() {
        let payload: Payload = json_body(Ok(Json(serde_json::json!({ "name": "Ada" })))).unwrap();
        assert_eq!(payload.name.as_deref(), Some("Ada"));
    }

    #[test]
    fn test_json_body_non_object_is_empty_payload() {
        for value in [
            serde_json::json!(["Ada", "123"]),
            serde_json::json!("Ada"),
            serde_json::json!(42),
            Value::Null,
        ] {
            let payload: Payload = json_body(Ok(Json(value.clone()))).unwrap();
            assert_eq!(payload, Payload::default(), "{value}");
        }
    }

    #[test]
    fn test_json_body_wrong_field_shape_is_400() {
        let response = json_body::<Payload>(Ok(Json(serde_json::json!({ "name": [1] }))))
            .unwrap_err();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_error_response_shape() {
        let response = error_response(StatusCode::BAD_REQUEST, "Name or number missing!");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_of(response).await,
            ErrorBody::new("Name or number missing!")
        );
    }
}
