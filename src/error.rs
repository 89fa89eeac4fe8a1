use axum::{Json, http::StatusCode, response::IntoResponse};
use planetarium_schema::FieldViolation;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum PlanetariumError {
    #[error("planet failed validation")]
    Validation(Vec<FieldViolation>),

    #[error("malformed request body")]
    MalformedBody,

    #[error("a planet named {0:?} already exists")]
    DuplicateName(String),

    #[error("planet rejected by the datastore: {0}")]
    ConstraintViolation(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("actor rpc error: {0}")]
    Rpc(String),
}

impl IntoResponse for PlanetariumError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_body) = match self {
            PlanetariumError::Validation(violations) => (
                StatusCode::BAD_REQUEST,
                ApiErrorObject {
                    code: "INVALID_PLANET".to_string(),
                    message: "Planet failed validation.".to_string(),
                    details: serde_json::to_value(violations).ok(),
                },
            ),

            PlanetariumError::MalformedBody => (
                StatusCode::BAD_REQUEST,
                ApiErrorObject {
                    code: "MALFORMED_BODY".to_string(),
                    message: "Request body must be a JSON planet object.".to_string(),
                    details: None,
                },
            ),

            PlanetariumError::DuplicateName(name) => (
                StatusCode::CONFLICT,
                ApiErrorObject {
                    code: "DUPLICATE_NAME".to_string(),
                    message: format!("A planet named {name:?} already exists."),
                    details: None,
                },
            ),

            PlanetariumError::ConstraintViolation(message) => (
                StatusCode::BAD_REQUEST,
                ApiErrorObject {
                    code: "CONSTRAINT_VIOLATION".to_string(),
                    message,
                    details: None,
                },
            ),

            PlanetariumError::Database(_) | PlanetariumError::Rpc(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorObject {
                    code: "INTERNAL_ERROR".to_string(),
                    message: "An internal server error occurred.".to_string(),
                    details: None,
                },
            ),
        };
        (status, Json(ApiErrorBody { inner: error_body })).into_response()
    }
}

/// Standardized API error response payload.
#[derive(Serialize)]
pub struct ApiErrorObject {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

#[derive(Serialize)]
pub struct ApiErrorBody {
    #[serde(rename = "error")]
    pub inner: ApiErrorObject,
}
