use crate::shared::validation::FieldErrors;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Invalid fields: {0}")]
    FieldErrors(FieldErrors),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Conflict: {0}")]
    Conflict(String),
    #[error("Internal server error: {0}")]
    InternalServerError(#[from] anyhow::Error),
}

/// JSON:API error object
#[derive(Debug, Serialize, ToSchema)]
pub struct JsonApiError {
    pub status: String,
    pub title: String,
    pub detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<JsonApiErrorSource>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct JsonApiErrorSource {
    pub pointer: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub errors: Vec<JsonApiError>,
}

impl JsonApiError {
    fn new(status: StatusCode, title: &str, detail: impl Into<String>) -> Self {
        Self {
            status: status.as_u16().to_string(),
            title: title.to_string(),
            detail: detail.into(),
            source: None,
        }
    }

    fn with_pointer(mut self, field: &str) -> Self {
        self.source = Some(JsonApiErrorSource {
            pointer: format!("/data/attributes/{}", field),
        });
        self
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) | AppError::FieldErrors(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let errors = match self {
            AppError::ValidationError(msg) => {
                vec![JsonApiError::new(status, "Validation Error", msg)]
            }
            AppError::FieldErrors(fields) => fields
                .iter()
                .map(|(field, message)| {
                    JsonApiError::new(status, "Validation Error", message).with_pointer(field)
                })
                .collect(),
            AppError::NotFound(msg) => vec![JsonApiError::new(status, "Not Found", msg)],
            AppError::Conflict(msg) => vec![JsonApiError::new(status, "Conflict", msg)],
            AppError::InternalServerError(e) => {
                tracing::error!("Internal server error: {:?}", e);
                vec![JsonApiError::new(
                    status,
                    "Internal Server Error",
                    "Internal server error",
                )]
            }
        };

        (status, Json(ErrorResponse { errors })).into_response()
    }
}
