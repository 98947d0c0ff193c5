use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use fleet_tracker_data_management::{NOT_FOUND_MESSAGE, RegistryError};
use fleet_tracker_lib::ValidationError;

/// Everything a handler can fail with. Bodies are plain text.
#[derive(Debug)]
pub enum ApiError {
    NotFound,
    Validation(ValidationError),
    MalformedBody(String),
}

impl From<ValidationError> for ApiError {
    fn from(error: ValidationError) -> Self {
        ApiError::Validation(error)
    }
}

impl From<RegistryError> for ApiError {
    fn from(error: RegistryError) -> Self {
        match error {
            RegistryError::NotFound(_) => ApiError::NotFound,
            RegistryError::Validation(error) => ApiError::Validation(error),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE).into_response(),
            ApiError::Validation(error) => {
                tracing::debug!("Rejected request: {error}");
                (StatusCode::BAD_REQUEST, error.to_string()).into_response()
            }
            ApiError::MalformedBody(message) => {
                tracing::debug!("Malformed request body: {message}");
                (StatusCode::BAD_REQUEST, message).into_response()
            }
        }
    }
}
