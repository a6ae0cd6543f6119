use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use common::types::ErrorBody;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::{error, warn};

/// Error response with a status code and a JSON `ErrorBody`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub body: ErrorBody,
}

impl JsonApiError {
    pub fn new(status: StatusCode, title: &str, message: Option<String>) -> Self {
        Self { status, body: ErrorBody::new(title, message) }
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::InvalidArgument(_) => JsonApiError::new(StatusCode::BAD_REQUEST, "Invalid Argument", Some(e.to_string())),
            ServiceError::NotFound(_) => {
                warn!(err = %e, "student_not_found");
                JsonApiError::new(StatusCode::NOT_FOUND, "Not Found", Some(e.to_string()))
            }
            ServiceError::Db(_) => {
                error!(err = %e, "storage failure");
                JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error", Some("storage failure".into()))
            }
        }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("storage unavailable: {0}")]
    Storage(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_errors_map_to_status_codes() {
        let cases = [
            (ServiceError::InvalidArgument("page size must be > 0".into()), StatusCode::BAD_REQUEST),
            (ServiceError::not_found("student", 1), StatusCode::NOT_FOUND),
            (ServiceError::Db("connection refused".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(JsonApiError::from(err).status, status);
        }
    }

    #[test]
    fn not_found_body_carries_detail() {
        let e = JsonApiError::from(ServiceError::not_found("student", 9));
        assert_eq!(e.body.error, "Not Found");
        assert_eq!(e.body.message.as_deref(), Some("not found: student 9"));
    }

    #[test]
    fn storage_failure_body_hides_driver_detail() {
        let e = JsonApiError::from(ServiceError::Db("error returned from database: password authentication failed for user \"admin\"".into()));
        assert_eq!(e.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(e.body.message.as_deref(), Some("storage failure"));
    }
}
