use thiserror::Error;

use models::errors::ModelError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Db(String),
}

impl ServiceError {
    pub fn not_found(entity: &str, id: i64) -> Self { Self::NotFound(format!("{} {}", entity, id)) }

    /// Short label used for metrics and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidArgument(_) => "invalid_argument",
            Self::NotFound(_) => "not_found",
            Self::Db(_) => "infrastructure",
        }
    }
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Validation(msg) => Self::InvalidArgument(msg),
        }
    }
}

impl From<sea_orm::DbErr> for ServiceError {
    fn from(e: sea_orm::DbErr) -> Self { Self::Db(e.to_string()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_validation_becomes_invalid_argument() {
        let e: ServiceError = ModelError::Validation("name required".into()).into();
        assert!(matches!(e, ServiceError::InvalidArgument(ref m) if m == "name required"));
        assert_eq!(e.kind(), "invalid_argument");
    }

    #[test]
    fn not_found_message_names_entity_and_id() {
        let e = ServiceError::not_found("student", 42);
        assert_eq!(e.to_string(), "not found: student 42");
        assert_eq!(e.kind(), "not_found");
    }
}
