use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors;

pub const NAME_MAX_LEN: usize = 128;
pub const EMAIL_MAX_LEN: usize = 255;
pub const COURSE_MAX_LEN: usize = 128;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "student")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    pub course: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_name(name: &str) -> Result<(), errors::ModelError> {
    if name.trim().is_empty() {
        return Err(errors::ModelError::Validation("name required".into()));
    }
    if name.chars().count() > NAME_MAX_LEN {
        return Err(errors::ModelError::Validation(format!("name exceeds {NAME_MAX_LEN} characters")));
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), errors::ModelError> {
    if !email.contains('@') {
        return Err(errors::ModelError::Validation("invalid email".into()));
    }
    if email.chars().count() > EMAIL_MAX_LEN {
        return Err(errors::ModelError::Validation(format!("email exceeds {EMAIL_MAX_LEN} characters")));
    }
    Ok(())
}

pub fn validate_course(course: &str) -> Result<(), errors::ModelError> {
    if course.chars().count() > COURSE_MAX_LEN {
        return Err(errors::ModelError::Validation(format!("course exceeds {COURSE_MAX_LEN} characters")));
    }
    Ok(())
}

/// Validate every mutable field of a student record.
pub fn validate(name: &str, email: Option<&str>, course: Option<&str>) -> Result<(), errors::ModelError> {
    validate_name(name)?;
    if let Some(email) = email { validate_email(email)?; }
    if let Some(course) = course { validate_course(course)?; }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ModelError;

    #[test]
    fn blank_name_is_rejected() {
        assert!(matches!(validate_name("   "), Err(ModelError::Validation(_))));
        assert!(validate_name("Alice").is_ok());
    }

    #[test]
    fn long_name_is_rejected() {
        let long = "x".repeat(NAME_MAX_LEN + 1);
        assert!(validate_name(&long).is_err());
        assert!(validate_name(&"x".repeat(NAME_MAX_LEN)).is_ok());
    }

    #[test]
    fn email_needs_at_sign() {
        assert!(validate_email("alice.example.com").is_err());
        assert!(validate_email("alice@example.com").is_ok());
    }

    #[test]
    fn optional_fields_are_skipped_when_absent() {
        assert!(validate("Bob", None, None).is_ok());
        assert!(validate("Bob", Some("nope"), None).is_err());
        assert!(validate("Bob", None, Some(&"c".repeat(COURSE_MAX_LEN + 1))).is_err());
    }
}
