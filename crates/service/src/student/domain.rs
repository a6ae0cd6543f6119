//! API-facing shapes of a student and the conversions to and from
//! `models::student` storage records.

use chrono::{DateTime, FixedOffset, Utc};
use models::student;
use sea_orm::{NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;

/// A stored student as returned to callers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    pub course: Option<String>,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

/// Mutable fields of a student, used by create and update.
///
/// Carries no identifier, so one supplied by a client is dropped on deserialize.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StudentInput {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub course: Option<String>,
}

impl StudentInput {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Default::default() }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_course(mut self, course: impl Into<String>) -> Self {
        self.course = Some(course.into());
        self
    }

    /// Trim surrounding whitespace; blank optional fields become `None`.
    pub fn normalized(self) -> Self {
        fn opt(v: Option<String>) -> Option<String> {
            v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
        }
        Self { name: self.name.trim().to_string(), email: opt(self.email), course: opt(self.course) }
    }

    pub fn validate(&self) -> Result<(), ServiceError> {
        student::validate(&self.name, self.email.as_deref(), self.course.as_deref())?;
        Ok(())
    }

    /// Active model for an insert; the id is left for the database to assign.
    pub fn into_active_model(self) -> student::ActiveModel {
        let now: DateTime<FixedOffset> = Utc::now().into();
        student::ActiveModel {
            id: NotSet,
            name: Set(self.name),
            email: Set(self.email),
            course: Set(self.course),
            created_at: Set(now),
            updated_at: Set(now),
        }
    }

    /// Replace every mutable field of an existing record.
    pub fn apply_to(self, am: &mut student::ActiveModel) {
        am.name = Set(self.name);
        am.email = Set(self.email);
        am.course = Set(self.course);
        am.updated_at = Set(Utc::now().into());
    }
}

impl From<student::Model> for Student {
    fn from(m: student::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            email: m.email,
            course: m.course,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}
