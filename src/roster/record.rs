//! Student record types and the backend wire schema.
//!
//! The backend speaks Portuguese field names (`nome`, `curso`, `matricula`);
//! the serde renames below are the only place those names appear.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Server-assigned record identifier.
///
/// Opaque to the client: the backend may hand out integers or strings and
/// the value is only ever echoed back in item URLs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Int(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Int(value) => write!(f, "{}", value),
            RecordId::Text(value) => f.write_str(value),
        }
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        RecordId::Int(value)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        RecordId::Text(value.to_string())
    }
}

/// A persisted student, as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub id: RecordId,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "curso")]
    pub course: String,
    #[serde(rename = "matricula")]
    pub registration_number: String,
}

impl StudentRecord {
    /// Names of required fields that are empty.
    pub fn empty_fields(&self) -> Vec<&'static str> {
        self.to_draft().missing_fields()
    }

    /// Copy the editable fields into a fresh draft.
    pub fn to_draft(&self) -> Draft {
        Draft {
            name: self.name.clone(),
            course: self.course.clone(),
            registration_number: self.registration_number.clone(),
        }
    }
}

/// Editable form fields, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Course,
    RegistrationNumber,
}

impl DraftField {
    pub const ALL: [DraftField; 3] = [
        DraftField::Name,
        DraftField::Course,
        DraftField::RegistrationNumber,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DraftField::Name => "Name",
            DraftField::Course => "Course",
            DraftField::RegistrationNumber => "Registration",
        }
    }

    /// Next field in display order, or `None` after the last one.
    pub fn next(self) -> Option<DraftField> {
        match self {
            DraftField::Name => Some(DraftField::Course),
            DraftField::Course => Some(DraftField::RegistrationNumber),
            DraftField::RegistrationNumber => None,
        }
    }
}

/// In-progress form values. Serializes to the create/update request body.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Draft {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "curso")]
    pub course: String,
    #[serde(rename = "matricula")]
    pub registration_number: String,
}

impl Draft {
    pub fn new(
        name: impl Into<String>,
        course: impl Into<String>,
        registration_number: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            course: course.into(),
            registration_number: registration_number.into(),
        }
    }

    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::Name => &self.name,
            DraftField::Course => &self.course,
            DraftField::RegistrationNumber => &self.registration_number,
        }
    }

    pub fn field_mut(&mut self, field: DraftField) -> &mut String {
        match field {
            DraftField::Name => &mut self.name,
            DraftField::Course => &mut self.course,
            DraftField::RegistrationNumber => &mut self.registration_number,
        }
    }

    /// Labels of fields that are empty. Values are not trimmed, so
    /// whitespace-only input counts as filled in.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        DraftField::ALL
            .iter()
            .filter(|field| self.field(**field).is_empty())
            .map(|field| field.label())
            .collect()
    }

    pub fn is_valid(&self) -> bool {
        self.missing_fields().is_empty()
    }

    pub fn is_empty(&self) -> bool {
        DraftField::ALL.iter().all(|field| self.field(*field).is_empty())
    }
}
