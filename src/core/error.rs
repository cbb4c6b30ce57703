use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A single field-level validation problem, named by the field's logical
/// name (e.g. "primary title") rather than its storage column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldIssue {
    pub field: String,
    pub message: String,
}

impl FieldIssue {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Every problem found while normalizing one record, reported together so a
/// caller can render all of them at once.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ValidationFailure {
    pub issues: Vec<FieldIssue>,
}

impl ValidationFailure {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.issues.push(FieldIssue::new(field, message));
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Consumes the accumulator: `Ok(value)` when no issue was recorded,
    /// otherwise the full issue list as a validation error.
    pub fn into_result<T>(self, value: T) -> Result<T> {
        if self.issues.is_empty() {
            Ok(value)
        } else {
            Err(StoreError::Validation(self))
        }
    }

    pub fn contains_field(&self, field: &str) -> bool {
        self.issues.iter().any(|issue| issue.field == field)
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.issues.iter().map(|i| i.to_string()).collect();
        write!(f, "{}", rendered.join("; "))
    }
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Validation failed: {0}")]
    Validation(ValidationFailure),

    #[error("Primary store unavailable: {0}")]
    PrimaryUnavailable(String),

    #[error("Backup unavailable: {0}")]
    BackupUnavailable(String),

    #[error("Snapshot write failed: {0}")]
    SnapshotWrite(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_failure_collects_all_issues() {
        let mut failure = ValidationFailure::new();
        failure.push("primary title", "missing");
        failure.push("project URL", "malformed");

        assert_eq!(failure.issues.len(), 2);
        assert!(failure.contains_field("primary title"));
        assert!(failure.contains_field("project URL"));
    }

    #[test]
    fn into_result_passes_value_through_when_clean() {
        let failure = ValidationFailure::new();
        assert_eq!(failure.into_result(7).unwrap(), 7);
    }

    #[test]
    fn into_result_surfaces_every_issue() {
        let mut failure = ValidationFailure::new();
        failure.push("issuer", "must not be empty");

        let err = failure.into_result(()).unwrap_err();
        match err {
            StoreError::Validation(inner) => assert_eq!(inner.issues.len(), 1),
            other => panic!("expected validation error, got {other}"),
        }
    }
}
