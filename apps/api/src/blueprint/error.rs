use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Category of a field-level failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Wrong primitive type (or not coercible to the expected one).
    Type,
    /// Missing, null or blank required value.
    Required,
    TooLong,
    TooShort,
    /// Numeric value outside its closed bound.
    Range,
    /// Value not in the allowed option set.
    Enum,
}

/// A rule failure that has not been attached to a field path yet.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct Violation {
    pub kind: ErrorKind,
    pub message: String,
}

impl Violation {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn required(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Required, message)
    }

    /// Attaches the violation to a dotted field path.
    pub fn at(self, path: impl Into<String>) -> ValidationError {
        ValidationError {
            path: path.into(),
            message: self.message,
            kind: self.kind,
        }
    }
}

/// A failure addressed by the full dotted path of the offending field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Error)]
#[error("{path}: {message}")]
pub struct ValidationError {
    pub path: String,
    pub message: String,
    pub kind: ErrorKind,
}

/// Every violation found in one submission, in declaration order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Error)]
#[serde(transparent)]
#[error("{} field(s) failed validation", .0.len())]
pub struct ValidationErrors(pub Vec<ValidationError>);

impl ValidationErrors {
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

#[cfg(test)]
impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.0.iter()
    }

    /// Returns the first error recorded at `path`, if any.
    pub fn at(&self, path: &str) -> Option<&ValidationError> {
        self.0.iter().find(|e| e.path == path)
    }
}

impl From<Vec<ValidationError>> for ValidationErrors {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_serializes_snake_case() {
        let v = serde_json::to_value(ErrorKind::TooLong).unwrap();
        assert_eq!(v, "too_long");
    }

    #[test]
    fn test_errors_serialize_as_plain_list() {
        let errors = ValidationErrors(vec![
            Violation::required("Vision is required").at("leadership_capabilities.vision")
        ]);
        let v = serde_json::to_value(&errors).unwrap();
        assert_eq!(
            v,
            serde_json::json!([{
                "path": "leadership_capabilities.vision",
                "message": "Vision is required",
                "kind": "required"
            }])
        );
    }

    #[test]
    fn test_display_counts_errors() {
        let errors = ValidationErrors(vec![
            Violation::required("a").at("x"),
            Violation::new(ErrorKind::Enum, "b").at("y"),
        ]);
        assert_eq!(errors.to_string(), "2 field(s) failed validation");
        assert_eq!(errors.at("y").map(|e| e.kind), Some(ErrorKind::Enum));
    }
}
