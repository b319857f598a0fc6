//! Section composer.
//!
//! A [`Section`] walks one JSON object, runs a rule per declared field and
//! accumulates every failure under its full dotted path. Nested objects are
//! child sections whose errors are merged back into the parent, so a single
//! pass over the submission yields the complete error list.

use serde_json::{Map, Value};

use crate::blueprint::error::{ErrorKind, ValidationError, ValidationErrors, Violation};
use crate::blueprint::rules::Rule;

pub struct Section<'a> {
    path: String,
    fields: Option<&'a Map<String, Value>>,
    errors: Vec<ValidationError>,
}

fn join(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}.{name}")
    }
}

impl<'a> Section<'a> {
    /// Top-level section for a whole record. A non-object record is reported
    /// once at the empty path.
    pub fn root(value: &'a Value) -> Self {
        match value {
            Value::Object(fields) => Self {
                path: String::new(),
                fields: Some(fields),
                errors: Vec::new(),
            },
            _ => Self {
                path: String::new(),
                fields: None,
                errors: vec![Violation::new(ErrorKind::Type, "Submission must be an object").at("")],
            },
        }
    }

    fn child(&self, name: &str, label: &str) -> Section<'a> {
        let path = join(&self.path, name);
        match self.raw(name) {
            Some(Value::Object(fields)) => Section {
                path,
                fields: Some(fields),
                errors: Vec::new(),
            },
            None | Some(Value::Null) => Section {
                errors: vec![Violation::required(format!("{label} is required")).at(&path)],
                path,
                fields: None,
            },
            Some(_) => Section {
                errors: vec![
                    Violation::new(ErrorKind::Type, format!("{label} must be an object")).at(&path),
                ],
                path,
                fields: None,
            },
        }
    }

    /// The raw, unvalidated value of a field.
    pub fn raw(&self, name: &str) -> Option<&'a Value> {
        self.fields.and_then(|fields| fields.get(name))
    }

    /// Validates one field. Returns `None` and records the error on failure.
    pub fn field<R: Rule>(&mut self, name: &str, rule: R) -> Option<R::Output> {
        self.fields?;
        match rule.check(self.raw(name)) {
            Ok(value) => Some(value),
            Err(violation) => {
                self.reject(name, violation);
                None
            }
        }
    }

    /// Validates a nested object with its own section, merging its errors.
    pub fn nested<T>(
        &mut self,
        name: &str,
        label: &str,
        build: impl FnOnce(&mut Section<'a>) -> Option<T>,
    ) -> Option<T> {
        self.fields?;
        let mut child = self.child(name, label);
        let value = if child.fields.is_some() {
            build(&mut child)
        } else {
            None
        };
        self.errors.append(&mut child.errors);
        value
    }

    /// Records a failure against `name` that no single-field rule produced.
    pub fn reject(&mut self, name: &str, violation: Violation) {
        self.errors.push(violation.at(join(&self.path, name)));
    }

    /// Produces the normalized value, or every recorded error.
    pub fn finish<T>(self, value: Option<T>) -> Result<T, ValidationErrors> {
        match value {
            Some(value) if self.errors.is_empty() => Ok(value),
            _ => {
                debug_assert!(
                    !self.errors.is_empty(),
                    "section {:?} produced no value and no errors",
                    self.path
                );
                Err(ValidationErrors(self.errors))
            }
        }
    }
}
