//! Field validators.
//!
//! Each rule checks one raw JSON value (or its absence) and returns either the
//! normalized value or a [`Violation`]. Rules carry a human label that is used
//! to build client-facing messages, e.g. "Long term goal is required".

use serde_json::Value;

use crate::blueprint::error::{ErrorKind, Violation};

/// A pure single-value check.
pub trait Rule {
    type Output;

    fn check(&self, value: Option<&Value>) -> Result<Self::Output, Violation>;
}

/// Treats a missing key and an explicit `null` the same way.
fn present(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| !v.is_null())
}

fn check_length(label: &str, s: &str, min_len: usize, max_len: usize) -> Result<(), Violation> {
    let len = s.chars().count();
    if len < min_len {
        return Err(Violation::new(
            ErrorKind::TooShort,
            format!("{label} must be at least {min_len} characters"),
        ));
    }
    if len > max_len {
        return Err(Violation::new(
            ErrorKind::TooLong,
            format!("{label} is too long (maximum {max_len} characters)"),
        ));
    }
    Ok(())
}

/// Coerces a JSON number or a numeric string to `f64`.
///
/// Blank strings count as missing so that untouched form inputs report
/// "required" rather than a type error.
fn coerce_number(label: &str, value: Option<&Value>) -> Result<f64, Violation> {
    let number = match present(value) {
        None => return Err(Violation::required(format!("{label} is required"))),
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Err(Violation::required(format!("{label} is required")));
            }
            trimmed.parse::<f64>().ok()
        }
        Some(_) => None,
    };
    number
        .filter(|n| n.is_finite())
        .ok_or_else(|| Violation::new(ErrorKind::Type, format!("{label} must be a number")))
}

fn range_message(label: &str, min: f64, max: f64) -> String {
    if max.is_infinite() {
        if min == 0.0 {
            format!("{label} must be a non-negative number")
        } else {
            format!("{label} must be at least {min}")
        }
    } else {
        format!("{label} must be between {min} and {max}")
    }
}

// ---------------------------------------------------------------------------
// Strings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
pub struct RequiredString {
    label: &'static str,
    min_len: usize,
    max_len: usize,
}

pub fn required_string(label: &'static str, max_len: usize) -> RequiredString {
    RequiredString {
        label,
        min_len: 1,
        max_len,
    }
}

impl RequiredString {
    /// Raises the minimum length above the default of one character.
    #[allow(dead_code)]
    pub fn min_len(mut self, min_len: usize) -> Self {
        self.min_len = min_len;
        self
    }
}

impl Rule for RequiredString {
    type Output = String;

    fn check(&self, value: Option<&Value>) -> Result<String, Violation> {
        let label = self.label;
        let s = match present(value) {
            None => return Err(Violation::required(format!("{label} is required"))),
            Some(Value::String(s)) => s,
            Some(_) => {
                return Err(Violation::new(
                    ErrorKind::Type,
                    format!("{label} must be a string"),
                ))
            }
        };
        if s.trim().is_empty() {
            return Err(Violation::required(format!("{label} cannot be empty")));
        }
        check_length(label, s, self.min_len, self.max_len)?;
        Ok(s.clone())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct OptionalString {
    label: &'static str,
    max_len: usize,
}

pub fn optional_string(label: &'static str, max_len: usize) -> OptionalString {
    OptionalString { label, max_len }
}

impl Rule for OptionalString {
    type Output = Option<String>;

    fn check(&self, value: Option<&Value>) -> Result<Option<String>, Violation> {
        match present(value) {
            None => Ok(None),
            Some(Value::String(s)) => {
                check_length(self.label, s, 0, self.max_len)?;
                Ok(Some(s.clone()))
            }
            Some(_) => Err(Violation::new(
                ErrorKind::Type,
                format!("{} must be a string", self.label),
            )),
        }
    }
}

// ---------------------------------------------------------------------------
// Booleans
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
pub struct RequiredBoolean {
    label: &'static str,
}

pub fn required_boolean(label: &'static str) -> RequiredBoolean {
    RequiredBoolean { label }
}

impl Rule for RequiredBoolean {
    type Output = bool;

    fn check(&self, value: Option<&Value>) -> Result<bool, Violation> {
        match present(value) {
            None => Err(Violation::required(format!("{} is required", self.label))),
            Some(Value::Bool(b)) => Ok(*b),
            Some(_) => Err(Violation::new(
                ErrorKind::Type,
                format!("{} must be a boolean", self.label),
            )),
        }
    }
}

// ---------------------------------------------------------------------------
// Numbers
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
pub struct NumberInRange {
    label: &'static str,
    min: f64,
    max: f64,
}

/// A required number in `[min, max]`. Use `f64::INFINITY` for an open upper bound.
pub fn number_in_range(label: &'static str, min: f64, max: f64) -> NumberInRange {
    NumberInRange { label, min, max }
}

impl Rule for NumberInRange {
    type Output = f64;

    fn check(&self, value: Option<&Value>) -> Result<f64, Violation> {
        let n = coerce_number(self.label, value)?;
        if n < self.min || n > self.max {
            return Err(Violation::new(
                ErrorKind::Range,
                range_message(self.label, self.min, self.max),
            ));
        }
        Ok(n)
    }
}

/// An integer score, e.g. a 1-5 rating or a 0-100 self assessment.
#[derive(Debug, Clone, Copy)]
pub struct Rating {
    label: &'static str,
    min: u8,
    max: u8,
}

pub fn rating(label: &'static str, min: u8, max: u8) -> Rating {
    Rating { label, min, max }
}

impl Rule for Rating {
    type Output = u8;

    fn check(&self, value: Option<&Value>) -> Result<u8, Violation> {
        let n = coerce_number(self.label, value)?;
        if n.fract() != 0.0 {
            return Err(Violation::new(
                ErrorKind::Type,
                format!("{} must be a whole number", self.label),
            ));
        }
        let (min, max) = (f64::from(self.min), f64::from(self.max));
        if n < min || n > max {
            return Err(Violation::new(
                ErrorKind::Range,
                range_message(self.label, min, max),
            ));
        }
        Ok(n as u8)
    }
}

/// An optional non-negative amount that defaults to zero.
#[derive(Debug, Clone, Copy)]
pub struct OptionalAmount {
    label: &'static str,
}

pub fn optional_amount(label: &'static str) -> OptionalAmount {
    OptionalAmount { label }
}

impl Rule for OptionalAmount {
    type Output = f64;

    fn check(&self, value: Option<&Value>) -> Result<f64, Violation> {
        match present(value) {
            None => return Ok(0.0),
            Some(Value::String(s)) if s.trim().is_empty() => return Ok(0.0),
            Some(_) => {}
        }
        number_in_range(self.label, 0.0, f64::INFINITY).check(value)
    }
}

// ---------------------------------------------------------------------------
// Enumerations and lists
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
pub struct EnumMember<'a> {
    label: &'static str,
    allowed: &'a [String],
}

pub fn enum_member<'a>(label: &'static str, allowed: &'a [String]) -> EnumMember<'a> {
    EnumMember { label, allowed }
}

impl Rule for EnumMember<'_> {
    type Output = String;

    fn check(&self, value: Option<&Value>) -> Result<String, Violation> {
        let label = self.label;
        let s = match present(value) {
            None => return Err(Violation::required(format!("{label} is required"))),
            Some(Value::String(s)) => s,
            Some(_) => {
                return Err(Violation::new(
                    ErrorKind::Type,
                    format!("{label} must be a string"),
                ))
            }
        };
        if s.is_empty() {
            return Err(Violation::required(format!("{label} is required")));
        }
        if !self.allowed.iter().any(|a| a == s) {
            return Err(Violation::new(
                ErrorKind::Enum,
                format!("{label} must be one of: {}", self.allowed.join(", ")),
            ));
        }
        Ok(s.clone())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct NonEmptyStringList {
    label: &'static str,
}

pub fn non_empty_string_list(label: &'static str) -> NonEmptyStringList {
    NonEmptyStringList { label }
}

impl Rule for NonEmptyStringList {
    type Output = Vec<String>;

    fn check(&self, value: Option<&Value>) -> Result<Vec<String>, Violation> {
        let label = self.label;
        let items = match present(value) {
            None => return Err(Violation::required(format!("{label} is required"))),
            Some(Value::Array(items)) => items,
            Some(_) => {
                return Err(Violation::new(
                    ErrorKind::Type,
                    format!("{label} must be a list"),
                ))
            }
        };
        if items.is_empty() {
            return Err(Violation::required(format!(
                "At least one {} is required",
                label.to_lowercase()
            )));
        }
        items
            .iter()
            .map(|item| {
                item.as_str().map(String::from).ok_or_else(|| {
                    Violation::required(format!("Every {} must be a string", label.to_lowercase()))
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn kind<T: std::fmt::Debug>(r: Result<T, Violation>) -> ErrorKind {
        r.unwrap_err().kind
    }

    #[test]
    fn test_required_string_accepts_text() {
        let rule = required_string("Long term goal", 10);
        assert_eq!(rule.check(Some(&json!("Lead"))).unwrap(), "Lead");
    }

    #[test]
    fn test_required_string_missing_and_blank() {
        let rule = required_string("Long term goal", 10);
        assert_eq!(kind(rule.check(None)), ErrorKind::Required);
        assert_eq!(kind(rule.check(Some(&Value::Null))), ErrorKind::Required);
        assert_eq!(kind(rule.check(Some(&json!("   ")))), ErrorKind::Required);
    }

    #[test]
    fn test_required_string_wrong_type() {
        let rule = required_string("Long term goal", 10);
        let err = rule.check(Some(&json!(42))).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Type);
        assert_eq!(err.message, "Long term goal must be a string");
    }

    #[test]
    fn test_required_string_length_bounds() {
        let rule = required_string("Goal", 5).min_len(3);
        assert_eq!(kind(rule.check(Some(&json!("ab")))), ErrorKind::TooShort);
        assert_eq!(kind(rule.check(Some(&json!("abcdef")))), ErrorKind::TooLong);
        assert!(rule.check(Some(&json!("abcde"))).is_ok());
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let rule = required_string("Goal", 3);
        assert!(rule.check(Some(&json!("été"))).is_ok());
    }

    #[test]
    fn test_optional_string() {
        let rule = optional_string("Excitement", 5);
        assert_eq!(rule.check(None).unwrap(), None);
        assert_eq!(rule.check(Some(&Value::Null)).unwrap(), None);
        assert_eq!(rule.check(Some(&json!(""))).unwrap(), Some(String::new()));
        assert_eq!(kind(rule.check(Some(&json!("toolong")))), ErrorKind::TooLong);
        assert_eq!(kind(rule.check(Some(&json!(true)))), ErrorKind::Type);
    }

    #[test]
    fn test_required_boolean() {
        let rule = required_boolean("No goals");
        assert!(!rule.check(Some(&json!(false))).unwrap());
        assert_eq!(kind(rule.check(None)), ErrorKind::Required);
        assert_eq!(kind(rule.check(Some(&json!("true")))), ErrorKind::Type);
        assert_eq!(kind(rule.check(Some(&json!(0)))), ErrorKind::Type);
    }

    #[test]
    fn test_number_coerces_numeric_strings() {
        let rule = number_in_range("Annual salary", 0.0, f64::INFINITY);
        assert_eq!(rule.check(Some(&json!("85000"))).unwrap(), 85000.0);
        assert_eq!(rule.check(Some(&json!(" 12.5 "))).unwrap(), 12.5);
        assert_eq!(rule.check(Some(&json!(0))).unwrap(), 0.0);
    }

    #[test]
    fn test_number_rejects_non_numeric() {
        let rule = number_in_range("Annual salary", 0.0, f64::INFINITY);
        assert_eq!(kind(rule.check(Some(&json!("lots")))), ErrorKind::Type);
        assert_eq!(kind(rule.check(Some(&json!("NaN")))), ErrorKind::Type);
        assert_eq!(kind(rule.check(Some(&json!("inf")))), ErrorKind::Type);
        assert_eq!(kind(rule.check(Some(&json!(true)))), ErrorKind::Type);
        assert_eq!(kind(rule.check(Some(&json!("")))), ErrorKind::Required);
    }

    #[test]
    fn test_number_range_message() {
        let rule = number_in_range("Annual salary", 0.0, f64::INFINITY);
        let err = rule.check(Some(&json!(-1))).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Range);
        assert_eq!(err.message, "Annual salary must be a non-negative number");
    }

    #[test]
    fn test_rating_bounds() {
        let rule = rating("Clarity", 1, 5);
        assert_eq!(rule.check(Some(&json!(1))).unwrap(), 1);
        assert_eq!(rule.check(Some(&json!("5"))).unwrap(), 5);
        assert_eq!(rule.check(Some(&json!(3.0))).unwrap(), 3);
        let err = rule.check(Some(&json!(6))).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Range);
        assert_eq!(err.message, "Clarity must be between 1 and 5");
        assert_eq!(kind(rule.check(Some(&json!(0)))), ErrorKind::Range);
    }

    #[test]
    fn test_rating_rejects_fractions() {
        let rule = rating("Clarity", 1, 5);
        let err = rule.check(Some(&json!("2.5"))).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Type);
        assert_eq!(err.message, "Clarity must be a whole number");
    }

    #[test]
    fn test_optional_amount_defaults_to_zero() {
        let rule = optional_amount("Annual bonus");
        assert_eq!(rule.check(None).unwrap(), 0.0);
        assert_eq!(rule.check(Some(&Value::Null)).unwrap(), 0.0);
        assert_eq!(rule.check(Some(&json!(""))).unwrap(), 0.0);
        assert_eq!(rule.check(Some(&json!("1500"))).unwrap(), 1500.0);
        assert_eq!(kind(rule.check(Some(&json!(-5)))), ErrorKind::Range);
        assert_eq!(kind(rule.check(Some(&json!([])))), ErrorKind::Type);
    }

    #[test]
    fn test_enum_member() {
        let allowed = vec!["Ready now".to_string(), "Not sure".to_string()];
        let rule = enum_member("Readiness", &allowed);
        assert_eq!(rule.check(Some(&json!("Not sure"))).unwrap(), "Not sure");
        assert_eq!(kind(rule.check(Some(&json!("not sure")))), ErrorKind::Enum);
        assert_eq!(kind(rule.check(Some(&json!(1)))), ErrorKind::Type);
        assert_eq!(kind(rule.check(Some(&json!("")))), ErrorKind::Required);
        assert_eq!(kind(rule.check(None)), ErrorKind::Required);
    }

    #[test]
    fn test_non_empty_string_list() {
        let rule = non_empty_string_list("Accountability method");
        assert_eq!(
            rule.check(Some(&json!(["Weekly check-ins"]))).unwrap(),
            vec!["Weekly check-ins".to_string()]
        );
        let err = rule.check(Some(&json!([]))).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Required);
        assert_eq!(err.message, "At least one accountability method is required");
        assert_eq!(kind(rule.check(Some(&json!(["ok", 3])))), ErrorKind::Required);
        assert_eq!(kind(rule.check(Some(&json!("ok")))), ErrorKind::Type);
    }
}
