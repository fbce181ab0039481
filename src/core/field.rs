//! Primitive field kinds and their per-kind checks
//!
//! A [`FieldKind`] is a closed union of the value shapes a payload field may
//! take. Each variant knows how to check (and, for strings, normalize) a
//! `serde_json::Value` against its parameters.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use regex::Regex;
use serde_json::Value;

use super::error::{ValidationError, ViolatedRule};

/// Bounds and normalization for string-shaped fields
#[derive(Debug, Clone, Default)]
pub struct StringRule {
    /// Trim surrounding whitespace before any other check
    pub trim: bool,
    /// Minimum length in characters, inclusive
    pub min: Option<usize>,
    /// Maximum length in characters, inclusive
    pub max: Option<usize>,
    /// Full-value pattern the (trimmed) string must match
    pub pattern: Option<Regex>,
}

/// The closed set of primitive kinds a field constraint can declare
#[derive(Debug, Clone)]
pub enum FieldKind {
    String(StringRule),
    Integer,
    Number,
    Boolean,
    Date,
    /// Array of strings, each trimmed and optionally matched against a pattern
    ArrayOfString { pattern: Option<Regex> },
    /// Value must equal one of the listed literals
    Enum(Vec<Value>),
}

impl FieldKind {
    /// Check `value` against this kind and return the normalized value.
    ///
    /// Normalization is limited to string trimming; everything else passes
    /// through unchanged so that re-validating an output is a no-op.
    pub(crate) fn check(&self, field: &str, value: &Value) -> Result<Value, ValidationError> {
        match self {
            FieldKind::String(rule) => check_string(field, value, rule),
            FieldKind::Integer => check_integer(field, value),
            FieldKind::Number => check_number(field, value),
            FieldKind::Boolean => check_boolean(field, value),
            FieldKind::Date => check_date(field, value),
            FieldKind::ArrayOfString { pattern } => check_string_array(field, value, pattern),
            FieldKind::Enum(values) => check_enum(field, value, values),
        }
    }
}

fn violation(field: &str, rule: ViolatedRule, message: String) -> ValidationError {
    ValidationError::FieldConstraintViolation {
        field: field.to_string(),
        rule,
        message,
    }
}

fn check_string(field: &str, value: &Value, rule: &StringRule) -> Result<Value, ValidationError> {
    let Some(raw) = value.as_str() else {
        return Err(violation(
            field,
            ViolatedRule::Type,
            format!("'{}' must be a string", field),
        ));
    };

    let s = if rule.trim { raw.trim() } else { raw };
    let len = s.chars().count();

    if let Some(min) = rule.min
        && len < min
    {
        return Err(violation(
            field,
            ViolatedRule::Min,
            format!(
                "'{}' must have at least {} characters (currently: {})",
                field, min, len
            ),
        ));
    }
    if let Some(max) = rule.max
        && len > max
    {
        return Err(violation(
            field,
            ViolatedRule::Max,
            format!(
                "'{}' must not exceed {} characters (currently: {})",
                field, max, len
            ),
        ));
    }
    if let Some(pattern) = &rule.pattern
        && !pattern.is_match(s)
    {
        return Err(violation(
            field,
            ViolatedRule::Pattern,
            format!("'{}' does not match the expected format", field),
        ));
    }

    Ok(Value::String(s.to_string()))
}

fn check_integer(field: &str, value: &Value) -> Result<Value, ValidationError> {
    let ok = value.as_i64().is_some()
        || value.as_u64().is_some()
        || value.as_f64().is_some_and(|f| f.fract() == 0.0);
    if ok {
        Ok(value.clone())
    } else {
        Err(violation(
            field,
            ViolatedRule::Type,
            format!("'{}' must be an integer", field),
        ))
    }
}

fn check_number(field: &str, value: &Value) -> Result<Value, ValidationError> {
    if value.is_number() {
        Ok(value.clone())
    } else {
        Err(violation(
            field,
            ViolatedRule::Type,
            format!("'{}' must be a number", field),
        ))
    }
}

fn check_boolean(field: &str, value: &Value) -> Result<Value, ValidationError> {
    if value.is_boolean() {
        Ok(value.clone())
    } else {
        Err(violation(
            field,
            ViolatedRule::Type,
            format!("'{}' must be a boolean", field),
        ))
    }
}

/// Accepts RFC 3339 date-times, bare `%Y-%m-%d` / `%Y-%m-%dT%H:%M:%S%.f`
/// strings, and integer epoch milliseconds. The value is passed through
/// verbatim rather than re-encoded.
fn check_date(field: &str, value: &Value) -> Result<Value, ValidationError> {
    let ok = match value {
        Value::String(s) => {
            DateTime::parse_from_rfc3339(s).is_ok()
                || NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f").is_ok()
                || NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()
        }
        Value::Number(n) => n
            .as_i64()
            .is_some_and(|ms| DateTime::from_timestamp_millis(ms).is_some()),
        _ => false,
    };
    if ok {
        Ok(value.clone())
    } else {
        Err(violation(
            field,
            ViolatedRule::Type,
            format!("'{}' must be a date", field),
        ))
    }
}

fn check_string_array(
    field: &str,
    value: &Value,
    pattern: &Option<Regex>,
) -> Result<Value, ValidationError> {
    let Some(items) = value.as_array() else {
        return Err(violation(
            field,
            ViolatedRule::Type,
            format!("'{}' must be an array of strings", field),
        ));
    };

    let mut out = Vec::with_capacity(items.len());
    for item in items {
        let Some(raw) = item.as_str() else {
            return Err(violation(
                field,
                ViolatedRule::Type,
                format!("'{}' must contain only strings", field),
            ));
        };
        let s = raw.trim();
        if let Some(pattern) = pattern
            && !pattern.is_match(s)
        {
            return Err(violation(
                field,
                ViolatedRule::Pattern,
                format!(
                    "'{}' contains an item that does not match the expected format",
                    field
                ),
            ));
        }
        out.push(Value::String(s.to_string()));
    }
    Ok(Value::Array(out))
}

fn check_enum(field: &str, value: &Value, values: &[Value]) -> Result<Value, ValidationError> {
    if values.contains(value) {
        Ok(value.clone())
    } else {
        Err(violation(
            field,
            ViolatedRule::Enum,
            format!("'{}' must be one of the allowed values", field),
        ))
    }
}
