//! Immutable per-field constraints
//!
//! A [`FieldConstraint`] couples a primitive [`FieldKind`] with a
//! requiredness mode and an allow-list of exempted literals. Builders consume
//! `self` and return a new value; a constraint is never mutated after it is
//! placed in a set.

use regex::Regex;
use serde_json::Value;

use super::error::ValidationError;
use super::field::{FieldKind, StringRule};

/// Whether a field must be present, and what happens when it is not
#[derive(Debug, Clone, Default)]
pub enum Requiredness {
    /// Absence is a `MissingRequiredField` failure
    Required,
    /// Absence fills this value into the output
    Defaulted(Value),
    /// Absence omits the field from the output
    #[default]
    Optional,
}

/// A single field's validation and normalization rule
#[derive(Debug, Clone)]
pub struct FieldConstraint {
    kind: FieldKind,
    requiredness: Requiredness,
    allow: Vec<Value>,
}

impl FieldConstraint {
    pub fn new(kind: FieldKind) -> Self {
        Self {
            kind,
            requiredness: Requiredness::Optional,
            allow: Vec::new(),
        }
    }

    pub fn string() -> Self {
        Self::new(FieldKind::String(StringRule::default()))
    }

    pub fn integer() -> Self {
        Self::new(FieldKind::Integer)
    }

    pub fn number() -> Self {
        Self::new(FieldKind::Number)
    }

    pub fn boolean() -> Self {
        Self::new(FieldKind::Boolean)
    }

    pub fn date() -> Self {
        Self::new(FieldKind::Date)
    }

    pub fn string_array() -> Self {
        Self::new(FieldKind::ArrayOfString { pattern: None })
    }

    pub fn one_of(values: impl IntoIterator<Item = Value>) -> Self {
        Self::new(FieldKind::Enum(values.into_iter().collect()))
    }

    /// Trim surrounding whitespace before checking (string kinds only)
    pub fn trim(mut self) -> Self {
        if let FieldKind::String(rule) = &mut self.kind {
            rule.trim = true;
        }
        self
    }

    /// Minimum string length, inclusive
    pub fn min(mut self, min: usize) -> Self {
        if let FieldKind::String(rule) = &mut self.kind {
            rule.min = Some(min);
        }
        self
    }

    /// Maximum string length, inclusive
    pub fn max(mut self, max: usize) -> Self {
        if let FieldKind::String(rule) = &mut self.kind {
            rule.max = Some(max);
        }
        self
    }

    /// Full-value pattern for strings, or per-item pattern for string arrays.
    ///
    /// Panics on an invalid regex: patterns are static configuration and a
    /// bad one must abort at process start.
    pub fn pattern(mut self, pattern: &str) -> Self {
        let compiled = Regex::new(pattern).expect("invalid constraint pattern");
        match &mut self.kind {
            FieldKind::String(rule) => rule.pattern = Some(compiled),
            FieldKind::ArrayOfString { pattern } => *pattern = Some(compiled),
            _ => {}
        }
        self
    }

    /// Mark the field required. Overrides any default.
    pub fn required(mut self) -> Self {
        self.requiredness = Requiredness::Required;
        self
    }

    /// Fill `value` into the output when the field is absent.
    ///
    /// Ignored when the field is already required, matching the original
    /// flag precedence (required wins over default).
    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        if !matches!(self.requiredness, Requiredness::Required) {
            self.requiredness = Requiredness::Defaulted(value.into());
        }
        self
    }

    /// Exempt a literal from the kind/pattern check (commonly `null`)
    pub fn allow(mut self, value: impl Into<Value>) -> Self {
        self.allow.push(value.into());
        self
    }

    pub fn requiredness(&self) -> &Requiredness {
        &self.requiredness
    }

    pub fn kind(&self) -> &FieldKind {
        &self.kind
    }

    pub fn allow_list(&self) -> &[Value] {
        &self.allow
    }

    /// Check a present value: allow-listed literals short-circuit the kind
    /// check entirely, everything else goes through the kind's checker.
    pub(crate) fn check(&self, field: &str, value: &Value) -> Result<Value, ValidationError> {
        if self.allow.contains(value) {
            tracing::trace!(field, "allow-listed literal, skipping kind check");
            return Ok(value.clone());
        }
        self.kind.check(field, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_builder_is_pure_construction() {
        let base = FieldConstraint::string().trim().min(2).max(32);
        let required = base.clone().required();
        // the base constraint is untouched by deriving a required variant
        assert!(matches!(base.requiredness(), Requiredness::Optional));
        assert!(matches!(required.requiredness(), Requiredness::Required));
    }

    #[test]
    fn test_required_wins_over_default() {
        let constraint = FieldConstraint::integer().required().default_value(0);
        assert!(matches!(
            constraint.requiredness(),
            Requiredness::Required
        ));
    }

    #[test]
    fn test_default_value_recorded() {
        let constraint = FieldConstraint::integer().default_value(0);
        match constraint.requiredness() {
            Requiredness::Defaulted(v) => assert_eq!(v, &json!(0)),
            other => panic!("expected a default, got {:?}", other),
        }
    }

    #[test]
    fn test_allow_list_short_circuits_kind_check() {
        let constraint = FieldConstraint::string().min(1).allow(Value::Null);
        // null is not a string, but the allow-list exempts it
        assert_eq!(constraint.check("embed_title", &json!(null)).unwrap(), json!(null));
    }

    #[test]
    fn test_non_allowed_value_still_checked() {
        let constraint = FieldConstraint::string().allow(Value::Null);
        assert!(constraint.check("embed_title", &json!(42)).is_err());
    }

    #[test]
    fn test_pattern_on_string_array_applies_to_items() {
        let constraint = FieldConstraint::string_array().pattern("^[0-9]+$");
        assert!(constraint.check("roles", &json!(["12", "34"])).is_ok());
        assert!(constraint.check("roles", &json!(["ab"])).is_err());
    }
}
