//! Constraint sets and the validation pass
//!
//! A [`ConstraintSet`] is an ordered, immutable mapping from field name to
//! [`FieldConstraint`], built once per endpoint and reused for every request.
//! [`ConstraintSet::validate`] is a pure function: no I/O, no shared state,
//! safe to call from any number of tasks concurrently.

use indexmap::IndexMap;
use serde_json::{Map, Value};

use super::constraint::{FieldConstraint, Requiredness};
use super::error::ValidationError;

/// An endpoint's full collection of field constraints
#[derive(Debug, Clone, Default)]
pub struct ConstraintSet {
    fields: IndexMap<String, FieldConstraint>,
}

impl ConstraintSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set directly from `(name, constraint)` pairs, bypassing the
    /// registry. Iteration (and therefore error-reporting) order is insertion
    /// order.
    pub fn of(fields: impl IntoIterator<Item = (String, FieldConstraint)>) -> Self {
        Self {
            fields: fields.into_iter().collect(),
        }
    }

    pub fn insert(&mut self, name: impl Into<String>, constraint: FieldConstraint) {
        self.fields.insert(name.into(), constraint);
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldConstraint)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Validate and narrow a raw payload to this set's shape.
    ///
    /// Returns the normalized record: every required field present, defaults
    /// filled for absent defaulted fields, string fields trimmed, and no
    /// unrecognized fields. Unrecognized input fields are dropped silently —
    /// unless the input recognizably contains *nothing*, which fails with
    /// [`ValidationError::EmptyValidatedObject`].
    pub fn validate(&self, input: &Value) -> Result<Map<String, Value>, ValidationError> {
        let Some(obj) = input.as_object() else {
            tracing::debug!("rejecting non-object payload");
            return Err(ValidationError::MalformedInput);
        };

        // A non-empty body sharing zero keys with the set fails before the
        // field pass; an empty body falls through so a required field gets
        // reported as missing instead.
        if !obj.is_empty() && obj.keys().all(|k| !self.fields.contains_key(k)) {
            tracing::debug!("payload contains no recognized field");
            return Err(ValidationError::EmptyValidatedObject);
        }

        let mut output = Map::new();
        let mut recognized = 0usize;

        for (name, constraint) in &self.fields {
            match obj.get(name) {
                None => match constraint.requiredness() {
                    Requiredness::Required => {
                        tracing::debug!(field = %name, "required field missing");
                        return Err(ValidationError::MissingRequiredField {
                            field: name.clone(),
                        });
                    }
                    Requiredness::Defaulted(default) => {
                        output.insert(name.clone(), default.clone());
                    }
                    Requiredness::Optional => {}
                },
                Some(value) => {
                    recognized += 1;
                    let normalized = constraint.check(name, value)?;
                    output.insert(name.clone(), normalized);
                }
            }
        }

        if recognized == 0 {
            // Empty input with no required field: defaults alone never rescue
            // a body the set recognized nothing in.
            tracing::debug!("no recognized input field consumed");
            return Err(ValidationError::EmptyValidatedObject);
        }

        if tracing::enabled!(tracing::Level::TRACE) {
            for key in obj.keys().filter(|k| !self.fields.contains_key(*k)) {
                tracing::trace!(field = %key, "dropping unrecognized field");
            }
        }

        Ok(output)
    }
}

impl FromIterator<(String, FieldConstraint)> for ConstraintSet {
    fn from_iter<I: IntoIterator<Item = (String, FieldConstraint)>>(iter: I) -> Self {
        Self::of(iter)
    }
}
