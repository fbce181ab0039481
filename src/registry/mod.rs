//! Constraint registry
//!
//! Maps semantic field names to base constraints. A registry is assembled
//! once at process start; endpoints then derive [`ConstraintSet`]s from it by
//! naming fields and supplying per-endpoint requiredness flags. Aliases
//! (`guild_id` carrying the same rule as `id`) are resolved when the registry
//! is built, never at validation time.

use indexmap::IndexMap;
use serde_json::Value;
use std::sync::OnceLock;

use crate::core::constraint::FieldConstraint;
use crate::core::error::SchemaError;
use crate::core::validate::ConstraintSet;

/// Per-endpoint flags applied on top of a registered base constraint
#[derive(Debug, Clone, Default)]
pub struct FieldSpec {
    required: bool,
    default: Option<Value>,
    allow: Vec<Value>,
}

impl FieldSpec {
    /// Fill `value` into the output when the field is absent (ignored when
    /// the field is required)
    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Exempt a literal from the field's kind/pattern check
    pub fn allow(mut self, value: impl Into<Value>) -> Self {
        self.allow.push(value.into());
        self
    }
}

/// The field is mandatory for this endpoint
pub fn required() -> FieldSpec {
    FieldSpec {
        required: true,
        ..Default::default()
    }
}

/// The field may be absent
pub fn optional() -> FieldSpec {
    FieldSpec::default()
}

/// An immutable mapping from field name to base constraint
#[derive(Debug, Clone)]
pub struct Registry {
    fields: IndexMap<String, FieldConstraint>,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder {
            fields: IndexMap::new(),
            aliases: Vec::new(),
        }
    }

    /// Derive a finished constraint from a registered base rule plus
    /// per-endpoint flags. Fails fast on an unregistered name: that is a
    /// configuration defect, not a request-time condition.
    pub fn constraint(&self, name: &str, spec: FieldSpec) -> Result<FieldConstraint, SchemaError> {
        let base = self
            .fields
            .get(name)
            .ok_or_else(|| SchemaError::UnregisteredField(name.to_string()))?;

        let mut constraint = base.clone();
        for value in spec.allow {
            constraint = constraint.allow(value);
        }
        if spec.required {
            constraint = constraint.required();
        } else if let Some(default) = spec.default {
            constraint = constraint.default_value(default);
        }
        Ok(constraint)
    }

    /// Start building a [`ConstraintSet`] against this registry
    pub fn set(&self) -> ConstraintSetBuilder<'_> {
        ConstraintSetBuilder {
            registry: self,
            entries: Vec::new(),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Builder collecting base constraints and alias declarations
#[derive(Debug)]
pub struct RegistryBuilder {
    fields: IndexMap<String, FieldConstraint>,
    aliases: Vec<(String, String)>,
}

impl RegistryBuilder {
    pub fn field(mut self, name: impl Into<String>, base: FieldConstraint) -> Self {
        self.fields.insert(name.into(), base);
        self
    }

    /// Declare `name` as carrying the same rule as `target`
    pub fn alias(mut self, name: impl Into<String>, target: impl Into<String>) -> Self {
        self.aliases.push((name.into(), target.into()));
        self
    }

    /// Resolve aliases and freeze the registry
    pub fn build(mut self) -> Result<Registry, SchemaError> {
        for (name, target) in self.aliases {
            let base = self
                .fields
                .get(&target)
                .cloned()
                .ok_or_else(|| SchemaError::DanglingAlias {
                    alias: name.clone(),
                    target: target.clone(),
                })?;
            self.fields.insert(name, base);
        }
        tracing::debug!(fields = self.fields.len(), "constraint registry built");
        Ok(Registry {
            fields: self.fields,
        })
    }
}

/// Builds a [`ConstraintSet`] by naming registered fields with per-endpoint
/// flags. Resolution happens once in [`build`](Self::build); the resulting
/// set holds fully-resolved constraints and never consults the registry
/// again.
#[derive(Debug)]
pub struct ConstraintSetBuilder<'r> {
    registry: &'r Registry,
    entries: Vec<(String, FieldSpec)>,
}

impl<'r> ConstraintSetBuilder<'r> {
    pub fn field(mut self, name: impl Into<String>, spec: FieldSpec) -> Self {
        self.entries.push((name.into(), spec));
        self
    }

    pub fn build(self) -> Result<ConstraintSet, SchemaError> {
        let mut set = ConstraintSet::new();
        for (name, spec) in self.entries {
            let constraint = self.registry.constraint(&name, spec)?;
            set.insert(name, constraint);
        }
        Ok(set)
    }
}

/// The process-wide registry carrying the backend's field rules.
///
/// `guild_id`, `role` and `player_id` alias the generic snowflake rule of
/// `id`; `roles` holds an array of such snowflakes.
pub fn default_registry() -> &'static Registry {
    static REGISTRY: OnceLock<Registry> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        Registry::builder()
            .field(
                "name",
                FieldConstraint::string()
                    .trim()
                    .min(2)
                    .max(32)
                    .pattern(r"^[^-+>@&$].+$"),
            )
            .field(
                "id",
                FieldConstraint::string().trim().pattern("^[0-9]+$"),
            )
            .field(
                "embed_title",
                FieldConstraint::string().trim().min(1).max(96).pattern(r"^\D.+$"),
            )
            .field(
                "embed_description",
                FieldConstraint::string()
                    .trim()
                    .min(1)
                    .max(4096)
                    .pattern(r"^\D.+$"),
            )
            .field(
                "embed_url",
                FieldConstraint::string().trim().pattern(r"^(https?://\S+|/\S+)$"),
            )
            .field("type", FieldConstraint::integer())
            .field("damage", FieldConstraint::integer())
            .field("stamina", FieldConstraint::integer())
            .field("required_exp", FieldConstraint::integer())
            .field("required_roles", FieldConstraint::integer())
            .field(
                "roles",
                FieldConstraint::string_array().pattern("^[0-9]+$"),
            )
            .field("created_at", FieldConstraint::date())
            .field("updated_at", FieldConstraint::date())
            .alias("guild_id", "id")
            .alias("role", "id")
            .alias("player_id", "id")
            .build()
            .expect("default registry configuration")
    })
}
