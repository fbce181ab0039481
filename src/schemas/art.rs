//! Art endpoint schemas
//!
//! An art groups attacks under a named discipline with a numeric category
//! (`type`), an optional gating role and an optional embed.

use serde_json::Value;
use std::sync::OnceLock;

use crate::core::validate::ConstraintSet;
use crate::extract::{Operation, ValidatableSchema};
use crate::registry::{default_registry, optional, required};

pub struct Art;

impl Art {
    /// Body schema for `POST /guilds/{guild_id}/arts`
    pub fn create() -> &'static ConstraintSet {
        static SET: OnceLock<ConstraintSet> = OnceLock::new();
        SET.get_or_init(|| {
            default_registry()
                .set()
                .field("name", required())
                .field("type", required())
                .field("role", optional().allow(Value::Null).default_value(Value::Null))
                .field("embed_title", optional().allow(Value::Null).default_value(Value::Null))
                .field(
                    "embed_description",
                    optional().allow(Value::Null).default_value(Value::Null),
                )
                .field("embed_url", optional().allow(Value::Null).default_value(Value::Null))
                .build()
                .expect("art create schema")
        })
    }

    /// Body schema for `PUT/PATCH /guilds/{guild_id}/arts/{name}`
    pub fn update() -> &'static ConstraintSet {
        static SET: OnceLock<ConstraintSet> = OnceLock::new();
        SET.get_or_init(|| {
            default_registry()
                .set()
                .field("name", optional())
                .field("type", optional())
                .field("role", optional().allow(Value::Null))
                .field("embed_title", optional().allow(Value::Null))
                .field("embed_description", optional().allow(Value::Null))
                .field("embed_url", optional().allow(Value::Null))
                .build()
                .expect("art update schema")
        })
    }
}

impl ValidatableSchema for Art {
    fn constraint_set(operation: Operation) -> &'static ConstraintSet {
        match operation {
            Operation::Create => Self::create(),
            Operation::Update => Self::update(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ValidationError, ViolatedRule};
    use serde_json::json;

    #[test]
    fn test_create_requires_name_and_type() {
        let output = Art::create()
            .validate(&json!({"name": "Water Breathing", "type": 1}))
            .expect("minimal create body");
        assert_eq!(output.get("role"), Some(&Value::Null));

        assert_eq!(
            Art::create()
                .validate(&json!({"name": "Water Breathing"}))
                .unwrap_err(),
            ValidationError::MissingRequiredField {
                field: "type".to_string()
            }
        );
    }

    #[test]
    fn test_type_must_be_an_integer() {
        let err = Art::create()
            .validate(&json!({"name": "Water Breathing", "type": "first"}))
            .unwrap_err();
        assert!(matches!(
            err,
            ValidationError::FieldConstraintViolation { rule: ViolatedRule::Type, .. }
        ));
    }

    #[test]
    fn test_role_accepts_snowflake_or_null() {
        assert!(
            Art::update()
                .validate(&json!({"role": "987654321"}))
                .is_ok()
        );
        assert!(Art::update().validate(&json!({"role": null})).is_ok());
        assert!(Art::update().validate(&json!({"role": "admin"})).is_err());
    }

    #[test]
    fn test_update_drops_unknown_fields() {
        let output = Art::update()
            .validate(&json!({"type": 2, "attacks": ["should", "vanish"]}))
            .unwrap();
        assert!(!output.contains_key("attacks"));
    }
}
