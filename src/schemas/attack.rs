//! Attack endpoint schemas
//!
//! An attack carries a display name, the role snowflakes allowed to use it,
//! progression gates (`required_roles`, `required_exp`), combat stats and an
//! optional embed (title/description/url, each nullable).

use serde_json::{Value, json};
use std::sync::OnceLock;

use crate::core::validate::ConstraintSet;
use crate::extract::{Operation, ValidatableSchema};
use crate::registry::{default_registry, optional, required};

pub struct Attack;

impl Attack {
    /// Body schema for `POST .../attacks`
    pub fn create() -> &'static ConstraintSet {
        static SET: OnceLock<ConstraintSet> = OnceLock::new();
        SET.get_or_init(|| {
            default_registry()
                .set()
                .field("name", required())
                .field("roles", optional().default_value(json!([])))
                .field("required_roles", optional().default_value(0))
                .field("required_exp", optional().default_value(0))
                .field("damage", optional().default_value(0))
                .field("stamina", optional().default_value(0))
                .field("embed_title", optional().allow(Value::Null).default_value(Value::Null))
                .field(
                    "embed_description",
                    optional().allow(Value::Null).default_value(Value::Null),
                )
                .field("embed_url", optional().allow(Value::Null).default_value(Value::Null))
                .build()
                .expect("attack create schema")
        })
    }

    /// Body schema for `PUT/PATCH .../attacks/{name}` — every field optional,
    /// absent fields are left untouched by the caller
    pub fn update() -> &'static ConstraintSet {
        static SET: OnceLock<ConstraintSet> = OnceLock::new();
        SET.get_or_init(|| {
            default_registry()
                .set()
                .field("name", optional())
                .field("roles", optional())
                .field("required_roles", optional())
                .field("required_exp", optional())
                .field("damage", optional())
                .field("stamina", optional())
                .field("embed_title", optional().allow(Value::Null))
                .field("embed_description", optional().allow(Value::Null))
                .field("embed_url", optional().allow(Value::Null))
                .build()
                .expect("attack update schema")
        })
    }

    /// Full-record schema: asserts a stored row round-trips intact
    pub fn record() -> &'static ConstraintSet {
        static SET: OnceLock<ConstraintSet> = OnceLock::new();
        SET.get_or_init(|| {
            default_registry()
                .set()
                .field("name", required())
                .field("roles", required())
                .field("required_roles", required())
                .field("required_exp", required())
                .field("damage", required())
                .field("stamina", required())
                .field("embed_title", required().allow(Value::Null))
                .field("embed_description", required().allow(Value::Null))
                .field("embed_url", required().allow(Value::Null))
                .field("created_at", required())
                .field("updated_at", required())
                .build()
                .expect("attack record schema")
        })
    }
}

impl ValidatableSchema for Attack {
    fn constraint_set(operation: Operation) -> &'static ConstraintSet {
        match operation {
            Operation::Create => Self::create(),
            Operation::Update => Self::update(),
        }
    }
}
