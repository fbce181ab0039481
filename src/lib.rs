//! # fieldgate
//!
//! Declarative field-constraint validation and payload filtering for JSON
//! APIs.
//!
//! ## Features
//!
//! - **Closed kind set**: string / integer / number / boolean / date /
//!   string-array / enum, each with per-kind checks and string trimming
//! - **Pure construction**: constraints are immutable values; builders return
//!   new constraints instead of mutating shared schema objects
//! - **Registry with aliases**: one base rule per semantic field name,
//!   aliases resolved at build time (`guild_id` reuses the `id` rule)
//! - **Narrow-to-known-shape**: unrecognized fields are dropped, but a body
//!   the schema recognizes nothing in is rejected outright
//! - **Typed failures**: four deterministic error kinds, serialized as the
//!   `{ message, key, type }` body API clients expect
//! - **Axum integration**: a `Validated<T>` extractor that rejects bad
//!   payloads before the handler runs
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use fieldgate::prelude::*;
//!
//! let registry = Registry::builder()
//!     .field("name", FieldConstraint::string().trim().min(2).max(32))
//!     .field("id", FieldConstraint::string().trim().pattern("^[0-9]+$"))
//!     .alias("guild_id", "id")
//!     .build()?;
//!
//! let create = registry
//!     .set()
//!     .field("name", required())
//!     .field("guild_id", required())
//!     .build()?;
//!
//! let record = create.validate(&payload)?;
//! ```

pub mod core;
pub mod extract;
pub mod registry;
pub mod schemas;

/// Re-exports of commonly used types
pub mod prelude {
    pub use crate::core::{
        ConstraintSet, ErrorResponse, FieldConstraint, FieldKind, Requiredness, SchemaError,
        StringRule, ValidationError, ViolatedRule,
    };
    pub use crate::extract::{Operation, Validated, ValidatableSchema};
    pub use crate::registry::{FieldSpec, Registry, default_registry, optional, required};
    pub use crate::schemas::{Art, Attack, Guild, Player};

    // === External dependencies ===
    pub use serde_json::{Map, Value, json};
}
