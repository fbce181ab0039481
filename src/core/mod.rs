//! Validation core
//!
//! The pure machinery: primitive field kinds, immutable per-field
//! constraints, constraint sets and the validation pass, plus the typed
//! error taxonomy.

pub mod constraint;
pub mod error;
pub mod field;
pub mod validate;

pub use constraint::{FieldConstraint, Requiredness};
pub use error::{ErrorResponse, SchemaError, ValidationError, ViolatedRule};
pub use field::{FieldKind, StringRule};
pub use validate::ConstraintSet;
