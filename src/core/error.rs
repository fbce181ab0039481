//! Typed errors for payload validation
//!
//! Two distinct families live here:
//!
//! - [`ValidationError`]: deterministic, per-request outcomes of validating a
//!   payload. Never transient, never retried; the HTTP layer translates them
//!   verbatim into a 400-class response with a `{ message, key, type }` body.
//! - [`SchemaError`]: configuration defects (an unregistered field name, a
//!   dangling alias). These surface while constraint sets are being built at
//!   process start, never during request handling.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// Machine tag for the rule a field value violated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolatedRule {
    /// Wrong primitive kind (or unparseable date)
    Type,
    /// String shorter than the declared minimum
    Min,
    /// String longer than the declared maximum
    Max,
    /// Regex pattern mismatch
    Pattern,
    /// Value not in the enum's literal list
    Enum,
}

impl ViolatedRule {
    pub fn tag(&self) -> &'static str {
        match self {
            ViolatedRule::Type => "type",
            ViolatedRule::Min => "min",
            ViolatedRule::Max => "max",
            ViolatedRule::Pattern => "pattern",
            ViolatedRule::Enum => "enum",
        }
    }
}

/// A validation failure, identifying the first offending field
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Input was not a JSON object at all
    #[error("request body must be a JSON object")]
    MalformedInput,

    /// The constraint set recognized nothing in the input
    #[error("no recognized field present in the request body")]
    EmptyValidatedObject,

    /// A field marked required was absent from the input
    #[error("required field '{field}' is missing")]
    MissingRequiredField { field: String },

    /// A present field failed its declared rule
    #[error("{message}")]
    FieldConstraintViolation {
        field: String,
        rule: ViolatedRule,
        message: String,
    },
}

/// JSON body the HTTP layer answers validation failures with
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable description of the failure
    pub message: String,
    /// Offending field name, or `"object"` for whole-body failures
    pub key: String,
    /// Machine tag of the violated rule
    #[serde(rename = "type")]
    pub kind: String,
}

impl ValidationError {
    /// The offending field name, or `"object"` when the whole body failed
    pub fn key(&self) -> &str {
        match self {
            ValidationError::MalformedInput => "object",
            ValidationError::EmptyValidatedObject => "object",
            ValidationError::MissingRequiredField { field } => field,
            ValidationError::FieldConstraintViolation { field, .. } => field,
        }
    }

    /// Machine tag for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationError::MalformedInput => "object.base",
            ValidationError::EmptyValidatedObject => "object.min",
            ValidationError::MissingRequiredField { .. } => "required",
            ValidationError::FieldConstraintViolation { rule, .. } => rule.tag(),
        }
    }

    /// HTTP status for this failure
    pub fn status_code(&self) -> StatusCode {
        match self {
            ValidationError::MalformedInput => StatusCode::BAD_REQUEST,
            _ => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    /// Convert to the client-facing response body
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            message: self.to_string(),
            key: self.key().to_string(),
            kind: self.error_code().to_string(),
        }
    }
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

/// A defect in constraint-set configuration, raised at build time
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// A constraint set referenced a field name the registry does not know
    #[error("field '{0}' is not registered")]
    UnregisteredField(String),

    /// An alias was declared against a field name that does not exist
    #[error("alias '{alias}' points to unregistered field '{target}'")]
    DanglingAlias { alias: String, target: String },
}
