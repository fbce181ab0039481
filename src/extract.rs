//! Axum extractor for validated payloads
//!
//! [`Validated<T>`] runs a request body through the constraint set `T`
//! declares for the operation implied by the HTTP method, handing the handler
//! an already-narrowed record. Rejections carry the `{ message, key, type }`
//! body the backend's clients expect.

use axum::extract::{FromRequest, Request};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{Map, Value};

use crate::core::error::ValidationError;
use crate::core::validate::ConstraintSet;

/// Which endpoint flavor a request body is validated as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    Update,
}

/// Entities that expose per-operation constraint sets
pub trait ValidatableSchema {
    fn constraint_set(operation: Operation) -> &'static ConstraintSet;
}

/// Extractor that validates and filters a JSON body before the handler runs
///
/// ```rust,ignore
/// async fn create_attack(payload: Validated<Attack>) -> Json<Value> {
///     // payload is narrowed to the attack-create shape, defaults filled
///     Json(Value::Object(payload.into_inner()))
/// }
/// ```
pub struct Validated<T>(pub Map<String, Value>, std::marker::PhantomData<T>);

impl<T> Validated<T> {
    pub fn new(payload: Map<String, Value>) -> Self {
        Self(payload, std::marker::PhantomData)
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl<T> std::ops::Deref for Validated<T> {
    type Target = Map<String, Value>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S, T> FromRequest<S> for Validated<T>
where
    S: Send + Sync,
    T: ValidatableSchema + Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let method = req.method().clone();

        // An unparseable body is indistinguishable from a non-object one at
        // this boundary: both are MalformedInput.
        let Json(payload): Json<Value> = match Json::from_request(req, state).await {
            Ok(json) => json,
            Err(_) => return Err(ValidationError::MalformedInput.into_response()),
        };

        let operation = match method.as_str() {
            "PUT" | "PATCH" => Operation::Update,
            _ => Operation::Create,
        };

        let set = T::constraint_set(operation);
        match set.validate(&payload) {
            Ok(validated) => Ok(Validated::new(validated)),
            Err(err) => Err(err.into_response()),
        }
    }
}
