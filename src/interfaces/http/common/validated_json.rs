//! JSON body extraction with request validation
//!
//! Handlers take `ValidatedJson<T>` instead of `axum::Json<T>` when the
//! body type derives `validator::Validate`. A body that is not valid JSON
//! is rejected with 400, one that deserializes but fails field validation
//! with 422. Both come back in the standard error envelope.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use super::ApiResponse;

/// `axum::Json` plus a `validate()` pass on the deserialized value.
pub struct ValidatedJson<T>(pub T);

/// Why a request body was rejected.
pub enum BodyRejection {
    /// The body was not JSON, or not JSON of the expected shape.
    Malformed(JsonRejection),
    /// The JSON deserialized but one or more fields failed validation.
    Invalid(ValidationErrors),
}

/// Flattens validator's per-field error map into one line, fields in
/// stable order so the message is deterministic.
fn describe(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by_key(|(field, _)| *field);

    let parts: Vec<String> = fields
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(msg) => format!("{}: {}", field, msg),
                None => format!("{}: {}", field, e.code),
            })
        })
        .collect();

    if parts.is_empty() {
        "Validation failed".to_string()
    } else {
        parts.join("; ")
    }
}

impl IntoResponse for BodyRejection {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::Malformed(rejection) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid JSON: {}", rejection),
            ),
            Self::Invalid(errors) => (StatusCode::UNPROCESSABLE_ENTITY, describe(errors)),
        };
        (status, Json(ApiResponse::<()>::error(message))).into_response()
    }
}

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = BodyRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<T>::from_request(req, state)
            .await
            .map_err(BodyRejection::Malformed)?;
        body.validate().map_err(BodyRejection::Invalid)?;
        Ok(ValidatedJson(body))
    }
}

// ── Tests ──────────────────────────────────────────────────────
