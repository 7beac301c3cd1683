//! Validation utilities for Web API DTOs.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::web::error::{ApiError, FieldError};

/// A [`Validate`] type that knows the order its fields should be reported in.
pub trait ValidateFields: Validate {
    /// Field names in declaration order.
    const FIELDS: &'static [&'static str];
}

/// A JSON extractor that validates the request body.
///
/// This extractor deserializes the request body as JSON and then validates it
/// using the `validator` crate. A body that is not valid JSON for `T` becomes
/// a 400 `{message, error}`; validation failures become a 400 with every
/// failing field listed.
///
/// # Example
///
/// ```ignore
/// use contact_intake::web::dto::ValidatedJson;
///
/// async fn submit(
///     ValidatedJson(payload): ValidatedJson<ContactRequest>,
/// ) -> Result<Json<Contact>, ApiError> {
///     // payload is already validated
///     // ...
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + ValidateFields,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|e| {
            ApiError::bad_request("Invalid request body").with_detail(e.body_text())
        })?;

        value
            .validate()
            .map_err(|e| ApiError::validation(ordered_field_errors(&e, T::FIELDS)))?;

        Ok(ValidatedJson(value))
    }
}

/// Flatten `errors` into one entry per failure, ordered by `fields`.
///
/// Fields missing from `fields` are reported last.
pub fn ordered_field_errors(errors: &ValidationErrors, fields: &[&str]) -> Vec<FieldError> {
    let mut ranked: Vec<(usize, FieldError)> = Vec::new();

    for (field, field_errors) in errors.field_errors() {
        let name = field.to_string();
        let rank = fields
            .iter()
            .position(|f| *f == name)
            .unwrap_or(fields.len());

        for e in field_errors.iter() {
            let msg = e
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("Invalid value for {}", name));
            ranked.push((rank, FieldError::body(name.clone(), msg)));
        }
    }

    ranked.sort_by_key(|(rank, _)| *rank);
    ranked.into_iter().map(|(_, e)| e).collect()
}

// ============================================================================
// Custom Validators
// ============================================================================

/// Validate that a string is not empty after trimming whitespace.
pub fn not_empty_trimmed(value: &str) -> Result<(), validator::ValidationError> {
    if value.trim().is_empty() {
        return Err(validator::ValidationError::new("not_empty_trimmed")
            .with_message("Must not be empty".into()));
    }
    Ok(())
}
