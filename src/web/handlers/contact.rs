//! Contact form handlers.

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use super::AppState;
use crate::contact::{Contact, ContactStore};
use crate::mail::{self, Mailer};
use crate::web::dto::{ContactCreatedResponse, ContactRequest, ValidatedJson};
use crate::web::error::ApiError;

/// POST /contact - Store a submission and acknowledge it by email.
///
/// The rate limit runs as route middleware before this handler. The
/// confirmation email is dispatched on a detached task and never affects
/// the response.
pub async fn submit_contact<S: ContactStore, M: Mailer>(
    State(state): State<Arc<AppState<S, M>>>,
    ValidatedJson(req): ValidatedJson<ContactRequest>,
) -> Result<(StatusCode, Json<ContactCreatedResponse>), ApiError> {
    let contact = state
        .store
        .create(req.into_new_contact())
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to store contact submission");
            ApiError::internal("Error submitting contact form").with_detail(e.to_string())
        })?;

    tracing::info!(id = %contact.id, "Contact submission stored");

    mail::dispatch(
        Arc::clone(&state.mailer),
        mail::confirmation_email(&contact),
    );

    Ok((
        StatusCode::CREATED,
        Json(ContactCreatedResponse::new(contact)),
    ))
}

/// GET /contact - List every stored submission.
pub async fn list_contacts<S: ContactStore, M: Mailer>(
    State(state): State<Arc<AppState<S, M>>>,
) -> Result<Json<Vec<Contact>>, ApiError> {
    let contacts = state.store.list_all().await.map_err(|e| {
        tracing::error!(error = %e, "Failed to list contact submissions");
        ApiError::internal("Error fetching contacts").with_detail(e.to_string())
    })?;

    Ok(Json(contacts))
}
